//! Deep-link match caching.
//!
//! [`MatchCache`] is an LRU map from a normalized path to the outcome of
//! [`DeepLinkMatcher::match_path`], misses included. It is gated behind the
//! `cache` feature and uses the [`lru`] crate internally.
//!
//! The cache is separate from the matcher so the matcher can stay shared and
//! immutable; clear the cache whenever the matcher is rebuilt.
//!
//! # Examples
//!
//! ```
//! use app_routes::cache::MatchCache;
//! use app_routes::DeepLinkMatcher;
//!
//! let matcher = DeepLinkMatcher::from_templates(["/race/details/[id]"]).unwrap();
//! let mut cache = MatchCache::new();
//!
//! matcher.match_cached(&mut cache, "/race/details/1");
//! matcher.match_cached(&mut cache, "/race/details/1/");
//!
//! assert_eq!(cache.stats().misses, 1);
//! assert_eq!(cache.stats().hits, 1);
//! ```

use crate::matching::{normalize_path, strip_query, DeepLinkMatcher, RouteMatch};
use crate::{debug_log, trace_log};
use lru::LruCache;
use std::num::NonZeroUsize;

/// Counters tracking cache hit/miss rates and invalidations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of lookups answered from the cache.
    pub hits: usize,
    /// Number of lookups that went to the matcher.
    pub misses: usize,
    /// Number of full cache invalidations (via [`MatchCache::clear`]).
    pub invalidations: usize,
}

impl CacheStats {
    /// Return the hit rate as a value in `0.0..=1.0`.
    ///
    /// Returns `0.0` if no lookups have been performed.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// LRU cache of deep-link match results.
#[derive(Debug)]
pub struct MatchCache {
    entries: LruCache<String, Option<RouteMatch>>,
    stats: CacheStats,
}

impl MatchCache {
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(256) {
        Some(capacity) => capacity,
        None => unreachable!(),
    };

    /// Create a cache holding up to 256 paths.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Create a cache with a custom capacity.
    pub fn with_capacity(capacity: NonZeroUsize) -> Self {
        Self {
            entries: LruCache::new(capacity),
            stats: CacheStats::default(),
        }
    }

    /// Look up a path. The outer `None` is a cache miss; `Some(None)` is a
    /// cached "no route matches".
    pub fn get(&mut self, path: &str) -> Option<Option<RouteMatch>> {
        if let Some(entry) = self.entries.get(path) {
            self.stats.hits += 1;
            trace_log!("Match cache hit for '{}'", path);
            Some(entry.clone())
        } else {
            self.stats.misses += 1;
            trace_log!("Match cache miss for '{}'", path);
            None
        }
    }

    /// Store the outcome for a path, evicting the least recently used entry if full.
    pub fn insert(&mut self, path: String, outcome: Option<RouteMatch>) {
        if let Some((displaced, _)) = self.entries.push(path, outcome) {
            trace_log!("Match cache displaced '{}'", displaced);
        }
    }

    /// Clear every entry and increment the invalidation counter.
    pub fn clear(&mut self) {
        let len = self.entries.len();
        self.entries.clear();
        self.stats.invalidations += 1;
        debug_log!(
            "Match cache cleared: {} entries removed ({} invalidations, hit rate {:.1}%)",
            len,
            self.stats.invalidations,
            self.stats.hit_rate() * 100.0
        );
    }

    /// Return a reference to the current statistics.
    pub const fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Reset all counters to zero.
    pub fn reset_stats(&mut self) {
        self.stats = CacheStats::default();
    }

    /// Number of cached paths.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MatchCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DeepLinkMatcher {
    /// [`match_path`](Self::match_path) through a [`MatchCache`].
    ///
    /// The cache key is the normalized path without query or fragment, so
    /// `/events/` and `/events?x=1` share an entry with `/events`.
    pub fn match_cached(&self, cache: &mut MatchCache, path: &str) -> Option<RouteMatch> {
        let key = normalize_path(strip_query(path));

        if let Some(outcome) = cache.get(&key) {
            return outcome;
        }

        let outcome = self.match_path(&key);
        cache.insert(key.into_owned(), outcome.clone());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> DeepLinkMatcher {
        DeepLinkMatcher::from_templates(["/events", "/events/[id]"]).unwrap()
    }

    #[test]
    fn test_cache_creation() {
        let cache = MatchCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.stats(), &CacheStats::default());
    }

    #[test]
    fn test_miss_then_hit() {
        let matcher = matcher();
        let mut cache = MatchCache::new();

        let first = matcher.match_cached(&mut cache, "/events/3");
        let second = matcher.match_cached(&mut cache, "/events/3?tab=map");

        assert_eq!(first, second);
        assert_eq!(cache.stats().misses, 1);
        assert_eq!(cache.stats().hits, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_fragment_and_query_share_entry() {
        let matcher = matcher();
        let mut cache = MatchCache::new();

        matcher.match_cached(&mut cache, "/events/3#map");
        matcher.match_cached(&mut cache, "events/3/?tab=map#top");

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.stats().hits, 1);
        assert!(cache.get("/events/3").is_some());
    }

    #[test]
    fn test_negative_results_are_cached() {
        let matcher = matcher();
        let mut cache = MatchCache::new();

        assert!(matcher.match_cached(&mut cache, "/nowhere").is_none());
        assert!(matcher.match_cached(&mut cache, "/nowhere").is_none());
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_eviction() {
        let matcher = matcher();
        let mut cache = MatchCache::with_capacity(NonZeroUsize::new(2).unwrap());

        matcher.match_cached(&mut cache, "/events/1");
        matcher.match_cached(&mut cache, "/events/2");
        matcher.match_cached(&mut cache, "/events/3");

        assert_eq!(cache.len(), 2);
        assert!(cache.get("/events/1").is_none());
        assert!(cache.get("/events/3").is_some());
    }

    #[test]
    fn test_cache_clear() {
        let matcher = matcher();
        let mut cache = MatchCache::new();
        matcher.match_cached(&mut cache, "/events");

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.stats().invalidations, 1);
    }

    #[test]
    fn test_hit_rate_calculation() {
        let matcher = matcher();
        let mut cache = MatchCache::new();
        for path in ["/events/1", "/events/2", "/events/1", "/events/1", "/events/2"] {
            matcher.match_cached(&mut cache, path);
        }

        assert_eq!(cache.stats().hits, 3);
        assert_eq!(cache.stats().misses, 2);
        assert!((cache.stats().hit_rate() - 0.6).abs() < 0.001);
    }
}
