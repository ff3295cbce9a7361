//! Navigation actions over an injected host primitive.
//!
//! The host environment owns the screen stack; this crate only hands it
//! resolved paths. Two types cover the seam:
//!
//! - [`NavigationPrimitive`] — the host's push/replace/back capability.
//!   Implement it for the real router, use
//!   [`MemoryHistory`](crate::MemoryHistory) for headless hosts, or a
//!   recording fake in tests.
//! - [`Navigator`] — wraps a primitive passed in at construction and exposes
//!   typed actions that resolve-then-delegate.
//!
//! # Availability
//!
//! A primitive that is not mounted yet reports
//! [`is_ready`](NavigationPrimitive::is_ready) `== false`. Actions issued in
//! that window are dropped with a warning; nothing is retried or queued.
//! `Option<P>` implements the trait, with `None` standing for "not mounted".
//!
//! # Example
//!
//! ```
//! use app_routes::{AppRoute, MemoryHistory, Navigator};
//!
//! let mut nav = Navigator::new(MemoryHistory::new());
//! nav.push(AppRoute::RaceDetails { id: 7.into() });
//! assert_eq!(nav.primitive().current_path(), "/race/details/7");
//!
//! assert!(nav.back());
//! assert_eq!(nav.primitive().current_path(), "/");
//! ```

use crate::error::NavigationResult;
use crate::{debug_log, info_log, resolve, trace_log, warn_log, RouteKey, RouteParams};

// ============================================================================
// NavigationPrimitive trait
// ============================================================================

/// The host's stack-based screen-transition mechanism.
///
/// All methods are synchronous and fire-and-forget; the host owns any
/// animation timing or queueing.
pub trait NavigationPrimitive {
    /// Push `path` on top of the stack.
    fn push(&mut self, path: &str);

    /// Replace the top of the stack with `path`.
    fn replace(&mut self, path: &str);

    /// Pop the top of the stack.
    fn back(&mut self);

    /// Return `false` while the host router is not mounted. Default: `true`.
    fn is_ready(&self) -> bool {
        true
    }

    /// Return `false` when there is nothing to go back to. Default: `true`.
    fn can_go_back(&self) -> bool {
        true
    }

    /// Primitive name for debugging.
    fn name(&self) -> &'static str {
        "NavigationPrimitive"
    }
}

impl<P: NavigationPrimitive + ?Sized> NavigationPrimitive for &mut P {
    fn push(&mut self, path: &str) {
        (**self).push(path);
    }

    fn replace(&mut self, path: &str) {
        (**self).replace(path);
    }

    fn back(&mut self) {
        (**self).back();
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn can_go_back(&self) -> bool {
        (**self).can_go_back()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

impl<P: NavigationPrimitive + ?Sized> NavigationPrimitive for Box<P> {
    fn push(&mut self, path: &str) {
        (**self).push(path);
    }

    fn replace(&mut self, path: &str) {
        (**self).replace(path);
    }

    fn back(&mut self) {
        (**self).back();
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }

    fn can_go_back(&self) -> bool {
        (**self).can_go_back()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// `None` is a primitive that has not been mounted yet.
impl<P: NavigationPrimitive> NavigationPrimitive for Option<P> {
    fn push(&mut self, path: &str) {
        if let Some(inner) = self {
            inner.push(path);
        }
    }

    fn replace(&mut self, path: &str) {
        if let Some(inner) = self {
            inner.replace(path);
        }
    }

    fn back(&mut self) {
        if let Some(inner) = self {
            inner.back();
        }
    }

    fn is_ready(&self) -> bool {
        self.as_ref().is_some_and(|inner| inner.is_ready())
    }

    fn can_go_back(&self) -> bool {
        self.as_ref().is_some_and(|inner| inner.can_go_back())
    }

    fn name(&self) -> &'static str {
        self.as_ref().map_or("Unmounted", |inner| inner.name())
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Typed navigation actions over a host primitive.
///
/// Holds no state besides the primitive; every call resolves its route
/// independently.
#[derive(Debug, Clone, Default)]
pub struct Navigator<P> {
    primitive: P,
}

impl<P: NavigationPrimitive> Navigator<P> {
    /// Wrap a host primitive.
    pub fn new(primitive: P) -> Self {
        Self { primitive }
    }

    /// Borrow the underlying primitive.
    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Mutably borrow the underlying primitive (e.g. to mount it).
    pub fn primitive_mut(&mut self) -> &mut P {
        &mut self.primitive
    }

    /// Consume the navigator and return the primitive.
    pub fn into_inner(self) -> P {
        self.primitive
    }

    /// Resolve `route` and push it.
    pub fn push(&mut self, route: impl RouteKey) -> NavigationResult {
        let params = route.params();
        self.dispatch(NavigateOp::Push, route.template(), non_empty(&params))
    }

    /// Resolve `route` and replace the current entry with it.
    pub fn replace(&mut self, route: impl RouteKey) -> NavigationResult {
        let params = route.params();
        self.dispatch(NavigateOp::Replace, route.template(), non_empty(&params))
    }

    /// Resolve a dynamic template and push it.
    pub fn push_path(&mut self, template: &str, params: Option<&RouteParams>) -> NavigationResult {
        self.dispatch(NavigateOp::Push, template, params)
    }

    /// Resolve a dynamic template and replace the current entry with it.
    pub fn replace_path(
        &mut self,
        template: &str,
        params: Option<&RouteParams>,
    ) -> NavigationResult {
        self.dispatch(NavigateOp::Replace, template, params)
    }

    /// Go back if the primitive is mounted and has somewhere to go.
    ///
    /// Returns `true` if the primitive's `back` was invoked.
    pub fn back(&mut self) -> bool {
        if !self.primitive.is_ready() {
            warn_log!(
                "Navigation primitive '{}' not mounted, ignoring back",
                self.primitive.name()
            );
            return false;
        }
        if !self.primitive.can_go_back() {
            debug_log!("Nothing to go back to, ignoring back");
            return false;
        }

        info_log!("Navigation back");
        self.primitive.back();
        true
    }

    /// Return `true` if [`back`](Self::back) would reach the primitive.
    pub fn can_go_back(&self) -> bool {
        self.primitive.is_ready() && self.primitive.can_go_back()
    }

    fn dispatch(
        &mut self,
        op: NavigateOp,
        template: &str,
        params: Option<&RouteParams>,
    ) -> NavigationResult {
        let path = resolve(template, params);

        if !self.primitive.is_ready() {
            warn_log!(
                "Navigation primitive '{}' not mounted, dropping {:?} to '{}'",
                self.primitive.name(),
                op,
                path
            );
            return NavigationResult::Unavailable;
        }

        if !crate::is_fully_resolved(&path) {
            warn_log!(
                "Path '{}' still has unresolved placeholders {:?}",
                path,
                crate::placeholders(&path)
            );
        }

        info_log!("Navigation {:?}: '{}'", op, path);
        match op {
            NavigateOp::Push => self.primitive.push(&path),
            NavigateOp::Replace => self.primitive.replace(&path),
        }
        trace_log!("Delegated to '{}'", self.primitive.name());

        NavigationResult::Dispatched { path }
    }
}

fn non_empty(params: &RouteParams) -> Option<&RouteParams> {
    if params.is_empty() {
        None
    } else {
        Some(params)
    }
}

/// Internal enum for the kind of stack mutation to delegate.
#[derive(Debug, Clone, Copy)]
enum NavigateOp {
    Push,
    Replace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AppRoute;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        depth: usize,
    }

    impl NavigationPrimitive for Recorder {
        fn push(&mut self, path: &str) {
            self.calls.push(format!("push {path}"));
            self.depth += 1;
        }

        fn replace(&mut self, path: &str) {
            self.calls.push(format!("replace {path}"));
        }

        fn back(&mut self) {
            self.calls.push("back".to_string());
            self.depth -= 1;
        }

        fn can_go_back(&self) -> bool {
            self.depth > 0
        }
    }

    #[test]
    fn test_push_resolves_then_delegates() {
        let mut nav = Navigator::new(Recorder::default());
        let result = nav.push(AppRoute::RaceDetails { id: 7.into() });

        assert_eq!(result.path(), Some("/race/details/7"));
        assert_eq!(nav.primitive().calls, vec!["push /race/details/7"]);
    }

    #[test]
    fn test_replace_static_route() {
        let mut nav = Navigator::new(Recorder::default());
        nav.replace(AppRoute::Login);
        assert_eq!(nav.primitive().calls, vec!["replace /auth/login"]);
    }

    #[test]
    fn test_back_without_history_is_noop() {
        let mut nav = Navigator::new(Recorder::default());
        assert!(!nav.can_go_back());
        assert!(!nav.back());
        assert!(nav.primitive().calls.is_empty());

        nav.push(AppRoute::Events);
        assert!(nav.back());
        assert_eq!(nav.primitive().calls, vec!["push /events", "back"]);
    }

    #[test]
    fn test_unmounted_primitive_drops_actions() {
        let mut nav: Navigator<Option<Recorder>> = Navigator::new(None);
        assert!(nav.push(AppRoute::Events).is_unavailable());
        assert!(!nav.back());

        *nav.primitive_mut() = Some(Recorder::default());
        assert!(nav.push(AppRoute::Events).is_dispatched());
        assert_eq!(
            nav.primitive().as_ref().map(|r| r.calls.clone()),
            Some(vec!["push /events".to_string()])
        );
    }

    #[test]
    fn test_borrowed_primitive() {
        let mut recorder = Recorder::default();
        {
            let mut nav = Navigator::new(&mut recorder);
            nav.push_path("/feed/post/[post_id]", Some(&RouteParams::new().with("post_id", "a/b")));
        }
        assert_eq!(recorder.calls, vec!["push /feed/post/a%2Fb"]);
    }
}
