//! Test utilities shared by the integration tests.
//!
//! Provides a recording navigation primitive and small assertion helpers.

#![allow(dead_code)]

use app_routes::{placeholders, NavigationPrimitive};

/// One call received by [`RecordingPrimitive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Push(String),
    Replace(String),
    Back,
}

/// Navigation primitive that records every call it receives.
#[derive(Debug, Default)]
pub struct RecordingPrimitive {
    pub calls: Vec<Call>,
    pub mounted: bool,
    depth: usize,
}

impl RecordingPrimitive {
    /// A mounted primitive with an empty stack.
    pub fn mounted() -> Self {
        Self {
            mounted: true,
            ..Self::default()
        }
    }

    /// A primitive that reports it is not mounted yet.
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn pushes(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                Call::Push(path) => Some(path.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl NavigationPrimitive for RecordingPrimitive {
    fn push(&mut self, path: &str) {
        self.calls.push(Call::Push(path.to_string()));
        self.depth += 1;
    }

    fn replace(&mut self, path: &str) {
        self.calls.push(Call::Replace(path.to_string()));
    }

    fn back(&mut self) {
        self.calls.push(Call::Back);
        self.depth = self.depth.saturating_sub(1);
    }

    fn is_ready(&self) -> bool {
        self.mounted
    }

    fn can_go_back(&self) -> bool {
        self.depth > 0
    }

    fn name(&self) -> &'static str {
        "RecordingPrimitive"
    }
}

/// Initialise test logging once per binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert that a resolved path carries no placeholder token.
pub fn assert_fully_resolved(path: &str) {
    let left = placeholders(path);
    assert!(
        left.is_empty(),
        "Path '{}' still has placeholders {:?}",
        path,
        left
    );
}

/// Number of `/`-delimited segments in a path.
pub fn segment_count(path: &str) -> usize {
    path.split('/').count()
}
