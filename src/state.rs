//! In-memory navigation history.
//!
//! [`MemoryHistory`] is a complete [`NavigationPrimitive`] that keeps the
//! stack in a `Vec`. Headless hosts (CLI previews, server-side rendering of
//! deep links) and tests use it where no platform router exists.

use crate::navigator::NavigationPrimitive;
use crate::trace_log;

/// Direction of a history transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDirection {
    Forward,
    Back,
    Replace,
}

/// A single history transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteChangeEvent {
    pub from: Option<String>,
    pub to: String,
    pub direction: NavigationDirection,
}

/// History stack with a cursor, starting at `/`.
///
/// Pushing truncates any forward entries, like a browser.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    history: Vec<String>,
    current: usize,
}

impl MemoryHistory {
    /// Create a history holding only `/`.
    pub fn new() -> Self {
        Self::with_initial("/")
    }

    /// Create a history holding only `path`.
    pub fn with_initial(path: impl Into<String>) -> Self {
        Self {
            history: vec![path.into()],
            current: 0,
        }
    }

    /// Get current path
    pub fn current_path(&self) -> &str {
        &self.history[self.current]
    }

    /// All entries, oldest first, including forward entries.
    pub fn entries(&self) -> &[String] {
        &self.history
    }

    /// Navigate to a new path
    pub fn push(&mut self, path: impl Into<String>) -> RouteChangeEvent {
        let path = path.into();
        let from = Some(self.current_path().to_string());

        self.history.truncate(self.current + 1);
        self.history.push(path.clone());
        self.current += 1;
        trace_log!("History push '{}' (depth {})", path, self.history.len());

        RouteChangeEvent {
            from,
            to: path,
            direction: NavigationDirection::Forward,
        }
    }

    /// Replace current path
    pub fn replace(&mut self, path: impl Into<String>) -> RouteChangeEvent {
        let path = path.into();
        let from = Some(std::mem::replace(
            &mut self.history[self.current],
            path.clone(),
        ));

        RouteChangeEvent {
            from,
            to: path,
            direction: NavigationDirection::Replace,
        }
    }

    /// Go back in history
    pub fn back(&mut self) -> Option<RouteChangeEvent> {
        if !self.can_go_back() {
            return None;
        }
        let from = Some(self.current_path().to_string());
        self.current -= 1;

        Some(RouteChangeEvent {
            from,
            to: self.current_path().to_string(),
            direction: NavigationDirection::Back,
        })
    }

    /// Go forward in history
    pub fn forward(&mut self) -> Option<RouteChangeEvent> {
        if !self.can_go_forward() {
            return None;
        }
        let from = Some(self.current_path().to_string());
        self.current += 1;

        Some(RouteChangeEvent {
            from,
            to: self.current_path().to_string(),
            direction: NavigationDirection::Forward,
        })
    }

    /// Check if can go back
    pub fn can_go_back(&self) -> bool {
        self.current > 0
    }

    /// Check if can go forward
    pub fn can_go_forward(&self) -> bool {
        self.current + 1 < self.history.len()
    }

    /// Drop every entry and return to `/`.
    pub fn clear(&mut self) {
        self.history.clear();
        self.history.push("/".to_string());
        self.current = 0;
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationPrimitive for MemoryHistory {
    fn push(&mut self, path: &str) {
        MemoryHistory::push(self, path);
    }

    fn replace(&mut self, path: &str) {
        MemoryHistory::replace(self, path);
    }

    fn back(&mut self) {
        MemoryHistory::back(self);
    }

    fn can_go_back(&self) -> bool {
        MemoryHistory::can_go_back(self)
    }

    fn name(&self) -> &'static str {
        "MemoryHistory"
    }
}
