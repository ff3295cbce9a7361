//! Error and outcome types.
//!
//! - [`RouteError`] — returned by the strict resolution path
//!   ([`try_resolve`](crate::try_resolve)) and by deep-link matcher
//!   construction. The permissive [`resolve`](crate::resolve) never fails.
//! - [`NavigationResult`] — what a [`Navigator`](crate::Navigator) action did
//!   with the host primitive.
//!
//! # Examples
//!
//! ```
//! use app_routes::{NavigationResult, RouteError};
//!
//! let result = NavigationResult::Dispatched { path: "/race/details/7".into() };
//! assert!(result.is_dispatched());
//! assert_eq!(result.path(), Some("/race/details/7"));
//!
//! let err = RouteError::MissingParam {
//!     template: "/race/details/[id]".into(),
//!     name: "id".into(),
//! };
//! assert_eq!(err.to_string(), "Missing parameter 'id' for route '/race/details/[id]'");
//! ```

use std::fmt;

// ============================================================================
// RouteError
// ============================================================================

/// Detailed error variants for strict resolution and matcher setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// A placeholder declared by the template had no value in the bag.
    MissingParam { template: String, name: String },

    /// A template could not be registered (malformed or conflicting).
    InvalidTemplate { template: String, message: String },
}

impl RouteError {
    /// The route template the error refers to.
    pub fn template(&self) -> &str {
        match self {
            RouteError::MissingParam { template, .. }
            | RouteError::InvalidTemplate { template, .. } => template,
        }
    }
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::MissingParam { template, name } => {
                write!(f, "Missing parameter '{}' for route '{}'", name, template)
            }
            RouteError::InvalidTemplate { template, message } => {
                write!(f, "Invalid route template '{}': {}", template, message)
            }
        }
    }
}

impl std::error::Error for RouteError {}

// ============================================================================
// NavigationResult
// ============================================================================

/// Outcome of a push or replace through a [`Navigator`](crate::Navigator).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationResult {
    /// The primitive was invoked with this path.
    Dispatched { path: String },
    /// The primitive was not mounted; nothing happened.
    Unavailable,
}

impl NavigationResult {
    /// Check if the primitive was invoked
    pub fn is_dispatched(&self) -> bool {
        matches!(self, NavigationResult::Dispatched { .. })
    }

    /// Check if the call was dropped because the primitive was not ready
    pub fn is_unavailable(&self) -> bool {
        matches!(self, NavigationResult::Unavailable)
    }

    /// Path handed to the primitive, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            NavigationResult::Dispatched { path } => Some(path),
            NavigationResult::Unavailable => None,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
