//! # app-routes
//!
//! Typed route table and navigation helpers for the race-tracking client.
//!
//! Screens are addressed by route keys drawn from a closed table
//! ([`AppRoute`]). A key resolves to a concrete path by substituting its
//! `[name]` placeholders with percent-encoded values, and a [`Navigator`]
//! hands that path to whatever navigation primitive the host provides.
//!
//! ```
//! use app_routes::{resolve, AppRoute, MemoryHistory, Navigator, RouteKey, RouteParams};
//!
//! // Typed: parameters are part of the key, checked at compile time.
//! assert_eq!(AppRoute::RaceDetails { id: 42.into() }.resolve(), "/race/details/42");
//!
//! // Dynamic: any template plus a parameter bag.
//! let params = RouteParams::new().with("id", "a b");
//! assert_eq!(resolve("/race/details/[id]", Some(&params)), "/race/details/a%20b");
//!
//! // Navigation: resolve, then delegate.
//! let mut nav = Navigator::new(MemoryHistory::new());
//! nav.push(AppRoute::Events);
//! assert_eq!(nav.primitive().current_path(), "/events");
//! ```
//!
//! ## Features
//!
//! | Feature     | Default | Enables                                      |
//! |-------------|---------|----------------------------------------------|
//! | `log`       | yes     | diagnostics through the `log` crate          |
//! | `tracing`   | no      | diagnostics through the `tracing` crate      |
//! | `deep-link` | yes     | [`DeepLinkMatcher`] (path → route), `matchit` |
//! | `cache`     | yes     | [`cache::MatchCache`], `lru`                 |

mod app;
#[cfg(feature = "cache")]
pub mod cache;
pub mod error;
mod logging;
#[cfg(feature = "deep-link")]
pub mod matching;
pub mod navigator;
pub mod params;
pub mod resolve;
pub mod route;
pub mod state;

pub use app::AppRoute;
pub use error::{NavigationResult, RouteError};
#[cfg(feature = "deep-link")]
pub use matching::{normalize_path, DeepLinkMatcher, RouteMatch};
pub use navigator::{NavigationPrimitive, Navigator};
pub use params::{ParamValue, RouteParams};
pub use resolve::{is_fully_resolved, placeholders, resolve, try_resolve};
pub use route::{RouteKey, RouteShape};
pub use state::{MemoryHistory, NavigationDirection, RouteChangeEvent};
