//! Typed route keys.
//!
//! A route table is a closed set of keys, each mapping to a template and a
//! parameter shape. The [`route_table!`](crate::route_table) macro declares
//! such a table as an enum: routes without parameters become unit variants,
//! routes with parameters become braced variants with one field per
//! placeholder. Shape mismatches are therefore compile errors:
//!
//! ```compile_fail
//! app_routes::route_table! {
//!     pub enum Routes {
//!         Login => "/auth/login",
//!         RaceDetails { id } => "/race/details/[id]",
//!     }
//! }
//!
//! // A parameterised route cannot be named without its parameters.
//! let _ = Routes::RaceDetails;
//! ```
//!
//! ```compile_fail
//! app_routes::route_table! {
//!     pub enum Routes {
//!         Login => "/auth/login",
//!     }
//! }
//!
//! // A static route takes no parameters.
//! let _ = Routes::Login { id: 1.into() };
//! ```

use crate::error::RouteError;
use crate::RouteParams;

/// Parameter shape of a route key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteShape {
    /// The route takes no parameters.
    Static,
    /// The route requires exactly these named parameters.
    Params(&'static [&'static str]),
}

impl RouteShape {
    /// Build a shape from a placeholder list; empty means [`Static`](Self::Static).
    pub const fn from_names(names: &'static [&'static str]) -> Self {
        if names.is_empty() {
            RouteShape::Static
        } else {
            RouteShape::Params(names)
        }
    }

    /// Declared parameter names (empty for static routes).
    pub const fn names(&self) -> &'static [&'static str] {
        match self {
            RouteShape::Static => &[],
            RouteShape::Params(names) => *names,
        }
    }

    /// Return `true` if the route takes no parameters.
    pub const fn is_static(&self) -> bool {
        matches!(self, RouteShape::Static)
    }
}

/// A key of a route table.
///
/// Usually implemented by [`route_table!`](crate::route_table); implement it
/// by hand for keys that need a custom parameter encoding.
pub trait RouteKey {
    /// The route template, e.g. `/race/details/[id]`.
    fn template(&self) -> &'static str;

    /// The parameter bag carried by this key. Empty for static routes.
    fn params(&self) -> RouteParams;

    /// Declared parameter shape.
    fn shape(&self) -> RouteShape;

    /// Resolve this key into a concrete path.
    fn resolve(&self) -> String {
        let params = self.params();
        if params.is_empty() {
            crate::resolve(self.template(), None)
        } else {
            crate::resolve(self.template(), Some(&params))
        }
    }

    /// Strict resolution, see [`try_resolve`](crate::try_resolve).
    fn try_resolve(&self) -> Result<String, RouteError> {
        crate::try_resolve(self.template(), Some(&self.params()))
    }
}

impl<K: RouteKey + ?Sized> RouteKey for &K {
    fn template(&self) -> &'static str {
        (**self).template()
    }

    fn params(&self) -> RouteParams {
        (**self).params()
    }

    fn shape(&self) -> RouteShape {
        (**self).shape()
    }
}

/// Declare a route table as an enum implementing [`RouteKey`].
///
/// Every field is a [`ParamValue`](crate::ParamValue), so any string or
/// number converts with `.into()`. The generated enum also gets:
///
/// - `TEMPLATES` — every template in declaration order.
/// - `shape_of(template)` — runtime lookup of a template's shape, for
///   callers holding a dynamic route string.
/// - `from_parts(template, params)` — the inverse of `template()` plus
///   `params()`.
///
/// # Example
///
/// ```
/// use app_routes::{route_table, RouteKey, RouteShape};
///
/// route_table! {
///     /// Screens of the demo app.
///     pub enum DemoRoute {
///         Login => "/auth/login",
///         RaceDetails { id } => "/race/details/[id]",
///     }
/// }
///
/// assert_eq!(DemoRoute::Login.resolve(), "/auth/login");
/// assert_eq!(DemoRoute::RaceDetails { id: 42.into() }.resolve(), "/race/details/42");
/// assert_eq!(DemoRoute::shape_of("/race/details/[id]"), Some(RouteShape::Params(&["id"])));
/// assert_eq!(DemoRoute::TEMPLATES, &["/auth/login", "/race/details/[id]"]);
/// ```
#[macro_export]
macro_rules! route_table {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident $({ $($field:ident),* $(,)? })? => $template:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $({ $($field: $crate::ParamValue),* })?,
            )*
        }

        impl $name {
            /// Every template in the table, in declaration order.
            pub const TEMPLATES: &'static [&'static str] = &[$($template),*];

            /// Shape of a template string, or `None` if it is not in the table.
            pub fn shape_of(template: &str) -> ::core::option::Option<$crate::RouteShape> {
                $(
                    if template == $template {
                        return ::core::option::Option::Some($crate::RouteShape::from_names(
                            &[$($(stringify!($field)),*)?],
                        ));
                    }
                )*
                ::core::option::Option::None
            }

            /// Rebuild a key from a template and its parameter bag.
            ///
            /// Returns `None` if the template is not in the table or a
            /// declared parameter is missing. Used to turn deep-link matches
            /// back into typed keys.
            pub fn from_parts(
                template: &str,
                params: &$crate::RouteParams,
            ) -> ::core::option::Option<Self> {
                let _ = params;
                $(
                    if template == $template {
                        return ::core::option::Option::Some(Self::$variant $({
                            $($field: ::core::clone::Clone::clone(params.get(stringify!($field))?)),*
                        })?);
                    }
                )*
                ::core::option::Option::None
            }
        }

        impl $crate::RouteKey for $name {
            fn template(&self) -> &'static str {
                match self {
                    $( Self::$variant { .. } => $template, )*
                }
            }

            #[allow(unused_mut)]
            fn params(&self) -> $crate::RouteParams {
                let mut params = $crate::RouteParams::new();
                match self {
                    $(
                        Self::$variant { $($($field,)*)? .. } => {
                            $($( params.insert(stringify!($field), ::core::clone::Clone::clone($field)); )*)?
                        }
                    )*
                }
                params
            }

            fn shape(&self) -> $crate::RouteShape {
                match self {
                    $(
                        Self::$variant { .. } => $crate::RouteShape::from_names(
                            &[$($(stringify!($field)),*)?],
                        ),
                    )*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParamValue;

    crate::route_table! {
        enum TestRoute {
            Home => "/",
            Feed => "/feed",
            Post { post_id } => "/feed/post/[post_id]",
            Split { event_id, race_id } => "/events/[event_id]/race/[race_id]",
        }
    }

    #[test]
    fn test_static_variant() {
        assert_eq!(TestRoute::Feed.template(), "/feed");
        assert!(TestRoute::Feed.params().is_empty());
        assert_eq!(TestRoute::Feed.shape(), RouteShape::Static);
        assert_eq!(TestRoute::Feed.resolve(), "/feed");
        assert_eq!(TestRoute::Home.resolve(), "/");
    }

    #[test]
    fn test_param_variant() {
        let route = TestRoute::Post {
            post_id: "hello world".into(),
        };
        assert_eq!(route.shape(), RouteShape::Params(&["post_id"]));
        assert_eq!(route.params().get("post_id"), Some(&ParamValue::from("hello world")));
        assert_eq!(route.resolve(), "/feed/post/hello%20world");
    }

    #[test]
    fn test_multi_param_variant() {
        let route = TestRoute::Split {
            event_id: 10.into(),
            race_id: 3.into(),
        };
        assert_eq!(route.shape().names(), &["event_id", "race_id"]);
        assert_eq!(route.try_resolve(), Ok("/events/10/race/3".to_string()));
    }

    #[test]
    fn test_templates_and_shape_of() {
        assert_eq!(TestRoute::TEMPLATES.len(), 4);
        assert_eq!(TestRoute::shape_of("/feed"), Some(RouteShape::Static));
        assert_eq!(
            TestRoute::shape_of("/feed/post/[post_id]"),
            Some(RouteShape::Params(&["post_id"]))
        );
        assert_eq!(TestRoute::shape_of("/unknown"), None);
    }

    #[test]
    fn test_every_template_declares_its_shape() {
        for template in TestRoute::TEMPLATES {
            let shape = TestRoute::shape_of(template).unwrap();
            assert_eq!(shape.names(), crate::placeholders(template).as_slice());
        }
    }

    #[test]
    fn test_from_parts() {
        let route = TestRoute::Split {
            event_id: 10.into(),
            race_id: "r1".into(),
        };
        assert_eq!(
            TestRoute::from_parts(route.template(), &route.params()),
            Some(route)
        );
        assert_eq!(
            TestRoute::from_parts("/feed", &RouteParams::new()),
            Some(TestRoute::Feed)
        );
        assert_eq!(
            TestRoute::from_parts("/feed/post/[post_id]", &RouteParams::new()),
            None
        );
        assert_eq!(TestRoute::from_parts("/nope", &RouteParams::new()), None);
    }

    fn resolve_any(route: impl RouteKey) -> String {
        route.resolve()
    }

    #[test]
    fn test_reference_is_a_key() {
        let route = TestRoute::Post { post_id: 5.into() };
        assert_eq!(resolve_any(&route), "/feed/post/5");
        assert_eq!(route.resolve(), "/feed/post/5");
    }
}
