//! Deep-link matching: concrete path back to route template.
//!
//! [`resolve`](crate::resolve) turns a template plus parameters into a path.
//! [`DeepLinkMatcher`] goes the other way, for paths arriving from push
//! notifications, shared links or the OS:
//!
//! ```text
//! "/race/details/a%20b?ref=share"  →  "/race/details/[id]", {id: "a b"}
//! ```
//!
//! Matching is delegated to [`matchit`]; templates are translated from the
//! bracket syntax (`[id]`) to matchit's brace syntax (`{id}`) on
//! registration. Static segments win over parameters, so `/events/new` and
//! `/events/[id]` coexist.
//!
//! Decoded values always come back as [`ParamValue::Str`](crate::ParamValue::Str);
//! use [`RouteParams::get_as`] for numbers.

use crate::error::RouteError;
use crate::{debug_log, error_log, trace_log, RouteParams};
use std::borrow::Cow;
use std::fmt;

/// A deep link matched against the table.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    /// Template of the matched route, as registered.
    pub template: String,
    /// Decoded parameters, one per placeholder.
    pub params: RouteParams,
}

/// Reverse matcher over a set of route templates.
///
/// Templates sharing a prefix must use the same placeholder name at the
/// same position (`/events/[id]` and `/events/[id]/race/[race_id]`);
/// otherwise registration fails with [`RouteError::InvalidTemplate`].
pub struct DeepLinkMatcher {
    router: matchit::Router<usize>,
    templates: Vec<String>,
}

impl DeepLinkMatcher {
    /// Create an empty matcher.
    pub fn new() -> Self {
        Self {
            router: matchit::Router::new(),
            templates: Vec::new(),
        }
    }

    /// Build a matcher from every template in `templates`.
    ///
    /// # Example
    ///
    /// ```
    /// use app_routes::DeepLinkMatcher;
    ///
    /// let matcher = DeepLinkMatcher::from_templates(["/events", "/race/details/[id]"]).unwrap();
    /// let m = matcher.match_path("/race/details/42").unwrap();
    /// assert_eq!(m.template, "/race/details/[id]");
    /// assert_eq!(m.params.get_as::<u32>("id"), Some(42));
    /// ```
    pub fn from_templates<I, S>(templates: I) -> Result<Self, RouteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut matcher = Self::new();
        for template in templates {
            matcher.register(template)?;
        }
        debug_log!("Deep-link matcher built with {} templates", matcher.len());
        Ok(matcher)
    }

    /// Register one template.
    pub fn register(&mut self, template: impl Into<String>) -> Result<(), RouteError> {
        let template = template.into();
        let pattern = to_matchit_pattern(&normalize_path(&template));

        if let Err(err) = self.router.insert(pattern.as_str(), self.templates.len()) {
            error_log!("Failed to register deep-link template '{}': {}", template, err);
            return Err(RouteError::InvalidTemplate {
                template,
                message: err.to_string(),
            });
        }

        trace_log!("Registered deep-link pattern '{}' for '{}'", pattern, template);
        self.templates.push(template);
        Ok(())
    }

    /// Match a concrete path, ignoring any query string or fragment.
    pub fn match_path(&self, path: &str) -> Option<RouteMatch> {
        let path = strip_query(path);
        let normalized = normalize_path(path);

        let Ok(matched) = self.router.at(&normalized) else {
            debug_log!("No route matches deep link '{}'", normalized);
            return None;
        };

        let template = self.templates.get(*matched.value)?.clone();
        let params = matched
            .params
            .iter()
            .map(|(name, raw)| (name, decode_segment(raw)))
            .collect();

        trace_log!("Deep link '{}' matched '{}'", normalized, template);
        Some(RouteMatch { template, params })
    }

    /// Registered templates, in registration order.
    pub fn templates(&self) -> &[String] {
        &self.templates
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Return `true` if no template is registered.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl Default for DeepLinkMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DeepLinkMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeepLinkMatcher")
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}

/// Normalize a path for matching.
///
/// Ensures a leading slash, drops trailing slashes (except for root) and
/// collapses repeated slashes. Borrows when nothing changes.
///
/// ```
/// use app_routes::normalize_path;
///
/// assert_eq!(normalize_path("/events"), "/events");
/// assert_eq!(normalize_path("events/"), "/events");
/// assert_eq!(normalize_path("//race//details/7"), "/race/details/7");
/// assert_eq!(normalize_path(""), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let already_normal = path.starts_with('/')
        && (path == "/" || !path.ends_with('/'))
        && !path.contains("//");
    if already_normal {
        return Cow::Borrowed(path);
    }

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", segments.join("/")))
    }
}

pub(crate) fn strip_query(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |pos| &path[..pos])
}

/// Translate `[name]` placeholders into matchit's `{name}`, escaping literal braces.
fn to_matchit_pattern(template: &str) -> String {
    let mut pattern = String::with_capacity(template.len());
    let mut rest = template;

    for name in crate::placeholders(template) {
        let token = format!("[{}]", name);
        let Some(start) = rest.find(&token) else {
            break;
        };
        pattern.push_str(&escape_braces(&rest[..start]));
        pattern.push('{');
        pattern.push_str(name);
        pattern.push('}');
        rest = &rest[start + token.len()..];
    }
    pattern.push_str(&escape_braces(rest));

    pattern
}

fn escape_braces(literal: &str) -> Cow<'_, str> {
    if literal.contains(['{', '}']) {
        Cow::Owned(literal.replace('{', "{{").replace('}', "}}"))
    } else {
        Cow::Borrowed(literal)
    }
}

fn decode_segment(raw: &str) -> String {
    match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        // Not valid UTF-8 once decoded; keep the raw segment
        Err(_) => raw.to_string(),
    }
}
