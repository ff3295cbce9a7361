//! Route template resolution.
//!
//! A template is a path with bracketed placeholders, e.g.
//! `/race/details/[id]`. Resolution substitutes each placeholder named in
//! the [`RouteParams`] bag with the percent-encoded value:
//!
//! ```text
//! "/race/details/[id]" + {id: 42}     → "/race/details/42"
//! "/race/details/[id]" + {id: "a b"}  → "/race/details/a%20b"
//! "/auth/login"        + (none)       → "/auth/login"
//! ```
//!
//! # Missing parameters
//!
//! [`resolve`] is permissive: a placeholder whose name is not in the bag is
//! left verbatim (`[id]` stays in the output). [`try_resolve`] is the strict
//! counterpart and reports the first such placeholder as
//! [`RouteError::MissingParam`].
//!
//! # Substitution rules
//!
//! - Only the literal `[name]` token is matched, once per key (first textual
//!   occurrence).
//! - Bag keys that match no placeholder are ignored.
//! - The template is scanned once, left to right; substituted text is never
//!   rescanned, so the result depends only on the template and the bag
//!   contents.

use crate::error::RouteError;
use crate::{debug_log, trace_log, RouteParams};
use std::ops::Range;

/// Resolve `template` with an optional parameter bag.
///
/// Pure and deterministic; never fails.
///
/// # Example
///
/// ```
/// use app_routes::{resolve, RouteParams};
///
/// assert_eq!(resolve("/auth/login", None), "/auth/login");
///
/// let params = RouteParams::new().with("id", 42);
/// assert_eq!(resolve("/race/details/[id]", Some(&params)), "/race/details/42");
/// ```
pub fn resolve(template: &str, params: Option<&RouteParams>) -> String {
    let Some(params) = params else {
        return template.to_string();
    };

    let mut path = String::with_capacity(template.len());
    let mut filled: Vec<&str> = Vec::new();
    let mut cursor = 0;

    for (span, name) in placeholder_spans(template) {
        if filled.contains(&name) {
            continue;
        }
        let Some(value) = params.get(name) else {
            trace_log!("No value for '[{}]' in '{}'", name, template);
            continue;
        };

        let encoded = value.encoded();
        trace_log!("Substituting '[{}]' with '{}' in '{}'", name, encoded, template);
        path.push_str(&template[cursor..span.start]);
        path.push_str(&encoded);
        cursor = span.end;
        filled.push(name);
    }
    path.push_str(&template[cursor..]);

    debug_log!("Resolved '{}' -> '{}'", template, path);
    path
}

/// Resolve `template`, failing if any placeholder would be left in place.
///
/// Each value fills a single placeholder, so a name repeated in the template
/// is reported as missing at its second occurrence.
///
/// # Example
///
/// ```
/// use app_routes::{try_resolve, RouteError, RouteParams};
///
/// let params = RouteParams::new().with("id", 7);
/// assert_eq!(try_resolve("/race/details/[id]", Some(&params)).unwrap(), "/race/details/7");
///
/// let err = try_resolve("/race/details/[id]", None).unwrap_err();
/// assert!(matches!(err, RouteError::MissingParam { .. }));
/// ```
pub fn try_resolve(template: &str, params: Option<&RouteParams>) -> Result<String, RouteError> {
    let mut seen: Vec<&str> = Vec::new();
    for name in placeholders(template) {
        if seen.contains(&name) || !params.is_some_and(|p| p.contains(name)) {
            return Err(RouteError::MissingParam {
                template: template.to_string(),
                name: name.to_string(),
            });
        }
        seen.push(name);
    }

    Ok(resolve(template, params))
}

/// Names of the `[name]` placeholders in `template`, in textual order.
///
/// Empty brackets and brackets spanning a `/` are not placeholders.
///
/// # Example
///
/// ```
/// use app_routes::placeholders;
///
/// assert_eq!(placeholders("/events/[eventId]/race/[raceId]"), vec!["eventId", "raceId"]);
/// assert!(placeholders("/events").is_empty());
/// ```
pub fn placeholders(template: &str) -> Vec<&str> {
    placeholder_spans(template)
        .into_iter()
        .map(|(_, name)| name)
        .collect()
}

/// Byte range of each whole `[name]` token in `template`, with its name.
fn placeholder_spans(template: &str) -> Vec<(Range<usize>, &str)> {
    let mut spans = Vec::new();
    let mut offset = 0;

    while let Some(open) = template[offset..].find('[') {
        let start = offset + open;
        let name_start = start + 1;
        let Some(close) = template[name_start..].find(']') else {
            break;
        };
        let name = &template[name_start..name_start + close];
        if name.is_empty() || name.contains(['/', '[']) {
            // Restart scanning just past this '['
            offset = name_start;
            continue;
        }
        let end = name_start + close + 1;
        spans.push((start..end, name));
        offset = end;
    }

    spans
}

/// Return `true` if `path` carries no `[name]` placeholder.
pub fn is_fully_resolved(path: &str) -> bool {
    placeholders(path).is_empty()
}
