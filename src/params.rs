//! Route parameter values and the parameter bag.
//!
//! - [`ParamValue`] — a primitive value (string or number) destined for a
//!   `[name]` placeholder. Numbers are stringified before encoding.
//! - [`RouteParams`] — the parameter bag handed to
//!   [`resolve`](crate::resolve), keyed by placeholder name. Deep-link
//!   matching produces one as well, with every value decoded back to a
//!   string.
//!
//! # Example
//!
//! ```
//! use app_routes::{ParamValue, RouteParams};
//!
//! let params = RouteParams::new().with("id", 42).with("tab", "results");
//! assert_eq!(params.get("id"), Some(&ParamValue::Int(42)));
//! assert_eq!(params.get_as::<u32>("id"), Some(42));
//! assert_eq!(params.get("tab").map(ToString::to_string), Some("results".to_string()));
//! ```

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

// ============================================================================
// ParamValue
// ============================================================================

/// A single parameter value.
///
/// Built through `From` for strings and the primitive numeric types, so call
/// sites read `RouteParams::new().with("id", 42)`.
///
/// Equality compares the string form, the same text that lands in the path:
/// `Int(42)`, `UInt(42)`, `Float(42.0)` and `Str("42")` are all equal.
#[derive(Debug, Clone)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl ParamValue {
    /// Percent-encoded form, safe to splice into a single path segment.
    ///
    /// Everything outside `A-Z a-z 0-9 - _ . ~` is encoded, so a value can
    /// never add a `/`, `?` or `#` to the path or reintroduce a `[...]` token.
    pub fn encoded(&self) -> String {
        match self {
            ParamValue::Str(s) => urlencoding::encode(s).into_owned(),
            // Numbers render as digits, '-', '.', "inf" or "NaN"; all unreserved.
            other => other.to_string(),
        }
    }

    fn canonical(&self) -> Cow<'_, str> {
        match self {
            ParamValue::Str(s) => Cow::Borrowed(s),
            other => Cow::Owned(other.to_string()),
        }
    }

    /// Borrow the value as a string slice when it is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::UInt(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParamValue::Int(a), ParamValue::Int(b)) => a == b,
            (ParamValue::UInt(a), ParamValue::UInt(b)) => a == b,
            _ => self.canonical() == other.canonical(),
        }
    }
}

impl Eq for ParamValue {}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<Cow<'_, str>> for ParamValue {
    fn from(value: Cow<'_, str>) -> Self {
        ParamValue::Str(value.into_owned())
    }
}

macro_rules! impl_from_number {
    ($variant:ident => $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for ParamValue {
                fn from(value: $source) -> Self {
                    ParamValue::$variant(<$target>::from(value))
                }
            }
        )*
    };
}

impl_from_number!(Int => i64: i8, i16, i32, i64);
impl_from_number!(UInt => u64: u8, u16, u32, u64);
impl_from_number!(Float => f64: f32, f64);

impl From<usize> for ParamValue {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        ParamValue::UInt(value as u64)
    }
}

impl From<isize> for ParamValue {
    fn from(value: isize) -> Self {
        ParamValue::Int(value as i64)
    }
}

// ============================================================================
// RouteParams
// ============================================================================

/// Parameter bag keyed by placeholder name.
///
/// Insertion order is irrelevant: each name targets its own `[name]` token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    params: HashMap<String, ParamValue>,
}

impl RouteParams {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or overwrite a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Get a parameter value by key.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.params.get(key)
    }

    /// Get a parameter and parse its string form as `T`.
    ///
    /// Returns `None` if the key is missing or the value does not parse.
    /// Handy for deep-link params, which always come back as strings.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.to_string().parse().ok()
    }

    /// Return `true` if the given key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over all `(name, value)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Return `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

impl<K, V> FromIterator<(K, V)> for RouteParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = RouteParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

// ============================================================================
// Tests
// ============================================================================
