//! The value tree produced by parsing.

use alloc::{string::String, vec::Vec};
use core::fmt;

/// An ordered sequence of JSON values.
pub type Array = Vec<Value>;

/// An ordered sequence of key/value pairs.
///
/// Insertion order is preserved and duplicate keys are legal; both pairs are
/// retained and no deduplication pass is ever performed. Lookup by key is
/// first match wins, see [`Value::get`].
pub type Object = Vec<(String, Value)>;

/// A JSON value.
///
/// Ownership is strictly tree shaped: each value exclusively owns its
/// children, so no cycles can exist and no reference counting is needed. A
/// tree is built entirely within one parse call and is either returned whole
/// or discarded on error.
///
/// String payloads hold the raw lexeme from the input, escape sequences
/// included; see the crate docs for this limitation.
///
/// # Examples
///
/// ```
/// use jsontree::Value;
///
/// let v = Value::Object(vec![("key".into(), Value::String("value".into()))]);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Number(f64),
    String(String),
    Array(Array),
    Object(Object),
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(String::from(v))
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Boolean(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns the boolean if the value is [`Boolean`](Value::Boolean).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the raw string payload if the value is
    /// [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the element sequence if the value is
    /// [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the pair sequence if the value is
    /// [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(pairs) => Some(pairs),
            _ => None,
        }
    }

    /// Looks up `key` in an object, returning the first matching value.
    ///
    /// Returns `None` for non-objects and missing keys. With duplicate keys
    /// only the earliest pair is visible through this accessor; the later
    /// ones remain in [`as_object`](Value::as_object) order.
    ///
    /// # Examples
    ///
    /// ```
    /// use jsontree::{Value, parse_str};
    ///
    /// let root = parse_str(r#"{"a":1,"a":2}"#).unwrap();
    /// assert_eq!(root.get("a"), Some(&Value::Number(1.0)));
    /// assert_eq!(root.get("b"), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Self::Object(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

/// Compact single-line rendering.
///
/// String payloads are emitted verbatim between quotes with no re-escaping;
/// they still carry their raw escapes from lexing, so the output re-parses
/// to an equal tree.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "\"{s}\""),
            Value::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for item in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(pairs) => {
                f.write_str("{")?;
                let mut first = true;
                for (key, item) in pairs {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "\"{key}\":{item}")?;
                }
                f.write_str("}")
            }
        }
    }
}
