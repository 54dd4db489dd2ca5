//! The input value tree.
//!
//! [`Value`] is what gets stringified. It models plain data: absent
//! values, `null`, booleans, numbers, strings, sequences and ordered
//! mappings, plus [custom values](ToCanonical) which know how to turn
//! themselves into one of the above.
//!
//! ```
//! use qs_stringify::{Map, Value};
//!
//! let mut query = Map::new();
//! query.insert("name".to_owned(), Value::from("Acme"));
//! query.insert("tags".to_owned(), Value::from(vec!["a", "b"]));
//! query.insert("note".to_owned(), Value::Absent);
//!
//! assert_eq!(
//!     qs_stringify::to_query_string(&Value::Mapping(query)).unwrap(),
//!     "name=Acme&tags[]=a&tags[]=b"
//! );
//! ```

use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// An insertion-ordered map of string keys.
///
/// The order in which keys are inserted is the order in which they are
/// written to the querystring.
pub type Map<V = Value> = IndexMap<String, V>;

/// Conversion of a rich value into plain data.
///
/// This is the extension point for types such as timestamps which
/// should be written using their own canonical form. The returned value
/// is normalized like any other input, so it may itself be a string,
/// a number, a mapping, or even another custom value.
///
/// ```
/// use qs_stringify::{ToCanonical, Value};
///
/// struct Celsius(f64);
///
/// impl ToCanonical for Celsius {
///     fn to_canonical(&self) -> Value {
///         Value::String(format!("{}C", self.0))
///     }
/// }
///
/// let query = Value::from_iter([("temp", Value::custom(Celsius(21.5)))]);
/// assert_eq!(qs_stringify::to_query_string(&query).unwrap(), "temp=21.5C");
/// ```
pub trait ToCanonical {
    /// Returns the canonical plain-data form of `self`.
    fn to_canonical(&self) -> Value;
}

/// A plain-data value tree.
#[derive(Clone, Default)]
pub enum Value {
    /// No value was provided. Absent values are dropped from the output.
    #[default]
    Absent,
    /// An explicit null, written as an empty string.
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Map),
    /// A value converted through [`ToCanonical`] before being written.
    Custom(Arc<dyn ToCanonical + Send + Sync>),
}

impl Value {
    /// Wraps a [`ToCanonical`] implementation as a custom value.
    pub fn custom<T>(value: T) -> Self
    where
        T: ToCanonical + Send + Sync + 'static,
    {
        Value::Custom(Arc::new(value))
    }

    /// Returns `true` if the value is [`Value::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    /// Returns `true` if the value is a [`Value::Mapping`].
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// A short name for the kind of value, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Absent => "absent value",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Sequence(_) => "sequence",
            Value::Mapping(_) => "mapping",
            Value::Custom(_) => "custom value",
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Absent => f.write_str("Absent"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Sequence(s) => f.debug_list().entries(s.iter()).finish(),
            Value::Mapping(m) => f.debug_map().entries(m.iter()).finish(),
            Value::Custom(c) => f.debug_tuple("Custom").field(&c.to_canonical()).finish(),
        }
    }
}

/// Custom values compare equal by their canonical forms.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Absent, Value::Absent) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Mapping(a), Value::Mapping(b)) => a == b,
            (Value::Custom(a), Value::Custom(b)) => a.to_canonical() == b.to_canonical(),
            _ => false,
        }
    }
}

/// A number, kept as given until it is written.
///
/// Floats are written the way ECMAScript's `Number.prototype.toString`
/// writes them: `204.0` is `204`, `1e-6` is `0.000001` and `1e21` is
/// `1e+21`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => f.write_str(itoa::Buffer::new().format(i)),
            Number::UInt(u) => f.write_str(itoa::Buffer::new().format(u)),
            Number::Float(v) if v.is_nan() => f.write_str("NaN"),
            Number::Float(v) if v.is_infinite() => {
                f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // negative zero too
            Number::Float(v) if v == 0.0 => f.write_str("0"),
            Number::Float(v) => f.write_str(ryu_js::Buffer::new().format_finite(v)),
        }
    }
}

/// Widens an `f32` through its shortest decimal form, so that `0.1f32`
/// becomes `0.1` rather than `0.10000000149011612`.
pub(crate) fn widen_f32(v: f32) -> f64 {
    if !v.is_finite() {
        return f64::from(v);
    }
    ryu_js::Buffer::new()
        .format_finite(v)
        .parse()
        .unwrap_or_else(|_| f64::from(v))
}

macro_rules! from_number {
    ($($variant:ident: $($ty:ty)*;)*) => {
        $($(
            impl From<$ty> for Number {
                fn from(v: $ty) -> Self {
                    Number::$variant(v.into())
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Number(v.into())
                }
            }
        )*)*
    };
}

from_number! {
    Int: i8 i16 i32 i64;
    UInt: u8 u16 u32 u64;
    Float: f64;
}

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Number::Float(widen_f32(v))
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Number(v.into())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Mapping(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Sequence(v.into_iter().map(Into::into).collect())
    }
}

/// `None` is absent.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

/// Collects key-value pairs into a [`Value::Mapping`].
impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Mapping(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(feature = "chrono")]
mod chrono_support {
    use super::{ToCanonical, Value};
    use chrono::{DateTime, SecondsFormat, TimeZone, Utc};

    /// Timestamps are written as UTC RFC 3339 instants with millisecond
    /// precision, e.g. `1970-01-01T00:00:00.000Z`.
    impl<Tz: TimeZone> ToCanonical for DateTime<Tz> {
        fn to_canonical(&self) -> Value {
            Value::String(
                self.with_timezone(&Utc)
                    .to_rfc3339_opts(SecondsFormat::Millis, true),
            )
        }
    }

    impl<Tz> From<DateTime<Tz>> for Value
    where
        Tz: TimeZone + 'static,
        Tz::Offset: Send + Sync,
    {
        fn from(v: DateTime<Tz>) -> Self {
            Value::custom(v)
        }
    }
}
