use crate::error::Result;
use crate::normalize::{Normalized, Normalizer};
use crate::ser::{serialize, to_value};
use crate::shake::shake;
use crate::value::Value;

/// Configuration for stringifying values.
///
/// ## Nesting Depth
///
/// The `max_depth` parameter controls how deeply nested the input can be.
/// Every stage recurses once per level of nesting, so this guards against
/// exhausting the stack on maliciously crafted inputs. Depth counts the
/// containers below the top-level mapping, plus one for each conversion of
/// a [custom value](crate::ToCanonical). A `max_depth` of 0 means only flat
/// key-value pairs are accepted.
///
/// Default value: `max_depth = 64`
///
/// ```
/// use qs_stringify::{Config, Value};
///
/// let nested = Value::from_iter([("a", Value::from_iter([("b", "c")]))]);
///
/// let config = Config::new().max_depth(0);
/// assert!(config.to_query_string(&nested).is_err());
///
/// let config = Config::new().max_depth(1);
/// assert_eq!(config.to_query_string(&nested).unwrap(), "a[b]=c");
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Config {
    max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub const fn new() -> Self {
        Self { max_depth: 64 }
    }

    /// Specifies the maximum nesting depth that `qs_stringify` will
    /// attempt to stringify. Default is 64.
    pub const fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Normalizes a value, failing if it nests deeper than `max_depth`.
    ///
    /// Otherwise identical to [`normalize`](crate::normalize).
    pub fn normalize(self, value: &Value) -> Result<Normalized> {
        Normalizer {
            max_depth: self.max_depth,
        }
        .normalize(value, 0)
    }

    /// Stringifies a mapping into a querystring using this `Config`.
    ///
    /// See [`to_query_string`](crate::to_query_string).
    pub fn to_query_string(self, value: &Value) -> Result<String> {
        let normalized = Normalizer {
            max_depth: self.max_depth,
        }
        .normalize_mapping(value, 0)?;

        let output = match shake(normalized) {
            Some(shaken) => serialize(&shaken, None),
            None => String::new(),
        };
        tracing::trace!(len = output.len(), "stringified querystring");
        Ok(output)
    }

    /// Appends the querystring for `value` to `url` using this `Config`.
    ///
    /// See [`append_to_url`](crate::append_to_url).
    pub fn append_to_url(self, url: &str, value: &Value) -> Result<String> {
        let qs = self.to_query_string(value)?;
        if qs.is_empty() {
            return Ok(url.to_owned());
        }

        let mut output = String::with_capacity(url.len() + 1 + qs.len());
        output.push_str(url);
        output.push('?');
        output.push_str(&qs);
        Ok(output)
    }

    /// Serializes any `Serialize` type into a querystring using this `Config`.
    ///
    /// See [`to_string`](crate::to_string).
    pub fn serialize_string<T: serde::Serialize + ?Sized>(self, input: &T) -> Result<String> {
        self.to_query_string(&to_value(input)?)
    }
}
