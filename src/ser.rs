//! Serialization support for querystrings.
//!
//! This is the last stage of the pipeline: a [`Shaken`] tree is flattened
//! into `key=value` pairs joined by `&`, with nested keys written in
//! bracket notation.

mod encode;
mod key;
mod value;

use encode::{encode, is_unreserved};

pub use value::{ValueSerializer, to_value};

use crate::error::Result;
use crate::shake::Shaken;
use crate::value::Value;

/// Stringifies a mapping into a querystring.
///
/// The value is normalized, shaken, and serialized. An input with
/// nothing left after shaking produces the empty string.
///
/// A [custom value](crate::ToCanonical) at the top level is replaced by
/// its canonical form first. Fails with
/// [`Error::InvalidInput`](crate::Error::InvalidInput) if the value is then
/// not a [`Value::Mapping`], and with
/// [`Error::DepthLimitExceeded`](crate::Error::DepthLimitExceeded) if it
/// nests deeper than the default [`Config`](crate::Config) allows.
///
/// ```
/// use qs_stringify::Value;
///
/// let query = Value::from_iter([
///     ("a", Value::from(true)),
///     ("b", Value::Absent),
///     ("c", Value::from("&=[]")),
/// ]);
/// assert_eq!(qs_stringify::to_query_string(&query).unwrap(), "a=y&c=%26%3D%5B%5D");
///
/// assert!(qs_stringify::to_query_string(&Value::Null).is_err());
/// ```
pub fn to_query_string(value: &Value) -> Result<String> {
    crate::Config::default().to_query_string(value)
}

/// Appends the querystring for `value` to `url`.
///
/// The `?` is only added when the querystring is not empty.
///
/// ```
/// use qs_stringify::Value;
///
/// let query = Value::from_iter([("first", "John"), ("last", "Wayne")]);
/// assert_eq!(
///     qs_stringify::append_to_url("https://google.com", &query).unwrap(),
///     "https://google.com?first=John&last=Wayne"
/// );
///
/// let empty = Value::from_iter([("key", Value::Absent)]);
/// assert_eq!(
///     qs_stringify::append_to_url("https://google.com", &empty).unwrap(),
///     "https://google.com"
/// );
/// ```
pub fn append_to_url(url: &str, value: &Value) -> Result<String> {
    crate::Config::default().append_to_url(url, value)
}

/// Serializes any `Serialize` type into a querystring.
///
/// The input is first converted with [`to_value`], so `None` fields are
/// left out and the usual normalization rules apply.
///
/// ```
/// # use serde::Serialize;
/// #[derive(Serialize)]
/// struct Query {
///     name: String,
///     active: bool,
///     email: Option<String>,
///     ids: Vec<u8>,
/// }
///
/// let q = Query {
///     name: "Alice".to_owned(),
///     active: true,
///     email: None,
///     ids: vec![1, 2],
/// };
///
/// assert_eq!(
///     qs_stringify::to_string(&q).unwrap(),
///     "name=Alice&active=y&ids[]=1&ids[]=2"
/// );
/// ```
pub fn to_string<T: serde::Serialize + ?Sized>(input: &T) -> Result<String> {
    crate::Config::default().serialize_string(input)
}

/// Flattens a shaken tree into a querystring.
///
/// - a sequence of strings repeats the key with empty brackets:
///   `c[]=1&c[]=2`
/// - a sequence holding any container writes explicit indices:
///   `e[0]=1&e[1][a]=2`
/// - mapping keys are percent-encoded and wrapped in brackets below the
///   top level: `a[b][c]=1`
/// - values are percent-encoded
///
/// `prefix` is written verbatim in front of every key, so it must already
/// be encoded. `None` means the value sits at the top level, where
/// mapping keys are written without brackets. A sequence or string at
/// the top level has an empty key (`[]=a`, `=a`).
///
/// ```
/// use qs_stringify::{serialize, Shaken};
///
/// let tags = Shaken::Sequence(vec![
///     Shaken::String("a b".to_owned()),
///     Shaken::String("c".to_owned()),
/// ]);
/// assert_eq!(serialize(&tags, Some("tags")), "tags[]=a%20b&tags[]=c");
/// ```
pub fn serialize(value: &Shaken, prefix: Option<&str>) -> String {
    let mut serializer = QsSerializer::new(prefix);
    serializer.serialize(value);
    serializer.output
}

/// A serializer for the querystring format.
///
/// The serializer maintains a key stack to build nested paths. For example,
/// when serializing `{user: {name: "John"}}`, it pushes `user` onto the stack,
/// then `[name]`, and writes `user[name]=John` when it reaches the string.
struct QsSerializer {
    output: String,
    first_kv: bool,
    key: Vec<String>,
}

impl QsSerializer {
    fn new(prefix: Option<&str>) -> Self {
        Self {
            // a guess based on what `serde_json` does
            output: String::with_capacity(128),
            first_kv: true,
            key: prefix.map(|p| vec![p.to_owned()]).unwrap_or_default(),
        }
    }

    fn serialize(&mut self, value: &Shaken) {
        match value {
            Shaken::String(s) => self.write_value(s),
            Shaken::Sequence(seq) => {
                // nested containers need an index to tell their
                // elements apart; plain strings can share `[]`
                let indexed = seq.iter().any(Shaken::is_container);
                let mut buffer = itoa::Buffer::new();
                for (idx, element) in seq.iter().enumerate() {
                    let segment = if indexed { buffer.format(idx) } else { "" };
                    self.push_segment(segment);
                    self.serialize(element);
                    self.key.pop();
                }
            }
            Shaken::Mapping(map) => {
                for (key, element) in map {
                    self.push_key(key);
                    self.serialize(element);
                    self.key.pop();
                }
            }
        }
    }

    /// Pushes a mapping key onto the key stack.
    ///
    /// - First key "user" becomes: `user`
    /// - Second key "name" becomes: `user[name]`
    /// - Third key "first" becomes: `user[name][first]`
    fn push_key(&mut self, key: &str) {
        if self.key.is_empty() {
            self.key.push(encode(key).to_string());
        } else if is_unreserved(key) {
            self.push_segment(key);
        } else {
            self.push_segment(&encode(key).to_string());
        }
    }

    /// Pushes an already-encoded segment wrapped in brackets.
    fn push_segment(&mut self, segment: &str) {
        let mut bracketed = String::with_capacity(segment.len() + 2);
        bracketed.push('[');
        bracketed.push_str(segment);
        bracketed.push(']');
        self.key.push(bracketed);
    }

    fn write_value(&mut self, value: &str) {
        if self.first_kv {
            self.first_kv = false;
        } else {
            self.output.push('&');
        }
        for segment in &self.key {
            self.output.push_str(segment);
        }
        self.output.push('=');
        self.output.extend(encode(value));
    }
}
