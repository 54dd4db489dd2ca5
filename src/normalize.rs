//! First stage: reduce every leaf of a [`Value`] to a string (or absence).

use crate::error::{Error, Result};
use crate::shake::Shaken;
use crate::value::{Map, Value};

/// A value tree whose leaves are all strings or absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Normalized {
    Absent,
    String(String),
    Sequence(Vec<Normalized>),
    Mapping(Map<Normalized>),
}

impl From<Shaken> for Normalized {
    fn from(value: Shaken) -> Self {
        match value {
            Shaken::String(s) => Normalized::String(s),
            Shaken::Sequence(seq) => Normalized::Sequence(seq.into_iter().map(Into::into).collect()),
            Shaken::Mapping(map) => {
                Normalized::Mapping(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

/// Normalizes a value tree.
///
/// - absent stays absent
/// - `null` becomes the empty string
/// - `true` becomes `"y"` and `false` becomes `"n"`
/// - custom values are replaced by their canonical form, which is then
///   normalized in turn
/// - numbers are written in plain decimal form
/// - sequences and mappings are normalized element-wise, keeping their
///   length and order
///
/// This never fails and has no depth limit. The entry points use
/// [`Config::normalize`](crate::Config::normalize) instead, which bounds
/// the nesting depth.
///
/// ```
/// use qs_stringify::{normalize, Normalized, Value};
///
/// let value = Value::from(vec![Value::Null, Value::from(true), Value::from(1)]);
/// assert_eq!(
///     normalize(&value),
///     Normalized::Sequence(vec![
///         Normalized::String("".to_owned()),
///         Normalized::String("y".to_owned()),
///         Normalized::String("1".to_owned()),
///     ])
/// );
/// ```
pub fn normalize(value: &Value) -> Normalized {
    match value {
        Value::Custom(custom) => normalize(&custom.to_canonical()),
        Value::Sequence(seq) => Normalized::Sequence(seq.iter().map(normalize).collect()),
        Value::Mapping(map) => {
            Normalized::Mapping(map.iter().map(|(k, v)| (k.clone(), normalize(v))).collect())
        }
        Value::Absent | Value::Null | Value::Bool(_) | Value::String(_) | Value::Number(_) => {
            normalize_scalar(value)
        }
    }
}

/// Normalizes a value with no children. Containers and custom values are
/// handled by the callers.
fn normalize_scalar(value: &Value) -> Normalized {
    match value {
        Value::Null => Normalized::String(String::new()),
        Value::Bool(true) => Normalized::String("y".to_owned()),
        Value::Bool(false) => Normalized::String("n".to_owned()),
        Value::String(s) => Normalized::String(s.clone()),
        Value::Number(n) => Normalized::String(n.to_string()),
        _ => Normalized::Absent,
    }
}

/// Walks a value tree, tracking how deep it is.
///
/// Depth counts the containers below the top-level value, plus one for
/// every custom conversion.
pub(crate) struct Normalizer {
    pub(crate) max_depth: usize,
}

impl Normalizer {
    /// Normalizes the top-level value of a querystring, which must be a
    /// mapping once any custom conversions are applied.
    pub(crate) fn normalize_mapping(&self, value: &Value, depth: usize) -> Result<Normalized> {
        match value {
            Value::Mapping(_) => self.normalize(value, depth),
            Value::Custom(custom) => {
                self.descend(depth)?;
                self.normalize_mapping(&custom.to_canonical(), depth + 1)
            }
            _ => {
                tracing::debug!(found = value.kind(), "only mappings can be stringified");
                Err(Error::InvalidInput(value.kind()))
            }
        }
    }

    pub(crate) fn normalize(&self, value: &Value, depth: usize) -> Result<Normalized> {
        Ok(match value {
            Value::Custom(custom) => {
                self.descend(depth)?;
                self.normalize(&custom.to_canonical(), depth + 1)?
            }
            Value::Sequence(seq) => {
                self.descend(depth)?;
                Normalized::Sequence(
                    seq.iter()
                        .map(|v| self.normalize(v, depth + 1))
                        .collect::<Result<_>>()?,
                )
            }
            Value::Mapping(map) => {
                self.descend(depth)?;
                Normalized::Mapping(
                    map.iter()
                        .map(|(k, v)| Ok((k.clone(), self.normalize(v, depth + 1)?)))
                        .collect::<Result<_>>()?,
                )
            }
            Value::Absent | Value::Null | Value::Bool(_) | Value::String(_) | Value::Number(_) => {
                normalize_scalar(value)
            }
        })
    }

    /// Checks that the children of a value at `depth` are still in bounds.
    ///
    /// The top-level container is at depth 0 and does not count.
    fn descend(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            tracing::debug!(max_depth = self.max_depth, "querystring input nested too deeply");
            return Err(Error::DepthLimitExceeded(self.max_depth));
        }
        Ok(())
    }
}
