//! Second stage: prune absent values and empty containers.

use crate::normalize::Normalized;
use crate::value::Map;

/// A normalized value tree with nothing absent left in it.
///
/// Every container built by [`shake`] has at least one child. Absence
/// of the whole tree is expressed as `None` by [`shake`] itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shaken {
    String(String),
    Sequence(Vec<Shaken>),
    Mapping(Map<Shaken>),
}

impl Shaken {
    /// Returns `true` for sequences and mappings.
    pub fn is_container(&self) -> bool {
        !matches!(self, Shaken::String(_))
    }
}

/// Removes every absent value from a normalized tree.
///
/// Sequence elements and mapping entries that shake down to nothing
/// are dropped, keeping the relative order of the rest. A container
/// left with no children is itself absent, so the result is `None`
/// when nothing at all survives.
///
/// Empty strings are kept: only absence is removed.
///
/// ```
/// use qs_stringify::{normalize, shake, Shaken, Value};
///
/// let value = Value::from(vec![Value::Absent, Value::from(""), Value::from(vec![Value::Absent])]);
/// assert_eq!(
///     shake(normalize(&value)),
///     Some(Shaken::Sequence(vec![Shaken::String("".to_owned())]))
/// );
/// ```
pub fn shake(value: Normalized) -> Option<Shaken> {
    match value {
        Normalized::Absent => None,
        Normalized::String(s) => Some(Shaken::String(s)),
        Normalized::Sequence(seq) => {
            let shaken: Vec<_> = seq.into_iter().filter_map(shake).collect();
            (!shaken.is_empty()).then_some(Shaken::Sequence(shaken))
        }
        Normalized::Mapping(map) => {
            let shaken: Map<_> = map
                .into_iter()
                .filter_map(|(k, v)| Some((k, shake(v)?)))
                .collect();
            (!shaken.is_empty()).then_some(Shaken::Mapping(shaken))
        }
    }
}
