use serde::ser;
use std::fmt::Display;

/// Error type for `qs_stringify`.
///
/// The normalize, shake and serialize stages are total and never fail.
/// Errors only come from the entry points, which validate the top-level
/// shape and bound the nesting depth, and from the serde bridge.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The top-level value was not a mapping.
    ///
    /// The payload names the kind of value that was found instead.
    #[error("only mappings can be stringified, found {0}")]
    InvalidInput(&'static str),

    /// The input nests deeper than `Config::max_depth` allows.
    #[error("maximum nesting depth of {0} exceeded")]
    DepthLimitExceeded(usize),

    /// A value with no querystring representation.
    #[error("unsupported {0}")]
    Unsupported(&'static str),

    /// Custom error raised by a `Serialize` implementation.
    #[error("{0}")]
    Custom(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl ser::Error for Error {
    fn custom<T>(msg: T) -> Self
    where
        T: Display,
    {
        Error::Custom(msg.to_string())
    }
}
