//! Nested querystrings from plain data.
//!
//! `qs_stringify` turns a mapping of plain data into a querystring,
//! writing nested values in the bracket notation understood by
//! [qs](https://github.com/ljharb/qs), Rack's
//! [`parse_nested_query`](http://www.rubydoc.info/github/rack/rack/Rack/Utils#parse_nested_query-class_method)
//! and most other form parsers.
//!
//! Stringifying happens in three stages, each of which is also public:
//!
//! 1. [`normalize`] reduces every leaf to a string: `null` becomes an empty
//!    string, booleans become `y` and `n`, numbers are written in decimal,
//!    and [custom values](ToCanonical) such as timestamps are replaced by
//!    their canonical form.
//! 2. [`shake`] removes absent values, and any container left empty by
//!    doing so.
//! 3. [`serialize`] flattens what is left into `key=value` pairs.
//!
//! ## Supported Types
//!
//! At the **top level**, only mappings (structs and maps when going
//! through serde) can be stringified, since every querystring entry needs a
//! key. Below the top level anything goes.
//!
//! Sequences of plain values use empty brackets, `tags[]=a&tags[]=b`.
//! Sequences containing mappings or other sequences use explicit indices,
//! `items[0][id]=1&items[1][id]=2`.
//!
//! ## Usage
//!
//! ```
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Address {
//!     city: String,
//!     postcode: String,
//! }
//!
//! #[derive(Serialize)]
//! struct QueryParams {
//!     id: u8,
//!     name: String,
//!     nickname: Option<String>,
//!     address: Address,
//!     user_ids: Vec<u8>,
//! }
//!
//! let params = QueryParams {
//!     id: 42,
//!     name: "Acme".to_string(),
//!     nickname: None,
//!     address: Address {
//!         city: "Carrot City".to_string(),
//!         postcode: "12345".to_string(),
//!     },
//!     user_ids: vec![1, 2, 3, 4],
//! };
//!
//! assert_eq!(
//!     qs_stringify::to_string(&params).unwrap(),
//!     "id=42&name=Acme&address[city]=Carrot%20City&address[postcode]=12345&\
//!      user_ids[]=1&user_ids[]=2&user_ids[]=3&user_ids[]=4"
//! );
//! ```
//!
//! Values can also be built directly with [`Value`], which can express
//! absence separately from `null`:
//!
//! ```
//! use qs_stringify::Value;
//!
//! let query = Value::from_iter([
//!     ("q", Value::from("rust lang")),
//!     ("page", Value::Absent),
//!     ("filter", Value::Null),
//! ]);
//! assert_eq!(
//!     qs_stringify::append_to_url("https://example.com/search", &query).unwrap(),
//!     "https://example.com/search?q=rust%20lang&filter="
//! );
//! ```

mod config;
mod error;
mod normalize;
mod ser;
mod shake;
mod value;

pub use config::Config;
pub use error::{Error, Result};
#[doc(inline)]
pub use normalize::{Normalized, normalize};
#[doc(inline)]
pub use ser::{ValueSerializer, append_to_url, serialize, to_query_string, to_string, to_value};
#[doc(inline)]
pub use shake::{Shaken, shake};
pub use value::{Map, Number, ToCanonical, Value};
