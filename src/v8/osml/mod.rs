//! Decoder for OSML, the brace-and-quote list notation used by metadata
//! entries inside containers.
//!
//! ```text
//! {"a","b",{"c"},1,
//! {0,"x""y"}}
//! ```
//!
//! decodes to a folder holding `a`, `b`, a folder holding `c`, the bare token
//! `1` and a folder holding `0` and `x"y`.
//!
//! # Example
//! ```
//! use v8unpack::osml::{self, Value};
//!
//! let tree = osml::decode(r#"{"a",{"c"}}"#).unwrap();
//! assert_eq!(tree.get(0), Some(&Value::from("a")));
//! assert_eq!(tree.at(&[1, 0]).and_then(Value::as_str), Some("c"));
//! ```

mod parser;
mod value;

use encoding_rs::UTF_8;

use crate::v8::types::error::Result;
pub use parser::MAX_NESTING_DEPTH;
pub use value::Value;

/// Decodes one OSML document into a tree.
///
/// # Errors
/// [`V8Error::MalformedDocument`](crate::V8Error::MalformedDocument) when the
/// input does not start with `{`, ends before the outermost folder closes, or
/// nests folders deeper than [`MAX_NESTING_DEPTH`].
pub fn decode(text: &str) -> Result<Value> {
    parser::Parser::new(text).parse()
}

/// Decodes an OSML document from raw entry bytes.
///
/// Text entries are UTF-8 and usually start with a byte order mark, which is
/// stripped before parsing.
pub fn decode_bytes(bytes: &[u8]) -> Result<Value> {
    let (text, _, _) = UTF_8.decode(bytes);
    decode(&text)
}
