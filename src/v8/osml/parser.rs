//! Recursive-descent parser for OSML text.
//!
//! The cursor is a byte offset. All delimiters are ASCII, so every slice taken
//! between delimiters falls on a character boundary.

use crate::v8::types::error::{V8Error, Result};
use super::value::Value;

/// Deepest folder nesting accepted; the outermost folder is level 1.
pub const MAX_NESTING_DEPTH: usize = 1024;

pub(super) struct Parser<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Parser<'a> {
    pub(super) fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Parses the outermost folder. Anything after its closing brace is ignored.
    pub(super) fn parse(mut self) -> Result<Value> {
        match self.current() {
            Some(b'{') => {
                self.advance(1);
                self.parse_folder(1)
            }
            _ => Err(self.malformed()),
        }
    }

    /// Called with the cursor just past `{`; consumes the matching `}`.
    ///
    /// A `{` that would open a folder deeper than [`MAX_NESTING_DEPTH`] is
    /// reported as malformed at its own position.
    fn parse_folder(&mut self, depth: usize) -> Result<Value> {
        let mut folder = Vec::new();
        loop {
            match self.current() {
                None => return Err(self.malformed()),
                Some(b'\n' | b'\r' | b',') => self.advance(1),
                Some(b'"') => {
                    self.advance(1);
                    folder.push(Value::String(self.parse_string()?));
                }
                Some(b'{') if depth >= MAX_NESTING_DEPTH => return Err(self.malformed()),
                Some(b'{') => {
                    self.advance(1);
                    folder.push(self.parse_folder(depth + 1)?);
                }
                Some(b'}') => {
                    self.advance(1);
                    return Ok(Value::Folder(folder));
                }
                Some(_) => folder.push(Value::String(self.parse_bare()?)),
            }
        }
    }

    /// Called with the cursor just past the opening quote; `""` is a literal quote.
    fn parse_string(&mut self) -> Result<String> {
        let mut value = String::new();
        let mut start = self.position;
        loop {
            match self.current() {
                None => return Err(self.malformed()),
                Some(b'"') if self.peek(1) == Some(b'"') => {
                    value.push_str(&self.input[start..self.position]);
                    value.push('"');
                    self.advance(2);
                    start = self.position;
                }
                Some(b'"') => {
                    value.push_str(&self.input[start..self.position]);
                    self.advance(1);
                    return Ok(value);
                }
                Some(_) => self.advance(1),
            }
        }
    }

    /// Unquoted token up to `,` (consumed) or `}` (left for the folder).
    fn parse_bare(&mut self) -> Result<String> {
        let start = self.position;
        loop {
            match self.current() {
                None => return Err(self.malformed()),
                Some(b',') => {
                    let value = self.input[start..self.position].to_string();
                    self.advance(1);
                    return Ok(value);
                }
                Some(b'}') => return Ok(self.input[start..self.position].to_string()),
                Some(_) => self.advance(1),
            }
        }
    }

    fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.input.as_bytes().get(self.position + offset).copied()
    }

    fn advance(&mut self, count: usize) {
        self.position += count;
    }

    fn malformed(&self) -> V8Error {
        V8Error::MalformedDocument {
            position: self.position,
            found: self.input.get(self.position..).and_then(|rest| rest.chars().next()),
        }
    }
}
