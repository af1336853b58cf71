//! Custom error types for the v8unpack crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
#[derive(Debug, Error)]
pub enum V8Error {
    /// An error originating from I/O operations, including reads past the end of a truncated file.
    #[error("I/O error: {0:?}")]
    Io(#[from] std::io::Error),

    /// A block header does not start with the expected marker byte.
    ///
    /// Usually means the archive is corrupted or an offset points into the middle of a block.
    #[error("Malformed block header at offset {offset:#x}: expected marker byte 13, found {observed_byte}")]
    MalformedBlockHeader { offset: u32, observed_byte: u8 },

    /// A block chain revisits a block it has already passed through.
    #[error("Corrupt document chain starting at {start:#x}: block {offset:#x} is visited twice")]
    CorruptDocumentChain { start: u32, offset: u32 },

    /// The requested entry does not exist in the container index.
    #[error("File not found in container: {name}")]
    FileNotFound { name: String },

    /// An error occurred while inflating a compressed entry.
    #[error("Decompression failed: {0}")]
    DecompressionError(String),

    /// An OSML text does not conform to the grammar.
    ///
    /// `found` is `None` when the input ended before the structure was closed.
    #[error("Malformed OSML document at position {position}: unexpected {}", describe_char(.found))]
    MalformedDocument { position: usize, found: Option<char> },

    /// The data is structurally invalid in a way not covered by a more specific variant.
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

fn describe_char(found: &Option<char>) -> String {
    match found {
        Some(c) => format!("character {:?}", c),
        None => "end of input".to_string(),
    }
}

/// A convenience `Result` type alias using the crate's `V8Error` type.
pub type Result<T> = std::result::Result<T, V8Error>;
