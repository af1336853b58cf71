//! Core data structures and layout constants for the V8 container format.
//!
//! This module defines the fundamental types used throughout the library:
//! - Block headers and blocks
//! - The container header
//! - Index records and the entries they resolve to

/// Size of a block header in bytes.
pub const BLOCK_HEADER_SIZE: usize = 31;

/// Value of the first header byte (`'\r'`) on every valid block.
pub const BLOCK_HEADER_MARKER: u8 = 13;

/// Reserved block address meaning "no next block".
///
/// Also the first field of every container header, which makes it usable as a
/// format signature for nested containers.
pub const END_OF_CHAIN: u32 = 2147483647;

/// Size of the container header that precedes the first block.
pub const CONTAINER_HEADER_SIZE: usize = 16;

/// Start offset of the index document.
pub const INDEX_DOCUMENT_OFFSET: u32 = 16;

/// Size of one record in the index document.
pub const INDEX_RECORD_SIZE: usize = 12;

/// Byte offset of the UTF-16LE filename inside an attributes document.
pub const FILENAME_OFFSET: usize = 20;

/// Decoded header of a single block.
///
/// ```text
/// [0]       marker byte (13)
/// [2..10)   document length, hex-ASCII
/// [11..19)  payload length, hex-ASCII
/// [20..28)  next block address, hex-ASCII
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHeader {
    /// Total length of the document; only meaningful on the first block of a chain.
    pub document_length: u32,
    /// Length of this block's payload in bytes.
    pub length: u32,
    /// Offset of the next block, or [`END_OF_CHAIN`].
    pub next_block_address: u32,
}

impl BlockHeader {
    pub fn is_last(&self) -> bool {
        self.next_block_address == END_OF_CHAIN
    }
}

/// A block header together with its payload.
#[derive(Debug, Clone)]
pub struct Block {
    pub header: BlockHeader,
    pub payload: Vec<u8>,
}

/// The 16-byte header at the very start of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    /// Address of the first free block; [`END_OF_CHAIN`] when there is none.
    pub first_free_block: u32,
    /// Block size the writer used when allocating new chains.
    pub default_block_size: u32,
    pub revision: u32,
    pub reserved: u32,
}

/// One 12-byte record of the index document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRecord {
    pub attributes_offset: u32,
    pub content_offset: u32,
}

/// Decoded attributes document of an entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
    /// Raw creation stamp as stored by the writer.
    pub created: u64,
    /// Raw modification stamp as stored by the writer.
    pub modified: u64,
    pub name: String,
}

/// A fully resolved index entry, in on-disk order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    pub name: String,
    pub attributes_offset: u32,
    pub content_offset: u32,
    pub created: u64,
    pub modified: u64,
}
