//! Container header parsing.

use std::io::{Read, Seek, SeekFrom};
use log::debug;

use crate::v8::types::error::Result;
use crate::v8::types::models::ContainerHeader;
use crate::v8::utils;

/// Parses the 16-byte container header at the start of the source.
///
/// # Header Structure
/// ```text
/// [4 bytes] First free block address (little-endian u32)
/// [4 bytes] Default block size (little-endian u32)
/// [4 bytes] Revision (little-endian u32)
/// [4 bytes] Reserved
/// ```
pub fn parse<R: Read + Seek>(source: &mut R) -> Result<ContainerHeader> {
    source.seek(SeekFrom::Start(0))?;

    let header = ContainerHeader {
        first_free_block: utils::read_u32_le(source)?,
        default_block_size: utils::read_u32_le(source)?,
        revision: utils::read_u32_le(source)?,
        reserved: utils::read_u32_le(source)?,
    };

    debug!(
        "Container header: first_free_block={:#x}, default_block_size={}, revision={}",
        header.first_free_block, header.default_block_size, header.revision
    );
    Ok(header)
}
