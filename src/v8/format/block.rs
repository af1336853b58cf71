//! Block header decoding and single-block reads.

use std::io::{self, Read, Seek, SeekFrom};
use log::trace;

use crate::v8::types::error::{V8Error, Result};
use crate::v8::types::models::{Block, BlockHeader, BLOCK_HEADER_MARKER, BLOCK_HEADER_SIZE};
use crate::v8::utils;

/// Decodes a raw 31-byte block header.
///
/// `offset` is only used for error reporting.
pub fn parse_block_header(raw: &[u8; BLOCK_HEADER_SIZE], offset: u32) -> Result<BlockHeader> {
    if raw[0] != BLOCK_HEADER_MARKER {
        return Err(V8Error::MalformedBlockHeader {
            offset,
            observed_byte: raw[0],
        });
    }

    Ok(BlockHeader {
        document_length: utils::read_hex_ascii(&raw[2..10])?,
        length: utils::read_hex_ascii(&raw[11..19])?,
        next_block_address: utils::read_hex_ascii(&raw[20..28])?,
    })
}

/// Reads the block at `offset`: header first, then exactly `length` payload bytes.
///
/// A source that ends early yields an I/O error.
pub fn read_block<R: Read + Seek>(source: &mut R, offset: u32) -> Result<Block> {
    source.seek(SeekFrom::Start(offset as u64))?;

    let mut raw_header = [0u8; BLOCK_HEADER_SIZE];
    source.read_exact(&mut raw_header)?;
    let header = parse_block_header(&raw_header, offset)?;

    trace!(
        "Block at {:#x}: document_length={}, length={}, next={:#x}",
        offset, header.document_length, header.length, header.next_block_address
    );

    source.seek(SeekFrom::Start(offset as u64 + BLOCK_HEADER_SIZE as u64))?;
    let length = header.length as u64;
    let mut payload = Vec::new();
    source.by_ref().take(length).read_to_end(&mut payload)?;
    if (payload.len() as u64) < length {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            format!(
                "Block at {:#x} declares {} payload bytes but only {} are available",
                offset, length, payload.len()
            ),
        )
        .into());
    }

    Ok(Block { header, payload })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header_bytes(document_length: u32, length: u32, next: u32) -> [u8; BLOCK_HEADER_SIZE] {
        let text = format!("\r\n{:08x} {:08x} {:08x} \r\n", document_length, length, next);
        text.as_bytes().try_into().unwrap()
    }

    #[test]
    fn parses_header_fields() {
        let header = parse_block_header(&header_bytes(0x200, 0x1f, 0x7fffffff), 0).unwrap();
        assert_eq!(header.document_length, 0x200);
        assert_eq!(header.length, 0x1f);
        assert!(header.is_last());
    }

    #[test]
    fn rejects_wrong_marker() {
        let mut raw = header_bytes(1, 1, 0x7fffffff);
        raw[0] = b'X';
        match parse_block_header(&raw, 0x40) {
            Err(V8Error::MalformedBlockHeader { offset, observed_byte }) => {
                assert_eq!(offset, 0x40);
                assert_eq!(observed_byte, b'X');
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn truncated_payload_is_an_io_error() {
        let mut data = header_bytes(10, 10, 0x7fffffff).to_vec();
        data.extend_from_slice(b"short");
        let result = read_block(&mut Cursor::new(data), 0);
        assert!(matches!(result, Err(V8Error::Io(e)) if e.kind() == io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn oversized_length_fails_without_reserving_it() {
        let mut data = header_bytes(0, 0xfffffff0, 0x7fffffff).to_vec();
        data.push(b'x');
        match read_block(&mut Cursor::new(data), 0) {
            Err(V8Error::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
