//! # Index Parsing
//!
//! The index document lives at a fixed offset and is a flat list of 12-byte
//! records. Each record points at two documents: the entry's attributes
//! (timestamps and filename) and its content.
//!
//! ```text
//! Index record:
//! [4 bytes] attributes document offset (little-endian u32)
//! [4 bytes] content document offset (little-endian u32)
//! [4 bytes] reserved
//!
//! Attributes document:
//! [8 bytes] creation stamp (little-endian u64)
//! [8 bytes] modification stamp (little-endian u64)
//! [4 bytes] reserved
//! [N bytes] filename, UTF-16LE, NUL-terminated
//! ```

use std::collections::HashMap;
use std::io::{Read, Seek};
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, info};

use crate::v8::types::error::{V8Error, Result};
use crate::v8::types::models::{
    FileAttributes, IndexEntry, IndexRecord, FILENAME_OFFSET, INDEX_DOCUMENT_OFFSET, INDEX_RECORD_SIZE,
};
use crate::v8::utils;
use super::document;

/// Name to content offset map plus the entries in on-disk order.
#[derive(Debug, Clone, Default)]
pub struct Index {
    pub offsets: HashMap<String, u32>,
    pub entries: Vec<IndexEntry>,
}

/// Reads the index document and every attributes document it references.
///
/// Duplicate names keep the last content offset in the map.
pub fn parse<R: Read + Seek>(source: &mut R) -> Result<Index> {
    let index_document = document::read_document(source, INDEX_DOCUMENT_OFFSET)?;
    let records = parse_index_records(&index_document);
    info!("Index document: {} bytes, {} entries", index_document.len(), records.len());

    let mut index = Index::default();
    for record in records {
        let attributes_document = document::read_document(source, record.attributes_offset)?;
        let attributes = parse_attributes(&attributes_document)?;
        debug!(
            "Index entry '{}': attributes={:#x}, content={:#x}",
            attributes.name, record.attributes_offset, record.content_offset
        );

        index.offsets.insert(attributes.name.clone(), record.content_offset);
        index.entries.push(IndexEntry {
            name: attributes.name,
            attributes_offset: record.attributes_offset,
            content_offset: record.content_offset,
            created: attributes.created,
            modified: attributes.modified,
        });
    }

    Ok(index)
}

/// Splits an index document into records, stopping at the first record whose
/// attributes offset is zero. A trailing partial record is ignored.
pub fn parse_index_records(index_document: &[u8]) -> Vec<IndexRecord> {
    index_document
        .chunks_exact(INDEX_RECORD_SIZE)
        .map(|chunk| IndexRecord {
            attributes_offset: LittleEndian::read_u32(&chunk[0..4]),
            content_offset: LittleEndian::read_u32(&chunk[4..8]),
        })
        .take_while(|record| record.attributes_offset != 0)
        .collect()
}

/// Decodes an attributes document.
pub fn parse_attributes(attributes_document: &[u8]) -> Result<FileAttributes> {
    if attributes_document.len() < FILENAME_OFFSET {
        return Err(V8Error::InvalidFormat(format!(
            "Attributes document too short: {} bytes (minimum {} required)",
            attributes_document.len(),
            FILENAME_OFFSET
        )));
    }

    Ok(FileAttributes {
        created: LittleEndian::read_u64(&attributes_document[0..8]),
        modified: LittleEndian::read_u64(&attributes_document[8..16]),
        name: decode_filename(&attributes_document[FILENAME_OFFSET..]),
    })
}

/// Decodes a filename stored as NUL-terminated UTF-16LE.
pub fn decode_filename(bytes: &[u8]) -> String {
    utils::read_utf16_nul_terminated(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(attributes: u32, content: u32) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&attributes.to_le_bytes());
        out.extend_from_slice(&content.to_le_bytes());
        out.extend_from_slice(&0x7fffffffu32.to_le_bytes());
        out
    }

    #[test]
    fn records_stop_at_zero_attributes_offset() {
        let mut data = record(0x100, 0x200);
        data.extend(record(0x300, 0x400));
        data.extend(record(0, 0x500));
        data.extend(record(0x600, 0x700));

        let records = parse_index_records(&data);
        assert_eq!(
            records,
            vec![
                IndexRecord { attributes_offset: 0x100, content_offset: 0x200 },
                IndexRecord { attributes_offset: 0x300, content_offset: 0x400 },
            ]
        );
    }

    #[test]
    fn trailing_partial_record_is_ignored() {
        let mut data = record(0x100, 0x200);
        data.extend_from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(parse_index_records(&data).len(), 1);
    }

    #[test]
    fn short_attributes_document_is_rejected() {
        assert!(matches!(parse_attributes(&[0u8; 19]), Err(V8Error::InvalidFormat(_))));
    }
}
