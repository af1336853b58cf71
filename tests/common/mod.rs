//! In-memory builder for synthetic V8 containers.

#![allow(dead_code)]

use std::io::Write;
use flate2::{write::DeflateEncoder, Compression};

pub const END_OF_CHAIN: u32 = 0x7fffffff;

/// Raw 31-byte block header: `\r\n{doc_len} {len} {next} \r\n`, hex-ASCII fields.
pub fn block_header(document_length: u32, length: u32, next: u32) -> Vec<u8> {
    format!("\r\n{:08x} {:08x} {:08x} \r\n", document_length, length, next).into_bytes()
}

/// Appends `data` to `buf` as a chain of blocks with `capacity`-byte payloads.
///
/// Only the first block declares the document length; the last block is
/// zero-padded to full capacity. Returns the offset of the first block.
pub fn write_chain(buf: &mut Vec<u8>, data: &[u8], capacity: usize) -> u32 {
    let start = buf.len() as u32;
    if data.is_empty() {
        buf.extend(block_header(0, 0, END_OF_CHAIN));
        return start;
    }

    let chunks: Vec<&[u8]> = data.chunks(capacity).collect();
    for (i, chunk) in chunks.iter().enumerate() {
        let document_length = if i == 0 { data.len() as u32 } else { 0 };
        let is_last = i + 1 == chunks.len();
        let next = if is_last {
            END_OF_CHAIN
        } else {
            (buf.len() + 31 + capacity) as u32
        };
        buf.extend(block_header(document_length, capacity as u32, next));
        buf.extend_from_slice(chunk);
        buf.resize(buf.len() + capacity - chunk.len(), 0);
    }
    start
}

/// Attributes document: two stamps, 4 reserved bytes, UTF-16LE name, NUL, padding.
pub fn attributes(name: &str, created: u64, modified: u64) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&created.to_le_bytes());
    out.extend_from_slice(&modified.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]);
    for unit in name.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
    }
    out.extend_from_slice(&[0, 0]);
    out.extend_from_slice(&[0xAB; 6]);
    out
}

pub fn index_record(attributes_offset: u32, content_offset: u32) -> [u8; 12] {
    let mut record = [0u8; 12];
    record[0..4].copy_from_slice(&attributes_offset.to_le_bytes());
    record[4..8].copy_from_slice(&content_offset.to_le_bytes());
    record[8..12].copy_from_slice(&END_OF_CHAIN.to_le_bytes());
    record
}

pub fn deflate(data: &[u8]) -> Vec<u8> {
    let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

pub struct ContainerBuilder {
    entries: Vec<(String, Vec<u8>)>,
    trailing_records: Vec<[u8; 12]>,
    capacity: usize,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            trailing_records: Vec::new(),
            capacity: 512,
        }
    }

    /// Payload capacity of every block written after the index.
    pub fn block_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Adds an entry stored exactly as given.
    pub fn raw_entry(mut self, name: &str, content: &[u8]) -> Self {
        self.entries.push((name.to_string(), content.to_vec()));
        self
    }

    /// Adds an entry stored as a raw deflate stream.
    pub fn entry(self, name: &str, content: &[u8]) -> Self {
        let compressed = deflate(content);
        self.raw_entry(name, &compressed)
    }

    /// Appends a raw record after the real ones in the index document.
    pub fn trailing_record(mut self, record: [u8; 12]) -> Self {
        self.trailing_records.push(record);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&END_OF_CHAIN.to_le_bytes());
        buf.extend_from_slice(&512u32.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());
        buf.extend_from_slice(&0u32.to_le_bytes());

        let index_len = 12 * (self.entries.len() + self.trailing_records.len());
        buf.extend(block_header(index_len as u32, index_len as u32, END_OF_CHAIN));
        let index_payload_start = buf.len();
        buf.resize(index_payload_start + index_len, 0);

        let mut index = Vec::with_capacity(index_len);
        for (i, (name, content)) in self.entries.iter().enumerate() {
            let attributes_offset = write_chain(&mut buf, &attributes(name, i as u64 + 1, i as u64 + 2), self.capacity);
            let content_offset = write_chain(&mut buf, content, self.capacity);
            index.extend_from_slice(&index_record(attributes_offset, content_offset));
        }
        for record in &self.trailing_records {
            index.extend_from_slice(record);
        }

        buf[index_payload_start..index_payload_start + index_len].copy_from_slice(&index);
        buf
    }
}
