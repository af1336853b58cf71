//! Reassembly of logical documents from block chains.

use std::collections::HashSet;
use std::io::{Read, Seek};
use log::{trace, warn};

use crate::v8::types::error::{V8Error, Result};
use crate::v8::types::models::END_OF_CHAIN;
use super::block;

/// Reads the document whose first block is at `start`.
///
/// Payloads are concatenated in chain order and the result is cut to the most
/// recently seen non-zero `document_length`. A chain in which no block declares
/// a length is returned whole.
///
/// # Errors
/// Fails with [`V8Error::CorruptDocumentChain`] if a block is reached twice.
pub fn read_document<R: Read + Seek>(source: &mut R, start: u32) -> Result<Vec<u8>> {
    let mut document = Vec::new();
    let mut document_length: Option<u32> = None;
    let mut visited = HashSet::new();
    let mut next_block_address = start;

    while next_block_address != END_OF_CHAIN {
        if !visited.insert(next_block_address) {
            return Err(V8Error::CorruptDocumentChain {
                start,
                offset: next_block_address,
            });
        }

        let block = block::read_block(source, next_block_address)?;
        if block.header.document_length != 0 {
            document_length = Some(block.header.document_length);
        }
        document.extend_from_slice(&block.payload);
        next_block_address = block.header.next_block_address;
    }

    if let Some(declared) = document_length {
        let declared = declared as usize;
        if declared > document.len() {
            warn!(
                "Document at {:#x} declares {} bytes but its chain holds only {}",
                start, declared, document.len()
            );
        }
        document.truncate(declared);
    }

    trace!("Document at {:#x}: {} blocks, {} bytes", start, visited.len(), document.len());
    Ok(document)
}
