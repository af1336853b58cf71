//! File format parsing layer for V8 containers.
//!
//! This module provides the mid-level parsing layer that bridges between
//! raw seek-and-read I/O and the high-level [`Container`](crate::v8::reader::Container).
//!
//! # Module Organization
//!
//! - [`header`]: Parses the 16-byte container header
//! - [`block`]: Decodes block headers and reads single blocks
//! - [`document`]: Follows block chains to rebuild documents
//! - [`index`]: Parses the index document into a filename directory
//!
//! # Architecture
//!
//! ```text
//! File Structure:
//! ┌─────────────────────┐
//! │  Container header   │ ← header::parse()
//! ├─────────────────────┤
//! │  Index document     │ ← index::parse()
//! │  (offset 16)        │
//! ├─────────────────────┤
//! │  Attributes and     │ ← document::read_document()
//! │  content documents  │     └─ block::read_block() per block
//! │  (block chains)     │
//! └─────────────────────┘
//! ```

pub mod block;
pub mod document;
pub mod header;
pub mod index;
