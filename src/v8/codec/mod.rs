//! Codec layer for entry payloads.
//!
//! # Submodules
//!
//! - [`compression`][]: Raw deflate decompression

pub mod compression;
