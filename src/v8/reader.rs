use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, info};

use super::codec::compression;
use super::format::{self, document, index::Index};
use super::types::error::{V8Error, Result};
use super::types::models::{ContainerHeader, IndexEntry, END_OF_CHAIN};

/// A reader for V8 container files.
///
/// The index is built once in [`Container::open`]; every read after that goes
/// back to the source. Reads seek the source, hence `&mut self`.
#[derive(Debug)]
pub struct Container<R> {
    source: R,
    header: ContainerHeader,
    index: Index,
}

impl<R: Read + Seek> Container<R> {
    /// Opens a container over a seekable source and reads its index.
    ///
    /// Pass `&mut file` to keep ownership of the handle.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source is shorter than the structures it declares
    /// - A block header is malformed
    /// - A block chain loops
    pub fn open(mut source: R) -> Result<Self> {
        info!("Opening V8 container");
        let header = format::header::parse(&mut source)?;
        let index = format::index::parse(&mut source)?;
        info!("V8 container opened: {} entries", index.entries.len());

        Ok(Self { source, header, index })
    }

    /// Reads an entry by name, inflating it when `decompress` is set.
    ///
    /// A failed read leaves the index untouched, so later reads still work.
    pub fn read_file(&mut self, name: &str, decompress: bool) -> Result<Vec<u8>> {
        let offset = *self
            .index
            .offsets
            .get(name)
            .ok_or_else(|| V8Error::FileNotFound { name: name.to_string() })?;

        debug!("Reading '{}' at {:#x} (decompress={})", name, offset, decompress);
        let raw = document::read_document(&mut self.source, offset)?;
        if decompress {
            compression::inflate_raw(&raw)
        } else {
            Ok(raw)
        }
    }

    /// Reads and inflates an entry.
    pub fn read(&mut self, name: &str) -> Result<Vec<u8>> {
        self.read_file(name, true)
    }

    /// Reads an entry exactly as stored.
    pub fn read_raw(&mut self, name: &str) -> Result<Vec<u8>> {
        self.read_file(name, false)
    }

    /// Reads an entry and opens it as a container of its own.
    ///
    /// Forms and templates of external processors are stored this way.
    pub fn open_nested(&mut self, name: &str) -> Result<Container<Cursor<Vec<u8>>>> {
        let bytes = self.read(name)?;
        if !is_nested_container(&bytes) {
            return Err(V8Error::InvalidFormat(format!("Entry '{}' is not a nested container", name)));
        }
        Container::<Cursor<Vec<u8>>>::from_bytes(bytes)
    }

    /// Name to content offset map.
    pub fn index(&self) -> &HashMap<String, u32> {
        &self.index.offsets
    }

    /// Index entries in on-disk order, duplicates included.
    pub fn entries(&self) -> &[IndexEntry] {
        &self.index.entries
    }

    pub fn header(&self) -> &ContainerHeader {
        &self.header
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.offsets.contains_key(name)
    }

    /// Entry names in on-disk order.
    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.index.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Gives the source back.
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl Container<Cursor<Vec<u8>>> {
    /// Opens a container held in memory, typically a nested one.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self> {
        Self::open(Cursor::new(bytes))
    }
}

/// Checks whether `bytes` look like a container: the first little-endian u32
/// equals the end-of-chain marker, as in every container header.
pub fn is_nested_container(bytes: &[u8]) -> bool {
    bytes.len() >= 4 && LittleEndian::read_u32(&bytes[0..4]) == END_OF_CHAIN
}
