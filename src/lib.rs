//! # v8unpack
//!
//! A reader for 1C:Enterprise V8 container files (`.epf`, `.erf`, `.cf`) and
//! for OSML, the nested list notation their metadata entries are written in.
//!
//! Read-only: containers can be listed and their entries extracted, nested
//! containers opened from memory, but nothing is ever written back.
pub mod v8;

// Re-export the main types for convenience
pub use v8::{
    Container,
    V8Error,
    Result,
    is_nested_container,
    osml,
    types::{
        kinds::{MetadataField, ObjectKind},
        models::{
            Block,
            BlockHeader,
            ContainerHeader,
            FileAttributes,
            IndexEntry,
            END_OF_CHAIN,
        },
    },
};
