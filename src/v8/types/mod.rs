//! Foundational data structures, error types, and metadata kind tables.

pub mod error;
pub mod kinds;
pub mod models;
