//! Core V8 container reader module

pub mod codec;
pub mod format;
pub mod osml;
pub mod reader;
pub mod types;
mod utils;

pub use reader::{is_nested_container, Container};
pub use types::error::{V8Error, Result};
