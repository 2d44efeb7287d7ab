//! Loading benchmark documents from disk.

pub mod json;

pub use json::read_document;
