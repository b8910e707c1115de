//! Storage abstractions for service layer
//!
//! Contains the error type shared by store implementations and the
//! JSON-file-backed document store used as the default backend.

pub mod json_document_store;

pub use json_document_store::JsonDocumentStore;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate key {field}: '{value}'")]
    DuplicateKey { field: &'static str, value: String },
    #[error("storage io error: {0}")]
    Io(String),
    #[error("storage encoding error: {0}")]
    Serde(String),
}
