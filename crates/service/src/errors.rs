use thiserror::Error;
use uuid::Uuid;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("pokemon already exists with {field} '{value}'")]
    DuplicateEntry { field: &'static str, value: String },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found_term(term: &str) -> Self {
        Self::NotFound(format!("pokemon with id, name or no '{term}' not found"))
    }

    pub fn not_found_id(id: Uuid) -> Self {
        Self::NotFound(format!("pokemon with id '{id}' not found"))
    }
}

/// Single translation point from store errors to caller-facing kinds, so
/// the store can be swapped without changing what callers match on.
impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey { field, value } => Self::DuplicateEntry { field, value },
            other => Self::Internal(other.to_string()),
        }
    }
}
