//! Domain Errors
//!
//! Error types for note operations.

use thiserror::Error;

use crate::domain::validation::FieldViolation;

/// Outcome of a failed note operation
#[derive(Debug, Error)]
pub enum NoteError {
    #[error("Invalid input: {} violation(s)", .0.len())]
    InvalidInput(Vec<FieldViolation>),

    #[error("Note not found")]
    NotFound,

    #[error("Storage error: {cause}")]
    Storage { cause: String },
}

impl NoteError {
    pub fn invalid_field<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::InvalidInput(vec![FieldViolation::new(field, message)])
    }
}

impl From<StorageError> for NoteError {
    fn from(err: StorageError) -> Self {
        Self::Storage {
            cause: err.to_string(),
        }
    }
}

/// Failure reported by a storage implementation
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StorageError(pub String);

impl StorageError {
    pub fn new<T: std::fmt::Display>(cause: T) -> Self {
        Self(cause.to_string())
    }
}
