//! Error types for the view-models

use thiserror::Error;

use crate::validation::FieldErrors;

#[derive(Error, Debug)]
pub enum Error {
    /// Form input rejected; nothing was mutated
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Stock item not found: {0}")]
    UnknownItem(String),

    #[error("No item is being edited")]
    NotEditing,

    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),

    /// No DO number is left after the given one
    #[error("Delivery order numbers exhausted after {0}")]
    SequenceExhausted(String),

    #[error("Invalid seed data: {0}")]
    Seed(#[from] serde_json::Error),
}

impl Error {
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Error::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
