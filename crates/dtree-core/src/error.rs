//! Error types for dtree Core

use thiserror::Error;

/// Core error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Type error: field '{field}' expected {expected}, found {found}")]
    TypeError {
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Field not found: {0}")]
    FieldNotFound(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
