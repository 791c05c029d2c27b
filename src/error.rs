//! Error types for FlatDB
//!
//! This module defines all error types used throughout the document store.

use thiserror::Error;

/// The main error type for FlatDB
#[derive(Error, Debug)]
pub enum Error {
    // ========== Validation Errors ==========
    #[error("Validation error: invalid amount of fields, expected {expected}, got {found}")]
    ArityMismatch { expected: usize, found: usize },

    #[error("Validation error: invalid type of field '{column}': given '{found}', expected '{expected}'")]
    TypeMismatch {
        column: String,
        expected: String,
        found: String,
    },

    #[error("Validation error: column '{0}' does not exist in the table schema")]
    ColumnNotFound(String),

    #[error("Validation error: row identifier '{0}' is reserved")]
    ReservedRowId(String),

    // ========== Database Errors ==========
    #[error("Validation error: database with name '{0}' already exists")]
    DatabaseAlreadyExists(String),

    #[error("Validation error: database with name '{0}' doesn't exist")]
    DatabaseNotFound(String),

    // ========== Table Errors ==========
    #[error("Validation error: table with name '{0}' already exists")]
    TableAlreadyExists(String),

    #[error("Validation error: table with name '{0}' doesn't exist")]
    TableNotFound(String),

    // ========== Storage Errors ==========
    #[error("Storage error: corrupted table file '{path}': {reason}")]
    Corrupted { path: String, reason: String },

    // ========== I/O Errors ==========
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for FlatDB operations
pub type Result<T> = std::result::Result<T, Error>;
