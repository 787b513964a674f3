//! Error types for the rooms crate.

use crate::types::RoomId;
use thiserror::Error;

/// Errors that can occur while parsing room data or loading a catalog
#[derive(Error, Debug)]
pub enum RoomDataError {
    /// I/O error occurred while reading a catalog file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Catalog file was not valid JSON (or did not match the Room schema)
    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] serde_json::Error),

    /// A categorical field had a value outside its closed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// Two rooms in a catalog shared the same id
    #[error("Duplicate room id {0} in catalog")]
    DuplicateId(RoomId),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RoomDataError>;
