//! Error types for the recommender crate.
//!
//! Structurally invalid inputs (wrong window lengths, negative variety)
//! are rejected up front with a clear error instead of producing
//! numerically odd rankings. Unrecognized preference-order tokens are
//! NOT an error: they are silently ignored and their feature keeps a
//! zero weight.

use rooms::RoomDataError;
use thiserror::Error;

/// Errors that can occur while parsing preferences or scoring candidates
#[derive(Error, Debug)]
pub enum RecommendError {
    /// Preference order did not rank exactly the expected number of features
    #[error("Expected {expected} preference order entries but found {found}")]
    PreferenceOrderLength { expected: usize, found: usize },

    /// Preference vector did not carry exactly one value per feature
    #[error("Expected {expected} preference values but found {found}")]
    PreferenceVectorLength { expected: usize, found: usize },

    /// History window was not exactly the size the dominance thresholds
    /// are derived for
    #[error("Expected a history window of {expected} rooms but found {found}")]
    HistoryLength { expected: usize, found: usize },

    /// Variety level below zero has no defined meaning
    #[error("Variety level must be non-negative, got {0}")]
    NegativeVariety(f64),

    /// A categorical preference value was outside its closed set
    #[error(transparent)]
    InvalidValue(#[from] RoomDataError),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RecommendError>;
