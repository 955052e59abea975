//! Error types for civil-time parsing.
//!
//! The calculator itself is total; only the string front-ends can fail.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CivilTimeError {
    #[error("Invalid short date '{input}': {reason}")]
    InvalidShortDate { input: String, reason: String },

    #[error("Invalid epoch: {0} (expected 'unix' or 'y2k')")]
    InvalidEpoch(String),
}

pub type Result<T> = std::result::Result<T, CivilTimeError>;
