//! Error types for identifier parsing and identity validation
//!
//! Generation never fails. These errors only surface when parsing an
//! externally supplied CURP or RFC, when checking a [`PersonalIdentity`]
//! for completeness, or when (de)serializing records.
//!
//! [`PersonalIdentity`]: crate::identity::PersonalIdentity

use thiserror::Error;

/// Result type alias for mxid operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the mxid library
#[derive(Error, Debug)]
pub enum Error {
    /// Error when a CURP does not have the official shape
    #[error("Invalid CURP: {0}")]
    InvalidCurp(String),

    /// Error when an RFC does not have the official shape
    #[error("Invalid RFC: {0}")]
    InvalidRfc(String),

    /// The CURP is well formed but its verification digit is wrong
    #[error("CURP {curp} has verification digit {found}, expected {expected}")]
    CheckDigitMismatch {
        curp: String,
        expected: char,
        found: char,
    },

    /// Birth date is not a real DD/MM/YYYY date
    #[error("Invalid birth date: {0}")]
    InvalidBirthDate(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// Validation error with multiple issues
    #[error("Validation failed: {issues:?}")]
    ValidationFailed { issues: Vec<String> },

    /// Error when an input matches neither identifier format
    #[error("Unrecognized identifier format: {0}")]
    UnrecognizedFormat(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
