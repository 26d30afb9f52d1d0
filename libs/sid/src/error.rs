//! Error types for Sid parsing.

use thiserror::Error;

/// Errors that can occur when parsing a Sid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SidError {
    /// No input was supplied at all.
    #[error("Sid input is missing")]
    NullInput,

    /// The input cannot hold the fixed-width fields.
    #[error("Sid input is too short: {length} bytes, need at least {min}", min = crate::FIXED_LEN)]
    TooShort { length: usize },

    /// A character outside `[0-9A-Za-z]` was found where a base62 digit was expected.
    #[error("invalid base62 character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    /// A typed Sid was parsed with the wrong prefix.
    #[error("invalid Sid prefix: expected '{expected}', got '{actual}'")]
    InvalidPrefix {
        expected: &'static str,
        actual: String,
    },
}

impl SidError {
    /// Returns true if the input was too short to contain a Sid.
    pub fn is_too_short(&self) -> bool {
        matches!(self, SidError::TooShort { .. })
    }

    /// Returns true if this error indicates a bad base62 digit.
    pub fn is_invalid_character(&self) -> bool {
        matches!(self, SidError::InvalidCharacter { .. })
    }

    /// Returns true if this error indicates a prefix mismatch.
    pub fn is_prefix_error(&self) -> bool {
        matches!(self, SidError::InvalidPrefix { .. })
    }
}
