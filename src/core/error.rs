use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structural problems found by [`check_validity`](super::check_validity).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ValidationError {
    /// The normalized input is not exactly 17 characters long.
    #[error("VIN must be 17 characters long, got {length}")]
    IncorrectLength {
        /// Number of characters in the normalized input.
        length: usize,
    },

    /// The input contains characters outside the VIN alphabet.
    ///
    /// Carries every distinct offending character, not just the first one.
    #[error("VIN contains invalid characters: {}", format_chars(.0))]
    InvalidCharacters(BTreeSet<char>),
}

/// The embedded check digit does not match the computed one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("check digit mismatch: expected '{expected}', found '{received}'")]
pub struct ChecksumError {
    /// Check digit computed from the other 16 characters (`0`-`9` or `X`).
    pub expected: char,
    /// Character found at the check digit position.
    pub received: char,
}

/// Errors returned by [`get_info`](super::get_info).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum VinError {
    /// The normalized input is not exactly 17 characters long.
    #[error("VIN must be 17 characters long, got {length}")]
    IncorrectLength {
        /// Number of characters in the normalized input.
        length: usize,
    },

    /// The input contains characters outside the VIN alphabet.
    #[error("VIN contains invalid characters: {}", format_chars(.0))]
    InvalidCharacters(BTreeSet<char>),

    /// The check digit is wrong for a VIN whose region enforces it.
    #[error(transparent)]
    Checksum(#[from] ChecksumError),

    /// The 2-character country code is not assigned.
    #[error("unknown country code '{0}'")]
    UnknownCountry(String),

    /// Neither the 3-character WMI nor its 2-character prefix is a known manufacturer.
    #[error("unknown manufacturer code '{0}'")]
    UnknownManufacturer(String),
}

impl From<ValidationError> for VinError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::IncorrectLength { length } => Self::IncorrectLength { length },
            ValidationError::InvalidCharacters(chars) => Self::InvalidCharacters(chars),
        }
    }
}

fn format_chars(chars: &BTreeSet<char>) -> String {
    chars
        .iter()
        .map(|c| format!("'{c}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
