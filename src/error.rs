//! Error types for order key generation

use thiserror::Error;

/// Errors returned by key validation and generation
///
/// Malformed input (`InvalidHead`, `KeyTooShort`, `LengthMismatch`,
/// `InvalidKey`, `RangeInvalid`) and exhaustion of the key space
/// (`RangeUnderflow`, `RangeOverflow`) are separate variants so callers can
/// tell a bad neighbour apart from a full sequence end.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    /// First character is not in `A..=Z` or `a..=z`
    #[error("invalid order key head: {0}")]
    InvalidHead(char),

    /// Key is shorter than the integer part its head announces
    #[error("order key too short for its head: {0}")]
    KeyTooShort(String),

    /// Integer part length disagrees with its head
    #[error("invalid integer part of order key: {0}")]
    LengthMismatch(String),

    /// Key is the reserved sentinel, has a trailing zero digit,
    /// or contains characters outside the alphabet
    #[error("invalid order key: {0}")]
    InvalidKey(String),

    /// Both bounds given but `a >= b`
    #[error("{a} >= {b}")]
    RangeInvalid { a: String, b: String },

    /// No key exists below the upper bound
    #[error("range underflow")]
    RangeUnderflow,

    /// No key exists above the lower bound
    #[error("range overflow")]
    RangeOverflow,

    /// Custom digit alphabet rejected
    #[error("invalid alphabet: {0}")]
    InvalidAlphabet(String),
}

impl KeyError {
    /// True for the two key-space exhaustion conditions
    pub fn is_range_exhausted(&self) -> bool {
        matches!(self, KeyError::RangeUnderflow | KeyError::RangeOverflow)
    }
}

/// Result type for order key operations
pub type Result<T> = std::result::Result<T, KeyError>;
