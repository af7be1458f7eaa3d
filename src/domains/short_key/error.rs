//! Short key codec error types.

use thiserror::Error;

/// Result type for short key conversions.
pub type ShortKeyResult<T> = Result<T, ShortKeyError>;

/// Errors that can occur while encoding or decoding short keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShortKeyError {
    /// The identifier cannot be encoded (negative ids have no short key).
    #[error("Invalid argument: id must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// The short key contains a character outside the alphabet.
    #[error("Invalid character in short key: '{0}'")]
    InvalidCharacter(char),

    /// The short key encodes a value larger than `u64::MAX`.
    #[error("Short key is out of range: {0}")]
    Overflow(String),
}

impl ShortKeyError {
    /// Create an "invalid argument" error.
    pub fn invalid_argument(id: i64) -> Self {
        Self::InvalidArgument(id)
    }

    /// Create an "invalid character" error.
    pub fn invalid_character(c: char) -> Self {
        Self::InvalidCharacter(c)
    }

    /// Create an "overflow" error for the given key.
    pub fn overflow(key: impl Into<String>) -> Self {
        Self::Overflow(key.into())
    }
}
