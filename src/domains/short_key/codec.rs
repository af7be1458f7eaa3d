//! Positional encoding between identifiers and short keys.
//!
//! Identifiers are written in base 60 using [`ALPHABET`] as the digit table,
//! most significant digit first, and left-padded with `'0'` to
//! [`MIN_LENGTH`] characters. The alphabet leaves out `I` and `l` so keys
//! stay readable when copied by hand.

use tracing::debug;

use super::error::{ShortKeyError, ShortKeyResult};

/// Digit table, indexed by digit value.
pub const ALPHABET: &[u8; 60] = b"0123456789ABCDEFGHJKLMNOPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Numeric base of the encoding. Always equal to the alphabet width.
pub const BASE: u64 = ALPHABET.len() as u64;

/// Minimum length of an encoded key.
pub const MIN_LENGTH: usize = 6;

/// Character used to left-pad short encodings.
pub const PAD: char = ALPHABET[0] as char;

/// Encode an identifier as a short key.
///
/// The result is at least [`MIN_LENGTH`] characters long; larger ids produce
/// longer keys and are never truncated. `0` encodes to `"000000"`.
pub fn encode(mut id: u64) -> String {
    // Collected least significant digit first, reversed at the end.
    let mut digits = Vec::with_capacity(MIN_LENGTH);

    while id > 0 {
        digits.push(ALPHABET[(id % BASE) as usize]);
        id /= BASE;
    }

    while digits.len() < MIN_LENGTH {
        digits.push(PAD as u8);
    }

    digits.iter().rev().map(|&b| b as char).collect()
}

/// Encode a signed identifier, rejecting negative values.
pub fn try_encode(id: i64) -> ShortKeyResult<String> {
    let id = u64::try_from(id).map_err(|_| ShortKeyError::invalid_argument(id))?;
    Ok(encode(id))
}

/// Decode a short key back into its identifier.
///
/// Lookup is case-sensitive. The empty string decodes to `0`, and leading
/// pad characters do not change the value.
pub fn decode(key: &str) -> ShortKeyResult<u64> {
    key.chars().try_fold(0u64, |id, c| {
        let digit = digit_value(c).ok_or_else(|| {
            debug!("Rejecting short key {:?}: bad character {:?}", key, c);
            ShortKeyError::invalid_character(c)
        })?;

        id.checked_mul(BASE)
            .and_then(|id| id.checked_add(digit))
            .ok_or_else(|| ShortKeyError::overflow(key))
    })
}

/// Position of `c` in the alphabet, if it is a digit at all.
fn digit_value(c: char) -> Option<u64> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&b| b == c as u8)
        .map(|pos| pos as u64)
}
