//! Short key domain module.
//!
//! Converts numeric identifiers to compact, fixed-alphabet short keys and
//! back. This is the only part of the server with real logic; the tools and
//! resources domains expose it over MCP.

mod codec;
mod error;

pub use codec::{ALPHABET, BASE, MIN_LENGTH, PAD, decode, encode, try_encode};
pub use error::{ShortKeyError, ShortKeyResult};
