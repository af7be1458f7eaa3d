//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod id_to_short_key;
pub mod short_key_to_id;

pub use id_to_short_key::{IdToShortKeyParams, IdToShortKeyTool};
pub use short_key_to_id::{ShortKeyToIdParams, ShortKeyToIdTool};
