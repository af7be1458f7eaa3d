//! Short Key MCP Server Library
//!
//! Converts numeric ids to short, human-friendly keys and back, and serves
//! both conversions as Model Context Protocol (MCP) tools.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **short_key**: the base-60 id / short key codec
//!   - **tools**: the `idToShortKey` and `shortKeyToId` MCP tools
//!   - **resources**: the help document and codec description
//!
//! # Example
//!
//! ```rust
//! use short_key_mcp_server::domains::short_key;
//!
//! let key = short_key::encode(123456789);
//! assert_eq!(key, "09WYY9");
//! assert_eq!(short_key::decode(&key), Ok(123456789));
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use domains::short_key::{ShortKeyError, decode, encode, try_encode};
