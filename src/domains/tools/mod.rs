//! Tools domain module.
//!
//! Tools are executable functions that MCP clients call by name. This
//! server exposes the two short key conversions.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool metadata and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! A new tool needs its own file in `definitions/`, a route in
//! `router.rs` and an entry in `registry.rs`.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
