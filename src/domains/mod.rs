//! Domains module containing business logic organized by bounded contexts.
//!
//! - `short_key`: the id / short key codec
//! - `tools`: MCP tools exposing the codec
//! - `resources`: readable documents describing the server

pub mod resources;
pub mod short_key;
pub mod tools;
