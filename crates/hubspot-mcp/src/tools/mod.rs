//! MCP tool parameter types and shared helpers.
//!
//! All parameter structs derive `Deserialize + JsonSchema` for MCP tool
//! registration. Tool results are JSON strings built by the helpers.

pub mod helpers;
pub mod params;

pub use params::*;
