//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Every tool wraps exactly one eBird API endpoint.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations, grouped by API area
//! - `router.rs` - Dynamic ToolRouter builder
//! - `registry.rs` - Central tool enumeration
//!
//! ## Adding a New Tool
//!
//! 1. Add a params struct with `endpoint()`/`query()` and a tool struct
//!    in the matching `definitions/` file
//! 2. Export it in `definitions/mod.rs`
//! 3. Add a route in `router.rs` using `with_route()`
//! 4. Add the name in `registry.rs`

pub mod definitions;
mod registry;
pub mod router;

pub use registry::ToolRegistry;
pub use router::build_tool_router;
