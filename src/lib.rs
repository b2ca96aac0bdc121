//! eBird MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the eBird citizen-science API as a flat set of callable tools. Each
//! tool maps typed arguments onto one eBird REST endpoint and returns the
//! remote JSON unchanged.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler, and the
//!   STDIO transport
//! - **ebird**: The request dispatcher - one blocking HTTP client owning
//!   the base URL and API token
//! - **domains::tools**: One definition per eBird endpoint, plus the
//!   registry and router that wire them into rmcp

pub mod core;
pub mod domains;
pub mod ebird;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
pub use ebird::{EbirdClient, EbirdError, QueryParams};
