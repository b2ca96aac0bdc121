//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Every capability of this server is a tool: each eBird
//! endpoint is defined in `domains/tools/definitions/` and wired into the
//! ToolRouter in `domains/tools/router.rs`. Adding an endpoint does not
//! require modifying this file.

use std::sync::Arc;

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use tracing::info;

use super::config::Config;
use super::error::Result as CoreResult;
use crate::domains::tools::{ToolRegistry, build_tool_router};
use crate::ebird::EbirdClient;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp; tool listing and
/// dispatch are generated by the `#[tool_handler]` macro from the router.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Builds the shared eBird client and registers every tool route.
    /// Call this before entering the async runtime: the client is a
    /// blocking `reqwest` client.
    pub fn new(config: Config) -> CoreResult<Self> {
        let config = Arc::new(config);
        let client = Arc::new(EbirdClient::new(&config.ebird)?);

        info!(
            tools = ToolRegistry::tool_names().len(),
            base_url = %client.base_url(),
            "tool registry initialized"
        );

        Ok(Self {
            tool_router: build_tool_router::<Self>(client),
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes the eBird API as tools: recent, notable, nearby and \
                 historic bird observations, checklists and regional statistics, and \
                 taxonomy, region and hotspot reference data. A valid eBird API token \
                 must be configured via EBIRD_API_TOKEN."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_reports_config_identity() {
        let server = McpServer::new(Config::default()).unwrap();
        assert_eq!(server.name(), "ebird-mcp-server");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }
}
