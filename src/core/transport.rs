//! Transport layer for the MCP server.
//!
//! The server communicates over STDIO, the standard MCP mode. The wire
//! framing is owned by the rmcp SDK; this module only manages the
//! connection lifecycle.

use rmcp::ServiceExt;
use thiserror::Error;
use tracing::info;

use super::server::McpServer;

/// Result type for transport operations.
pub type TransportResult<T> = std::result::Result<T, TransportError>;

/// Errors that can occur in transport operations.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Server initialization error.
    #[error("Server initialization error: {0}")]
    Init(String),

    /// Service error from rmcp.
    #[error("Service error: {0}")]
    Service(String),
}

/// Transport service - runs the MCP server over STDIO.
pub struct TransportService;

impl TransportService {
    /// Serve the given MCP server over stdin/stdout.
    ///
    /// Blocks until the client disconnects or the service shuts down.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!("Ready - communicating via stdin/stdout");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::Init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::Service(e.to_string()))?;

        info!("STDIO transport finished");
        Ok(())
    }
}
