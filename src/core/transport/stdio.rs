//! STDIO transport implementation.
//!
//! Serves the calculator over stdin/stdout, the standard way an MCP host
//! launches a tool provider as a child process. Logs go to stderr so they
//! never interleave with protocol frames.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::McpServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve the calculator on stdin/stdout until the host closes the pipe.
    pub async fn run(server: McpServer) -> TransportResult<()> {
        info!(
            "{} serving calculator tools on stdin/stdout",
            server.name()
        );

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::ServiceError(e.to_string()))?;

        info!("Calculator stdio session ended");
        Ok(())
    }
}
