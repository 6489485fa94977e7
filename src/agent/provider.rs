//! The tool provider seam and the rmcp-backed client implementation.
//!
//! `ToolProvider` is the transport boundary: a reliable request/response
//! channel over which the catalog fetch and invocations are exchanged.
//! Connection-level failures surface as `AgentError::Connection`; failures
//! inside a tool come back as `ToolOutcome::Failure` and leave the session
//! usable.

use async_trait::async_trait;

use super::{AgentError, Invocation, ToolCatalog};

/// The result of one invocation, as surfaced to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    /// The tool produced a result; payload is its text rendering.
    Success(String),
    /// The tool reported a structured failure (kind + message rendered as text).
    Failure(String),
}

impl ToolOutcome {
    /// Whether this outcome is a failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The text payload, success or failure.
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Failure(text) => text,
        }
    }
}

/// A connected tool provider.
///
/// Implementations own one session against a provider process. All calls
/// within a session are made sequentially; implementations need no internal
/// locking.
#[async_trait]
pub trait ToolProvider: Send + Sync {
    /// Fetch the provider's tool catalog.
    async fn fetch_catalog(&self) -> Result<ToolCatalog, AgentError>;

    /// Invoke one operation and wait for its result.
    async fn call_tool(&self, invocation: &Invocation) -> Result<ToolOutcome, AgentError>;

    /// Release the connection. Safe to call once; later calls are no-ops.
    async fn close(&mut self) -> Result<(), AgentError>;
}

#[cfg(feature = "http")]
pub use http_client::McpToolProvider;

#[cfg(feature = "http")]
mod http_client {
    use rmcp::{
        RoleClient, ServiceExt,
        model::{
            CallToolRequestParam, ClientCapabilities, ClientInfo, Implementation, RawContent,
        },
        service::RunningService,
        transport::StreamableHttpClientTransport,
    };
    use tracing::{debug, info};

    use super::*;

    /// Tool provider backed by the rmcp streamable HTTP client.
    pub struct McpToolProvider {
        service: Option<RunningService<RoleClient, ClientInfo>>,
    }

    impl McpToolProvider {
        /// Connect to a provider's streamable HTTP endpoint.
        pub async fn connect(endpoint: &str) -> Result<Self, AgentError> {
            debug!("Connecting to tool provider at {}", endpoint);

            let transport = StreamableHttpClientTransport::from_uri(endpoint.to_string());
            let client_info = ClientInfo {
                protocol_version: Default::default(),
                capabilities: ClientCapabilities::default(),
                client_info: Implementation::from_build_env(),
            };

            let service = client_info
                .serve(transport)
                .await
                .map_err(|e| AgentError::connection(e.to_string()))?;

            info!("Connected to tool provider at {}", endpoint);
            Ok(Self {
                service: Some(service),
            })
        }
    }

    #[async_trait]
    impl ToolProvider for McpToolProvider {
        async fn fetch_catalog(&self) -> Result<ToolCatalog, AgentError> {
            let service = self.service.as_ref().ok_or(AgentError::Closed)?;

            let result = service
                .list_tools(Default::default())
                .await
                .map_err(|e| AgentError::connection(e.to_string()))?;

            Ok(ToolCatalog::new(result.tools))
        }

        async fn call_tool(&self, invocation: &Invocation) -> Result<ToolOutcome, AgentError> {
            let service = self.service.as_ref().ok_or(AgentError::Closed)?;

            let result = service
                .call_tool(CallToolRequestParam {
                    name: invocation.name.clone().into(),
                    arguments: Some(invocation.arguments.clone()),
                })
                .await
                .map_err(|e| AgentError::connection(e.to_string()))?;

            let text = result
                .content
                .iter()
                .filter_map(|c| match &c.raw {
                    RawContent::Text(t) => Some(t.text.as_str()),
                    _ => None,
                })
                .collect::<Vec<_>>()
                .join("\n");

            if result.is_error.unwrap_or(false) {
                Ok(ToolOutcome::Failure(text))
            } else {
                Ok(ToolOutcome::Success(text))
            }
        }

        async fn close(&mut self) -> Result<(), AgentError> {
            if let Some(service) = self.service.take() {
                service
                    .cancel()
                    .await
                    .map_err(|e| AgentError::connection(e.to_string()))?;
                info!("Tool provider connection released");
            }
            Ok(())
        }
    }
}
