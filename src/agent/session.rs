//! Session lifecycle and the dispatch loop.
//!
//! A session runs `Disconnected -> Connecting -> CatalogFetched -> Ready`,
//! then loops `Ready <-> Dispatching` per request, and ends at `Closed`.
//! Startup failures are fatal to the session; per-request failures are
//! surfaced and the session returns to `Ready`.

use tracing::{debug, info};

use super::provider::{ToolOutcome, ToolProvider};
use super::reasoning::Reasoner;
use super::{AgentError, Invocation, ToolCatalog};

/// The lifecycle states of an agent session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No connection to the provider.
    Disconnected,
    /// Opening the connection.
    Connecting,
    /// Connected; catalog received but not yet serving requests.
    CatalogFetched,
    /// Serving requests.
    Ready,
    /// A request is in flight.
    Dispatching,
    /// Terminal; the provider connection has been released.
    Closed,
}

/// One consumer's connected lifetime against a tool provider.
///
/// Invocations within a session are dispatched strictly sequentially; the
/// caller blocks on each result before the next is sent.
pub struct AgentSession {
    provider: Box<dyn ToolProvider>,
    reasoner: Box<dyn Reasoner>,
    catalog: ToolCatalog,
    state: SessionState,
}

impl AgentSession {
    /// Open a session: connect, fetch the catalog, and become `Ready`.
    ///
    /// Fails fast with `AgentError::Connection` if the provider is
    /// unreachable; there is no automatic retry.
    pub async fn connect(
        provider: Box<dyn ToolProvider>,
        reasoner: Box<dyn Reasoner>,
    ) -> Result<Self, AgentError> {
        debug!("Session state: {:?}", SessionState::Connecting);

        let catalog = provider.fetch_catalog().await?;
        debug!("Session state: {:?}", SessionState::CatalogFetched);

        info!("Connected. Available tools: {}", catalog.len());
        for tool in catalog.tools() {
            info!("  - {}: {}", tool.name, tool.description.as_deref().unwrap_or(""));
        }

        Ok(Self {
            provider,
            reasoner,
            catalog,
            state: SessionState::Ready,
        })
    }

    /// The catalog fetched at session start.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// The current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Resolve one free-form request, dispatch its invocations, and return
    /// the aggregated answer.
    ///
    /// Any failure is reported through the returned `Result` or inside the
    /// summary text; either way the session is `Ready` again afterwards.
    pub async fn dispatch(&mut self, request: &str) -> Result<String, AgentError> {
        if self.state == SessionState::Closed {
            return Err(AgentError::Closed);
        }

        self.state = SessionState::Dispatching;
        let result = self.dispatch_inner(request).await;
        self.state = SessionState::Ready;
        result
    }

    async fn dispatch_inner(&mut self, request: &str) -> Result<String, AgentError> {
        let resolution = self.reasoner.resolve(request, &self.catalog).await?;

        let mut outcomes: Vec<(Invocation, ToolOutcome)> =
            Vec::with_capacity(resolution.invocations.len());

        for invocation in resolution.invocations {
            self.catalog.validate(&invocation)?;
            debug!("Dispatching {}", invocation.describe());

            let outcome = self.provider.call_tool(&invocation).await?;
            if outcome.is_failure() {
                info!("{} failed: {}", invocation.describe(), outcome.text());
            }
            outcomes.push((invocation, outcome));
        }

        Ok(self.reasoner.summarize(request, &outcomes).await)
    }

    /// Close the session and release the provider connection.
    ///
    /// `Closed` is terminal: later dispatches fail with `AgentError::Closed`.
    /// Any half-delivered result on the wire is simply discarded; provider
    /// operations are stateless, so interruption cannot corrupt it.
    pub async fn close(&mut self) -> Result<(), AgentError> {
        if self.state == SessionState::Closed {
            return Ok(());
        }
        self.state = SessionState::Closed;
        self.provider.close().await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::agent::KeywordReasoner;
    use crate::domains::tools::ToolRegistry;

    /// Provider that runs the registry in-process, bypassing any transport.
    struct InProcessProvider {
        registry: ToolRegistry,
    }

    impl InProcessProvider {
        fn new() -> Self {
            Self {
                registry: ToolRegistry::new(),
            }
        }
    }

    #[async_trait]
    impl ToolProvider for InProcessProvider {
        async fn fetch_catalog(&self) -> Result<ToolCatalog, AgentError> {
            Ok(ToolCatalog::new(ToolRegistry::get_all_tools()))
        }

        async fn call_tool(&self, invocation: &Invocation) -> Result<ToolOutcome, AgentError> {
            let arguments = serde_json::Value::Object(invocation.arguments.clone());
            match self.registry.call_tool(&invocation.name, arguments) {
                Ok(value) => Ok(ToolOutcome::Success(if value.fract() == 0.0 {
                    format!("{}", value as i64)
                } else {
                    format!("{}", value)
                })),
                Err(e) => Ok(ToolOutcome::Failure(e.to_string())),
            }
        }

        async fn close(&mut self) -> Result<(), AgentError> {
            Ok(())
        }
    }

    /// Provider whose catalog fetch always fails.
    struct UnreachableProvider;

    #[async_trait]
    impl ToolProvider for UnreachableProvider {
        async fn fetch_catalog(&self) -> Result<ToolCatalog, AgentError> {
            Err(AgentError::connection("connection refused"))
        }

        async fn call_tool(&self, _invocation: &Invocation) -> Result<ToolOutcome, AgentError> {
            Err(AgentError::connection("connection refused"))
        }

        async fn close(&mut self) -> Result<(), AgentError> {
            Ok(())
        }
    }

    async fn test_session() -> AgentSession {
        AgentSession::connect(
            Box::new(InProcessProvider::new()),
            Box::new(KeywordReasoner::new()),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_connect_fetches_catalog_and_becomes_ready() {
        let session = test_session().await;
        assert_eq!(session.state(), SessionState::Ready);
        assert_eq!(session.catalog().len(), 6);
    }

    #[tokio::test]
    async fn test_connect_failure_is_fatal() {
        let result = AgentSession::connect(
            Box::new(UnreachableProvider),
            Box::new(KeywordReasoner::new()),
        )
        .await;
        assert!(matches!(result, Err(AgentError::Connection(_))));
    }

    #[tokio::test]
    async fn test_dispatch_addition_scenario() {
        let mut session = test_session().await;
        let answer = session.dispatch("What is 125 plus 375?").await.unwrap();
        assert!(answer.contains("500"));
        assert_eq!(session.state(), SessionState::Ready);
    }

    #[tokio::test]
    async fn test_dispatch_division_scenario() {
        let mut session = test_session().await;
        let answer = session.dispatch("What is 100 divided by 4?").await.unwrap();
        assert!(answer.contains("25"));
    }

    #[tokio::test]
    async fn test_dispatch_square_root_scenario() {
        let mut session = test_session().await;
        let answer = session
            .dispatch("What is the square root of 144?")
            .await
            .unwrap();
        assert!(answer.contains("12"));
    }

    #[tokio::test]
    async fn test_division_by_zero_is_surfaced_and_session_survives() {
        let mut session = test_session().await;

        let answer = session.dispatch("What is 10 divided by 0?").await.unwrap();
        assert!(answer.contains("Cannot divide by zero"));
        assert_eq!(session.state(), SessionState::Ready);

        // The next request still works
        let next = session.dispatch("What is 2 plus 2?").await.unwrap();
        assert!(next.contains("4"));
    }

    #[tokio::test]
    async fn test_resolution_failure_keeps_session_ready() {
        let mut session = test_session().await;
        let result = session.dispatch("Tell me a joke").await;
        assert!(matches!(result, Err(AgentError::Resolution(_))));
        assert_eq!(session.state(), SessionState::Ready);
    }

    #[tokio::test]
    async fn test_close_is_terminal() {
        let mut session = test_session().await;
        session.close().await.unwrap();
        assert_eq!(session.state(), SessionState::Closed);

        let result = session.dispatch("What is 1 plus 1?").await;
        assert!(matches!(result, Err(AgentError::Closed)));

        // Closing again is a no-op
        session.close().await.unwrap();
    }
}
