//! Agent-specific error types.

use thiserror::Error;

/// Errors that can occur on the consumer side of a tool session.
///
/// Only `Connection` at session startup is fatal; everything else is
/// surfaced to the user and the session keeps serving requests.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The provider is unreachable or the catalog fetch failed.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The reasoning component could not map the request to any invocation.
    #[error("Could not resolve request: {0}")]
    Resolution(String),

    /// An invocation did not satisfy the catalog's parameter schema.
    #[error("Invalid invocation: {0}")]
    Invalid(String),

    /// The session has been closed.
    #[error("Session is closed")]
    Closed,
}

impl AgentError {
    /// Create a new connection error.
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Create a new resolution error.
    pub fn resolution(msg: impl Into<String>) -> Self {
        Self::Resolution(msg.into())
    }

    /// Create a new invalid-invocation error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::Invalid(msg.into())
    }
}
