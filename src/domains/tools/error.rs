//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur during tool operations.
///
/// Every variant is recoverable: the provider converts these into structured
/// tool failures instead of terminating.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Division with a zero denominator.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// An argument value is outside the operation's domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The computation produced a non-finite result (overflow, NaN).
    #[error("Result is not a finite number: {0}")]
    NonFinite(String),

    /// The requested tool was not found.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// The argument payload did not match the tool's parameter schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    /// Create a new "invalid argument" error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a new "non-finite result" error.
    pub fn non_finite(msg: impl Into<String>) -> Self {
        Self::NonFinite(msg.into())
    }

    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
