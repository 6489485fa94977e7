//! MCP Calculator Library
//!
//! This crate provides both halves of a minimal MCP (Model Context Protocol)
//! tool integration: a server that exposes arithmetic operations as tools,
//! and an agent client that discovers those tools and dispatches natural
//! language requests against them.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the six calculator tools, their registry and router
//! - **agent**: the tool consumer - catalog binding, request resolution, and
//!   the session dispatch loop
//!
//! # Example
//!
//! ```rust,no_run
//! use calculator_mcp::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod agent;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use agent::{AgentError, AgentSession, Invocation, Reasoner, SessionState, ToolCatalog};
pub use core::{Config, Error, McpServer, Result};
