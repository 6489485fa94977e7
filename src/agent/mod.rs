//! Agent module - the tool consumer side.
//!
//! This module implements the discovery/invocation contract from the client
//! side: open a session against a tool provider, fetch its catalog, resolve
//! free-form requests into invocations through a pluggable reasoner, dispatch
//! them sequentially, and aggregate the results.
//!
//! ## Architecture
//!
//! - `catalog.rs` - Catalog snapshot and invocation validation
//! - `provider.rs` - The `ToolProvider` seam and the rmcp-backed client
//! - `reasoning.rs` - The `Reasoner` seam and a deterministic keyword reasoner
//! - `session.rs` - Session lifecycle and the dispatch loop
//! - `error.rs` - Agent-specific error types
//!
//! The reasoning component is a black box to the session: anything that can
//! turn a request string plus a catalog into an ordered list of invocations
//! (a language model, a rules engine) plugs in behind the `Reasoner` trait.

mod catalog;
mod error;
mod provider;
mod reasoning;
mod session;

pub use catalog::{Invocation, ToolCatalog};
pub use error::AgentError;
pub use provider::{ToolOutcome, ToolProvider};
pub use reasoning::{KeywordReasoner, Reasoner, Resolution};
pub use session::{AgentSession, SessionState};

#[cfg(feature = "http")]
pub use provider::McpToolProvider;
