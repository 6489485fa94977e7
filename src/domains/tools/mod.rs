//! Tools domain module.
//!
//! This module holds the calculator tools exposed over MCP. Tools are pure
//! functions of their arguments: they keep no state between calls and a
//! failing invocation never affects subsequent ones.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder for the rmcp transports
//! - `registry.rs` - The closed operation set and name-based dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` (e.g., `my_tool.rs`)
//! 2. Define params, `apply()`, and `execute()`
//! 3. Export in `definitions/mod.rs`
//! 4. Add a variant to `Operation` in `registry.rs`
//! 5. Add a route in `router.rs` using `with_route()`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::{Operation, ToolRegistry};
pub use router::build_tool_router;
