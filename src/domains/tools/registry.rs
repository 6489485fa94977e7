//! Tool registry - the closed operation set and name-based dispatch.
//!
//! This module provides:
//! - The `Operation` enum: one variant per calculator tool, so dispatch is
//!   checked exhaustively at compile time
//! - The `ToolRegistry`: catalog metadata and argument-to-result dispatch

use rmcp::model::Tool;
use tracing::warn;

use super::ToolError;
use super::definitions::{
    AddTool, DivideTool, MultiplyTool, PowerTool, SquareRootTool, SubtractTool,
};

// ============================================================================
// Operation set
// ============================================================================

/// The closed set of operations this provider exposes.
///
/// Adding a tool means adding a variant here; the compiler then points at
/// every match that needs extending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    SquareRoot,
}

impl Operation {
    /// All operations, in catalog order.
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::SquareRoot,
    ];

    /// Look up an operation by its registered tool name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            AddTool::NAME => Some(Self::Add),
            SubtractTool::NAME => Some(Self::Subtract),
            MultiplyTool::NAME => Some(Self::Multiply),
            DivideTool::NAME => Some(Self::Divide),
            PowerTool::NAME => Some(Self::Power),
            SquareRootTool::NAME => Some(Self::SquareRoot),
            _ => None,
        }
    }

    /// The tool name this operation is registered under.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => AddTool::NAME,
            Self::Subtract => SubtractTool::NAME,
            Self::Multiply => MultiplyTool::NAME,
            Self::Divide => DivideTool::NAME,
            Self::Power => PowerTool::NAME,
            Self::SquareRoot => SquareRootTool::NAME,
        }
    }

    /// The operation's descriptor (name, description, parameter schema).
    pub fn to_tool(&self) -> Tool {
        match self {
            Self::Add => AddTool::to_tool(),
            Self::Subtract => SubtractTool::to_tool(),
            Self::Multiply => MultiplyTool::to_tool(),
            Self::Divide => DivideTool::to_tool(),
            Self::Power => PowerTool::to_tool(),
            Self::SquareRoot => SquareRootTool::to_tool(),
        }
    }

    /// Execute the operation against a JSON argument object.
    pub fn call(&self, arguments: serde_json::Value) -> Result<f64, ToolError> {
        match self {
            Self::Add => AddTool::call(arguments),
            Self::Subtract => SubtractTool::call(arguments),
            Self::Multiply => MultiplyTool::call(arguments),
            Self::Divide => DivideTool::call(arguments),
            Self::Power => PowerTool::call(arguments),
            Self::SquareRoot => SquareRootTool::call(arguments),
        }
    }
}

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing the catalog of tool descriptors
/// - Dispatching a named invocation to its operation
#[derive(Debug, Default, Clone)]
pub struct ToolRegistry;

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        Operation::ALL.iter().map(|op| op.name()).collect()
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the catalog; the rmcp router
    /// is built from the same per-tool descriptors.
    pub fn get_all_tools() -> Vec<Tool> {
        Operation::ALL.iter().map(|op| op.to_tool()).collect()
    }

    /// Dispatch an invocation to the named operation.
    pub fn call_tool(&self, name: &str, arguments: serde_json::Value) -> Result<f64, ToolError> {
        let Some(operation) = Operation::from_name(name) else {
            warn!("Unknown tool requested: {}", name);
            return Err(ToolError::not_found(name));
        };
        operation.call(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new();
        let names = registry.tool_names();
        assert_eq!(names.len(), 6);
        assert_eq!(
            names,
            vec![
                "add",
                "subtract",
                "multiply",
                "divide",
                "power",
                "square_root"
            ]
        );
    }

    #[test]
    fn test_catalog_descriptors_are_complete() {
        for tool in ToolRegistry::get_all_tools() {
            let description = tool.description.as_deref().unwrap_or_default();
            assert!(
                !description.is_empty(),
                "tool {} has an empty description",
                tool.name
            );
            let required = tool
                .input_schema
                .get("required")
                .and_then(|v| v.as_array())
                .map(|a| a.len())
                .unwrap_or(0);
            let expected = if tool.name == "square_root" { 1 } else { 2 };
            assert_eq!(required, expected, "wrong arity for {}", tool.name);
        }
    }

    #[test]
    fn test_registry_dispatch() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("add", json!({ "x": 125.0, "y": 375.0 }));
        assert_eq!(result.unwrap(), 500.0);
    }

    #[test]
    fn test_registry_dispatch_unknown_tool() {
        let registry = ToolRegistry::new();
        let result = registry.call_tool("modulo", json!({}));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }

    #[test]
    fn test_registry_dispatch_failure_is_recoverable() {
        let registry = ToolRegistry::new();

        let failed = registry.call_tool("divide", json!({ "x": 1.0, "y": 0.0 }));
        assert!(matches!(failed, Err(ToolError::DivisionByZero)));

        // A failing invocation must not affect subsequent ones
        let next = registry.call_tool("divide", json!({ "x": 100.0, "y": 4.0 }));
        assert_eq!(next.unwrap(), 25.0);
    }

    #[test]
    fn test_registry_dispatch_is_idempotent() {
        let registry = ToolRegistry::new();
        let args = json!({ "base": 2.0, "exponent": 8.0 });
        let first = registry.call_tool("power", args.clone()).unwrap();
        let second = registry.call_tool("power", args).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, 256.0);
    }

    #[test]
    fn test_operation_round_trips_names() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_name(op.name()), Some(op));
        }
        assert_eq!(Operation::from_name("unknown"), None);
    }
}
