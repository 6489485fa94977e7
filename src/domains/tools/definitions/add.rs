//! Addition tool definition.
//!
//! Adds two numbers together and returns their sum.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::info;

use super::format_number;
use crate::domains::tools::ToolError;

/// Parameters for the addition tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddParams {
    /// First number.
    #[schemars(description = "First number")]
    pub x: f64,

    /// Second number.
    #[schemars(description = "Second number")]
    pub y: f64,
}

/// Addition tool - adds two numbers together.
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers together";

    /// Core arithmetic. Pure function of its inputs.
    pub fn apply(params: &AddParams) -> Result<f64, ToolError> {
        Ok(params.x + params.y)
    }

    /// Execute the tool, emit an audit log line, and map the outcome into a
    /// CallToolResult.
    pub fn execute(params: &AddParams) -> CallToolResult {
        match Self::apply(params) {
            Ok(result) => {
                info!("ADD: {} + {} = {}", params.x, params.y, result);
                CallToolResult::success(vec![Content::text(format_number(result))])
            }
            Err(e) => {
                info!("ADD: {} + {} failed: {}", params.x, params.y, e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Dispatch entry point used by the ToolRegistry.
    pub fn call(arguments: serde_json::Value) -> Result<f64, ToolError> {
        let params: AddParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::apply(&params)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AddParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the rmcp router.
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: AddParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_exact() {
        let params = AddParams { x: 125.0, y: 375.0 };
        assert_eq!(AddTool::apply(&params).unwrap(), 500.0);
    }

    #[test]
    fn test_add_negative() {
        let params = AddParams { x: -2.5, y: 1.0 };
        assert_eq!(AddTool::apply(&params).unwrap(), -1.5);
    }

    #[test]
    fn test_add_execute_formats_result() {
        let params = AddParams { x: 125.0, y: 375.0 };
        let result = AddTool::execute(&params);
        assert!(result.is_error.is_none() || !result.is_error.unwrap());

        let text = match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => &text.text,
            _ => panic!("Expected text content"),
        };
        assert_eq!(text, "500");
    }

    #[test]
    fn test_add_call_rejects_missing_argument() {
        let result = AddTool::call(serde_json::json!({ "x": 1.0 }));
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }
}
