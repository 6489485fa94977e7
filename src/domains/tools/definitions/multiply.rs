//! Multiplication tool definition.

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

/// Parameters for the multiplication tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MultiplyParams {
    /// First number.
    #[schemars(description = "First number")]
    pub x: f64,

    /// Second number.
    #[schemars(description = "Second number")]
    pub y: f64,
}

/// Multiplication tool - multiplies two numbers together.
pub struct MultiplyTool;

impl MultiplyTool {
    pub const NAME: &'static str = "multiply";
    pub const DESCRIPTION: &'static str = "Multiply two numbers together";

    /// Core arithmetic. Pure function of its inputs.
    pub fn apply(params: &MultiplyParams) -> Result<f64, ToolError> {
        Ok(params.x * params.y)
    }

    pub fn execute(params: &MultiplyParams) -> CallToolResult {
        match Self::apply(params) {
            Ok(result) => {
                info!("MULTIPLY: {} * {} = {}", params.x, params.y, result);
                CallToolResult::success(vec![Content::text(format_number(result))])
            }
            Err(e) => {
                info!("MULTIPLY: {} * {} failed: {}", params.x, params.y, e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Dispatch entry point used by the ToolRegistry.
    pub fn call(arguments: serde_json::Value) -> Result<f64, ToolError> {
        let params: MultiplyParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::apply(&params)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<MultiplyParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: MultiplyParams =
                    serde_json::from_value(serde_json::Value::Object(args))
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
    fn test_multiply_exact() {
        let params = MultiplyParams { x: 16.0, y: 16.0 };
        assert_eq!(MultiplyTool::apply(&params).unwrap(), 256.0);
    }

    #[test]
    fn test_multiply_by_zero() {
        let params = MultiplyParams { x: 123.45, y: 0.0 };
        assert_eq!(MultiplyTool::apply(&params).unwrap(), 0.0);
    }
}
