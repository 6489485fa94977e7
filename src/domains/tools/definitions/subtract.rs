//! Subtraction tool definition.

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

/// Parameters for the subtraction tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SubtractParams {
    /// Number to subtract from.
    #[schemars(description = "Number to subtract from")]
    pub x: f64,

    /// Number to subtract.
    #[schemars(description = "Number to subtract")]
    pub y: f64,
}

/// Subtraction tool - subtracts the second number from the first.
pub struct SubtractTool;

impl SubtractTool {
    pub const NAME: &'static str = "subtract";
    pub const DESCRIPTION: &'static str = "Subtract second number from first number";

    /// Core arithmetic. Pure function of its inputs.
    pub fn apply(params: &SubtractParams) -> Result<f64, ToolError> {
        Ok(params.x - params.y)
    }

    pub fn execute(params: &SubtractParams) -> CallToolResult {
        match Self::apply(params) {
            Ok(result) => {
                info!("SUBTRACT: {} - {} = {}", params.x, params.y, result);
                CallToolResult::success(vec![Content::text(format_number(result))])
            }
            Err(e) => {
                info!("SUBTRACT: {} - {} failed: {}", params.x, params.y, e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Dispatch entry point used by the ToolRegistry.
    pub fn call(arguments: serde_json::Value) -> Result<f64, ToolError> {
        let params: SubtractParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::apply(&params)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SubtractParams>(),
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
                let params: SubtractParams =
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
    fn test_subtract_exact() {
        let params = SubtractParams {
            x: 1000.0,
            y: 246.0,
        };
        assert_eq!(SubtractTool::apply(&params).unwrap(), 754.0);
    }

    #[test]
    fn test_subtract_below_zero() {
        let params = SubtractParams { x: 3.0, y: 10.0 };
        assert_eq!(SubtractTool::apply(&params).unwrap(), -7.0);
    }
}
