//! Square root tool definition.
//!
//! Negative inputs are rejected with a structured failure.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{info, warn};

use super::format_number;
use crate::domains::tools::ToolError;

/// Parameters for the square root tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SquareRootParams {
    /// Number to take the square root of.
    #[schemars(description = "Number to find square root of")]
    pub x: f64,
}

/// Square root tool - computes the square root of a non-negative number.
pub struct SquareRootTool;

impl SquareRootTool {
    pub const NAME: &'static str = "square_root";
    pub const DESCRIPTION: &'static str = "Calculate square root of a number";

    /// Core arithmetic. Fails with `InvalidArgument` for negative inputs.
    pub fn apply(params: &SquareRootParams) -> Result<f64, ToolError> {
        if params.x < 0.0 {
            return Err(ToolError::invalid_argument(
                "Cannot calculate square root of a negative number",
            ));
        }
        Ok(params.x.sqrt())
    }

    pub fn execute(params: &SquareRootParams) -> CallToolResult {
        match Self::apply(params) {
            Ok(result) => {
                info!("SQRT: sqrt({}) = {}", params.x, result);
                CallToolResult::success(vec![Content::text(format_number(result))])
            }
            Err(e) => {
                warn!("SQRT: sqrt({}) failed: {}", params.x, e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Dispatch entry point used by the ToolRegistry.
    pub fn call(arguments: serde_json::Value) -> Result<f64, ToolError> {
        let params: SquareRootParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::apply(&params)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SquareRootParams>(),
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
                let params: SquareRootParams =
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
    fn test_square_root_exact() {
        let params = SquareRootParams { x: 144.0 };
        assert_eq!(SquareRootTool::apply(&params).unwrap(), 12.0);
    }

    #[test]
    fn test_square_root_within_tolerance() {
        let params = SquareRootParams { x: 2.0 };
        let v = SquareRootTool::apply(&params).unwrap();
        assert!((v * v - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_square_root_of_zero() {
        let params = SquareRootParams { x: 0.0 };
        assert_eq!(SquareRootTool::apply(&params).unwrap(), 0.0);
    }

    #[test]
    fn test_square_root_negative_is_failure() {
        let params = SquareRootParams { x: -4.0 };
        assert!(matches!(
            SquareRootTool::apply(&params),
            Err(ToolError::InvalidArgument(_))
        ));
    }
}
