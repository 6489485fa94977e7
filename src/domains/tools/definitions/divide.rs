//! Division tool definition.
//!
//! Divides the first number by the second. A zero denominator is rejected
//! with a structured failure rather than producing an infinity.

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

/// Parameters for the division tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DivideParams {
    /// Numerator.
    #[schemars(description = "Numerator")]
    pub x: f64,

    /// Denominator.
    #[schemars(description = "Denominator")]
    pub y: f64,
}

/// Division tool - divides the first number by the second.
pub struct DivideTool;

impl DivideTool {
    pub const NAME: &'static str = "divide";
    pub const DESCRIPTION: &'static str = "Divide first number by second number";

    /// Core arithmetic. Fails with `DivisionByZero` when the denominator is zero.
    pub fn apply(params: &DivideParams) -> Result<f64, ToolError> {
        if params.y == 0.0 {
            return Err(ToolError::DivisionByZero);
        }
        Ok(params.x / params.y)
    }

    pub fn execute(params: &DivideParams) -> CallToolResult {
        match Self::apply(params) {
            Ok(result) => {
                info!("DIVIDE: {} / {} = {}", params.x, params.y, result);
                CallToolResult::success(vec![Content::text(format_number(result))])
            }
            Err(e) => {
                warn!("DIVIDE: {} / {} failed: {}", params.x, params.y, e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Dispatch entry point used by the ToolRegistry.
    pub fn call(arguments: serde_json::Value) -> Result<f64, ToolError> {
        let params: DivideParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::apply(&params)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DivideParams>(),
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
                let params: DivideParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&params))
            }
            .boxed()
        })
    }
}
