//! Power tool definition.
//!
//! Raises a base to an exponent. Overflow and undefined combinations
//! (negative base with fractional exponent) produce non-finite values in
//! IEEE arithmetic; those are rejected as structured failures instead of
//! leaking an infinity or NaN to the caller.

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

/// Parameters for the power tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PowerParams {
    /// The base number.
    #[schemars(description = "The base number")]
    pub base: f64,

    /// The exponent.
    #[schemars(description = "The exponent")]
    pub exponent: f64,
}

/// Power tool - raises a base to an exponent.
pub struct PowerTool;

impl PowerTool {
    pub const NAME: &'static str = "power";
    pub const DESCRIPTION: &'static str = "Calculate power of a number";

    /// Core arithmetic. Fails with `NonFinite` when the result overflows or
    /// is undefined.
    pub fn apply(params: &PowerParams) -> Result<f64, ToolError> {
        let result = params.base.powf(params.exponent);
        if !result.is_finite() {
            return Err(ToolError::non_finite(format!(
                "{}^{} does not produce a finite number",
                params.base, params.exponent
            )));
        }
        Ok(result)
    }

    pub fn execute(params: &PowerParams) -> CallToolResult {
        match Self::apply(params) {
            Ok(result) => {
                info!("POWER: {}^{} = {}", params.base, params.exponent, result);
                CallToolResult::success(vec![Content::text(format_number(result))])
            }
            Err(e) => {
                warn!("POWER: {}^{} failed: {}", params.base, params.exponent, e);
                CallToolResult::error(vec![Content::text(e.to_string())])
            }
        }
    }

    /// Dispatch entry point used by the ToolRegistry.
    pub fn call(arguments: serde_json::Value) -> Result<f64, ToolError> {
        let params: PowerParams = serde_json::from_value(arguments)
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))?;
        Self::apply(&params)
    }

    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<PowerParams>(),
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
                let params: PowerParams = serde_json::from_value(serde_json::Value::Object(args))
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
    fn test_power_exact() {
        let params = PowerParams {
            base: 2.0,
            exponent: 10.0,
        };
        assert_eq!(PowerTool::apply(&params).unwrap(), 1024.0);
    }

    #[test]
    fn test_power_fractional_exponent() {
        let params = PowerParams {
            base: 9.0,
            exponent: 0.5,
        };
        assert!((PowerTool::apply(&params).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_power_overflow_is_failure() {
        let params = PowerParams {
            base: 10.0,
            exponent: 10_000.0,
        };
        assert!(matches!(
            PowerTool::apply(&params),
            Err(ToolError::NonFinite(_))
        ));
    }

    #[test]
    fn test_power_negative_base_fractional_exponent_is_failure() {
        // (-8)^0.5 is NaN in IEEE arithmetic
        let params = PowerParams {
            base: -8.0,
            exponent: 0.5,
        };
        assert!(matches!(
            PowerTool::apply(&params),
            Err(ToolError::NonFinite(_))
        ));
    }
}
