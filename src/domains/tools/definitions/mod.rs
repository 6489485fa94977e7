//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod power;
pub mod square_root;
pub mod subtract;

pub use add::{AddParams, AddTool};
pub use divide::{DivideParams, DivideTool};
pub use multiply::{MultiplyParams, MultiplyTool};
pub use power::{PowerParams, PowerTool};
pub use square_root::{SquareRootParams, SquareRootTool};
pub use subtract::{SubtractParams, SubtractTool};

/// Format a numeric result for text output.
///
/// Integral values are printed without a fractional part so that
/// `add(125, 375)` reads as `500` rather than `500.0`.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_integral() {
        assert_eq!(format_number(500.0), "500");
        assert_eq!(format_number(-3.0), "-3");
        assert_eq!(format_number(0.0), "0");
    }

    #[test]
    fn test_format_number_fractional() {
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(-0.125), "-0.125");
    }

    #[test]
    fn test_format_number_large() {
        // Beyond the i64-safe cutoff, fall back to float formatting
        assert_eq!(format_number(1e300), format!("{}", 1e300_f64));
    }
}
