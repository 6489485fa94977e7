//! Catalog snapshot and invocation validation.
//!
//! The catalog is fetched once at session start and does not change within a
//! session. Every invocation is checked against it before dispatch: the
//! operation name must be present and the arguments must satisfy the
//! parameter schema's required list and numeric types.

use rmcp::model::Tool;
use serde_json::Value;

use super::AgentError;

/// A single invocation request: an operation name plus a JSON argument map.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    /// The operation name, as listed in the catalog.
    pub name: String,

    /// Argument mapping (parameter name to value).
    pub arguments: serde_json::Map<String, Value>,
}

impl Invocation {
    /// Create a new invocation with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: serde_json::Map::new(),
        }
    }

    /// Add a numeric argument.
    pub fn with_number(mut self, key: &str, value: f64) -> Self {
        self.arguments.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Render the invocation for logs and summaries, e.g. `add(x=125, y=375)`.
    pub fn describe(&self) -> String {
        let args = self
            .arguments
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({})", self.name, args)
    }
}

/// A snapshot of the tool descriptors a provider exposed at discovery time.
#[derive(Debug, Clone, Default)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Create a catalog from a list of tool descriptors.
    pub fn new(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// All tool descriptors, in the order the provider listed them.
    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    /// Look up a tool descriptor by name.
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    /// Whether a tool with the given name is in the catalog.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Validate an invocation against the catalog before dispatch.
    ///
    /// Checks that the operation name is listed, that every required
    /// parameter is supplied, that no unknown parameter is passed, and that
    /// every argument value is a number.
    pub fn validate(&self, invocation: &Invocation) -> Result<(), AgentError> {
        let tool = self.get(&invocation.name).ok_or_else(|| {
            AgentError::invalid(format!("operation '{}' is not in the catalog", invocation.name))
        })?;

        let schema = tool.input_schema.as_ref();

        if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
            for param in required.iter().filter_map(|v| v.as_str()) {
                if !invocation.arguments.contains_key(param) {
                    return Err(AgentError::invalid(format!(
                        "missing required parameter '{}' for '{}'",
                        param, invocation.name
                    )));
                }
            }
        }

        let properties = schema.get("properties").and_then(|v| v.as_object());
        for (key, value) in &invocation.arguments {
            let known = properties.is_some_and(|props| props.contains_key(key));
            if !known {
                return Err(AgentError::invalid(format!(
                    "unknown parameter '{}' for '{}'",
                    key, invocation.name
                )));
            }
            if !value.is_number() {
                return Err(AgentError::invalid(format!(
                    "parameter '{}' of '{}' must be a number, got {}",
                    key, invocation.name, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ToolRegistry;

    fn catalog() -> ToolCatalog {
        ToolCatalog::new(ToolRegistry::get_all_tools())
    }

    #[test]
    fn test_catalog_lists_six_operations() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 6);
        assert!(catalog.contains("add"));
        assert!(catalog.contains("square_root"));
        assert!(!catalog.contains("modulo"));
    }

    #[test]
    fn test_validate_accepts_well_formed_invocation() {
        let catalog = catalog();
        let invocation = Invocation::new("add")
            .with_number("x", 125.0)
            .with_number("y", 375.0);
        assert!(catalog.validate(&invocation).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_operation() {
        let catalog = catalog();
        let invocation = Invocation::new("modulo").with_number("x", 1.0);
        assert!(matches!(
            catalog.validate(&invocation),
            Err(AgentError::Invalid(_))
        ));
    }

    #[test]
    fn test_validate_rejects_missing_required_parameter() {
        let catalog = catalog();
        let invocation = Invocation::new("divide").with_number("x", 1.0);
        assert!(matches!(
            catalog.validate(&invocation),
            Err(AgentError::Invalid(_))
        ));
    }

    #[test]
    fn test_validate_rejects_unknown_parameter() {
        let catalog = catalog();
        let invocation = Invocation::new("square_root")
            .with_number("x", 4.0)
            .with_number("z", 1.0);
        assert!(matches!(
            catalog.validate(&invocation),
            Err(AgentError::Invalid(_))
        ));
    }

    #[test]
    fn test_validate_rejects_non_numeric_argument() {
        let catalog = catalog();
        let mut invocation = Invocation::new("add").with_number("x", 1.0);
        invocation
            .arguments
            .insert("y".to_string(), serde_json::json!("two"));
        assert!(matches!(
            catalog.validate(&invocation),
            Err(AgentError::Invalid(_))
        ));
    }

    #[test]
    fn test_describe() {
        let invocation = Invocation::new("add")
            .with_number("x", 125.0)
            .with_number("y", 375.0);
        assert_eq!(invocation.describe(), "add(x=125.0, y=375.0)");
    }
}
