//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only assembles
//! them for the rmcp transports.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    AddTool, DivideTool, MultiplyTool, PowerTool, SquareRootTool, SubtractTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>() -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(AddTool::create_route())
        .with_route(SubtractTool::create_route())
        .with_route(MultiplyTool::create_route())
        .with_route(DivideTool::create_route())
        .with_route(PowerTool::create_route())
        .with_route(SquareRootTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;

    struct TestServer {}

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router();
        let tools = router.list_all();
        assert_eq!(tools.len(), 6);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"add"));
        assert!(names.contains(&"subtract"));
        assert!(names.contains(&"multiply"));
        assert!(names.contains(&"divide"));
        assert!(names.contains(&"power"));
        assert!(names.contains(&"square_root"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router expose the same catalog
        let registry = ToolRegistry::new();
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router();
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
