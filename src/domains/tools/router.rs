//! Tool Router - builds the rmcp ToolRouter from the tool catalog.
//!
//! Every route forwards to the shared [`ToolRegistry`], so the router adds
//! no behavior of its own beyond translating the error type.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
};

use super::{ToolKind, ToolRegistry};

/// Build the route for one tool.
fn create_route<S>(kind: ToolKind, registry: Arc<ToolRegistry>) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(kind.to_tool(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let registry = registry.clone();
        async move {
            registry
                .call_tool(kind.name(), serde_json::Value::Object(args))
                .await
                .map_err(|e| McpError::internal_error(e.to_string(), None))
        }
        .boxed()
    })
}

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(registry: Arc<ToolRegistry>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolKind::ALL
        .into_iter()
        .fold(ToolRouter::new(), |router, kind| {
            router.with_route(create_route(kind, registry.clone()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CatalogConfig;
    use crate::domains::catalog::MelodiesClient;

    struct TestServer {}

    fn test_registry() -> Arc<ToolRegistry> {
        let client = MelodiesClient::new(&CatalogConfig::default()).unwrap();
        Arc::new(ToolRegistry::new(client))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let tools = router.list_all();
        assert_eq!(tools.len(), 17);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"configure_server"));
        assert!(names.contains(&"search_tracks"));
        assert!(names.contains(&"get_track_download_url"));
        assert!(names.contains(&"get_cue_sheet_info"));
    }

    #[test]
    fn test_registry_matches_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_registry());
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        let registry_names = ToolRegistry::tool_names();
        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }
}
