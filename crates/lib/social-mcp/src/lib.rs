//! MCP server implementation for social-graph-mcp.
//!
//! This crate wires the graph control plane into rmcp tool handlers and
//! exposes the read-only query surface over stdio or streamable HTTP.

mod helpers;
mod tools;
pub mod server;

use social_core::control::GraphControlPlane;
use rmcp::{
    ErrorData,
    ServerHandler,
    handler::server::tool::ToolRouter,
    tool,
    tool_handler,
    tool_router,
};
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use surrealdb::Connection;

const SERVER_NAME: &str = "social-graph";

const SERVER_INSTRUCTIONS: &str = r"social-graph-mcp answers read-only questions about a small social graph of users and cities.

Tools:
- `get_user_friends` (name): users the named user follows, with age and the year the follow started.
- `get_user_city` (name): the city the named user lives in, with its population.
- `get_city_residents` (city_name): users living in the named city, with their ages.

Notes:
- Names are exact, case-sensitive primary keys.
- Every result field that may be empty is tagged: `{ status: found, value }` or
  `{ status: not_found, message }`. An unknown name is reported as `not_found`, not as an error.
- `help` lists the tools. `health` returns `ok`.";

/// MCP server wrapper around the graph control plane and tool routers.
pub struct SocialGraphMcp<C: Connection> {
    tool_router: ToolRouter<Self>,
    control: GraphControlPlane<C>,
}

impl<C: Connection> SocialGraphMcp<C> {
    /// Creates a new server over a bootstrapped control plane.
    #[must_use]
    pub fn new(control: GraphControlPlane<C>) -> Self {
        let tool_router = Self::tool_router_core()
            + Self::tool_router_graph()
            + Self::tool_router_context();
        Self {
            tool_router,
            control,
        }
    }

    pub(crate) const fn control(&self) -> &GraphControlPlane<C> {
        &self.control
    }
}

#[tool_router(router = tool_router_core, vis = "pub")]
impl<C: Connection> SocialGraphMcp<C> {
    #[tool(description = "Health check. Returns 'ok'.")]
    async fn health(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::text("ok")]))
    }
}

#[tool_handler]
impl<C: Connection> ServerHandler for SocialGraphMcp<C> {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(SERVER_INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }
}
