use rmcp::{
    ErrorData,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use surrealdb::Connection;

use crate::SocialGraphMcp;

/// Payload listing the MCP commands this server exposes.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct HelpCommands {
    pub commands: Vec<String>,
    pub result_shape: String,
}

impl Default for HelpCommands {
    fn default() -> Self {
        Self {
            commands: vec![
                "help - List the MCP commands this server exposes.".to_string(),
                "health - Returns 'ok'.".to_string(),
                "get_user_friends - Users followed by `name`, with age and `since`."
                    .to_string(),
                "get_user_city - City that `name` lives in, with population.".to_string(),
                "get_city_residents - Users living in `city_name`, with age.".to_string(),
            ],
            result_shape: "Fields that may be empty are tagged objects: \
                {\"status\":\"found\",\"value\":...} or {\"status\":\"not_found\",\"message\":...}."
                .to_string(),
        }
    }
}

#[tool_router(router = tool_router_context, vis = "pub")]
impl<C: Connection> SocialGraphMcp<C> {
    #[tool(description = "List the MCP commands this server exposes and the result document shape.")]
    async fn help(&self) -> Result<CallToolResult, ErrorData> {
        Ok(CallToolResult::success(vec![Content::json(HelpCommands::default())?]))
    }
}
