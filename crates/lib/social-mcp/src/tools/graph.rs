use rmcp::{
    ErrorData,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    schemars,
    tool,
    tool_router,
};
use serde::{Deserialize, Serialize};
use surrealdb::Connection;

use crate::{SocialGraphMcp, helpers};

/// Parameters for user-keyed lookups.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct UserNameParams {
    /// Exact user name.
    pub name: String,
}

/// Parameters for city-keyed lookups.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CityNameParams {
    /// Exact city name.
    pub city_name: String,
}

#[tool_router(router = tool_router_graph, vis = "pub")]
impl<C: Connection> SocialGraphMcp<C> {
    #[tool(description = "List the users a user follows, with each friend's age and the year the follow started.")]
    async fn get_user_friends(
        &self,
        Parameters(params): Parameters<UserNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let friends = self
            .control()
            .get_user_friends(&params.name)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(friends)?]))
    }

    #[tool(description = "Fetch the city a user lives in, with its population.")]
    async fn get_user_city(
        &self,
        Parameters(params): Parameters<UserNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let city = self
            .control()
            .get_user_city(&params.name)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(city)?]))
    }

    #[tool(description = "List the users living in a city, with their ages.")]
    async fn get_city_residents(
        &self,
        Parameters(params): Parameters<CityNameParams>,
    ) -> Result<CallToolResult, ErrorData> {
        let residents = self
            .control()
            .get_city_residents(&params.city_name)
            .await
            .map_err(helpers::map_err)?;
        Ok(CallToolResult::success(vec![Content::json(residents)?]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use social_core::control::GraphControlPlane;
    use social_core::parsers::SeedSet;
    use social_store::models::{City, LivesIn, User};
    use surrealdb::Surreal;
    use surrealdb::engine::local::{Db, Mem};

    async fn build_server() -> SocialGraphMcp<Db> {
        let db = Surreal::new::<Mem>(()).await.expect("in-memory surrealdb");
        db.use_ns("social").use_db("tools").await.expect("select ns/db");
        let control = GraphControlPlane::new(db);
        control.ensure_schema().await.expect("schema");
        let seed = SeedSet {
            users: vec![User {
                name: "U".to_string(),
                age: 35,
            }],
            cities: vec![City {
                name: "Metropolis".to_string(),
                population: 1000,
            }],
            follows: Vec::new(),
            lives_in: vec![LivesIn {
                user_name: "U".to_string(),
                city_name: "Metropolis".to_string(),
            }],
        };
        control.ensure_seed(&seed).await.expect("seed");
        SocialGraphMcp::new(control)
    }

    fn json_body(result: &CallToolResult) -> Value {
        let text = result
            .content
            .first()
            .and_then(|content| content.raw.as_text())
            .map(|text| text.text.clone())
            .expect("tool result should carry text content");
        serde_json::from_str(&text).expect("tool result should be JSON")
    }

    #[tokio::test]
    async fn user_city_tool_returns_document() {
        let server = build_server().await;
        let result = server
            .get_user_city(Parameters(UserNameParams {
                name: "U".to_string(),
            }))
            .await
            .expect("tool should succeed");

        assert_eq!(
            json_body(&result),
            json!({
                "user": "U",
                "city": {
                    "status": "found",
                    "value": { "name": "Metropolis", "population": 1000 }
                }
            })
        );
    }

    #[tokio::test]
    async fn friends_tool_reports_not_found() {
        let server = build_server().await;
        let result = server
            .get_user_friends(Parameters(UserNameParams {
                name: "U".to_string(),
            }))
            .await
            .expect("empty result is not an error");

        let body = json_body(&result);
        assert_eq!(body["user"], "U");
        assert_eq!(body["friends"]["status"], "not_found");
        assert_eq!(body["friends"]["message"], "no friends found");
    }

    #[tokio::test]
    async fn residents_tool_lists_residents() {
        let server = build_server().await;
        let result = server
            .get_city_residents(Parameters(CityNameParams {
                city_name: "Metropolis".to_string(),
            }))
            .await
            .expect("tool should succeed");

        let body = json_body(&result);
        assert_eq!(body["city"], "Metropolis");
        assert_eq!(
            body["residents"]["value"],
            json!([{ "name": "U", "age": 35 }])
        );
    }
}
