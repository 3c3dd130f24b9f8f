use social_core::store::StoreError;
use surrealdb::Surreal;
use surrealdb::engine::any::{self, Any};
use tracing::info;

use crate::config::GraphConfig;

/// Opens the configured store and selects its namespace and database.
pub async fn connect(config: &GraphConfig) -> Result<Surreal<Any>, StoreError> {
    let db = any::connect(config.db_uri.as_str()).await?;
    db.use_ns(config.db_namespace.as_str())
        .use_db(config.db_name.as_str())
        .await?;
    info!(
        uri = %config.db_uri,
        namespace = %config.db_namespace,
        database = %config.db_name,
        "graph store opened"
    );
    Ok(db)
}
