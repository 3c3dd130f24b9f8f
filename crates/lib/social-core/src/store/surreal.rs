use std::{error::Error, fmt, sync::Arc};

use social_store::models::{City, Friend, Resident};
use social_store::schema::{SCHEMA_DEFINITION, SeedTable, TABLE_USER};
use surrealdb::method::Query;
use surrealdb::{Connection, Surreal};
use tracing::debug;

use crate::parsers::SeedSet;

// Match on the endpoint `name` field; record ids reject an empty key.
const FRIENDS_QUERY: &str =
    "SELECT out.name AS name, out.age AS age, since FROM follows WHERE in.name = $name;";
const CITY_QUERY: &str = "SELECT out.name AS name, out.population AS population FROM lives_in WHERE in.name = $name LIMIT 1;";
const RESIDENTS_QUERY: &str =
    "SELECT in.name AS name, in.age AS age FROM lives_in WHERE out.name = $city_name;";
const COUNT_QUERY: &str = "SELECT count() AS count FROM type::table($table) GROUP ALL;";

#[derive(Debug)]
pub enum StoreError {
    Surreal(Box<surrealdb::Error>),
    InvalidInput(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surreal(err) => write!(f, "SurrealDB error: {err}"),
            Self::InvalidInput(message) => write!(f, "Invalid input: {message}"),
        }
    }
}

impl Error for StoreError {}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        Self::Surreal(Box::new(err))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Graph store over a `SurrealDB` connection.
///
/// Clones share the same connection.
pub struct SurrealGraphStore<C: Connection> {
    db: Arc<Surreal<C>>,
}

impl<C: Connection> Clone for SurrealGraphStore<C> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
        }
    }
}

impl<C: Connection> SurrealGraphStore<C> {
    #[must_use]
    pub fn new(db: Surreal<C>) -> Self {
        Self {
            db: Arc::new(db),
        }
    }

    /// Declares the node and relationship tables if they are absent.
    ///
    /// # Errors
    /// Returns `StoreError` if any declaration fails.
    pub async fn define_schema(&self) -> StoreResult<()> {
        self.db.query(SCHEMA_DEFINITION).await?.check()?;
        Ok(())
    }

    /// Counts records in a node or relationship table.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn count(&self, table: &str) -> StoreResult<usize> {
        let mut response = self
            .db
            .query(COUNT_QUERY)
            .bind(("table", table.to_string()))
            .await?;
        let row: Option<CountRow> = response.take(0)?;
        let count = row.map_or(0, |row| row.count);
        usize::try_from(count)
            .map_err(|_| StoreError::InvalidInput(format!("invalid count for {table}: {count}")))
    }

    /// Counts user nodes.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn count_users(&self) -> StoreResult<usize> {
        self.count(TABLE_USER).await
    }

    /// Loads a single table from the seed set in its own transaction.
    ///
    /// # Errors
    /// Returns `StoreError` if any row fails to load; no rows are kept.
    pub async fn load_table(&self, table: SeedTable, seed: &SeedSet) -> StoreResult<()> {
        let query = transaction(&[table]);
        let request = bind_rows(self.db.query(query), table, seed);
        request.await?.check()?;
        debug!(table = table.table(), rows = seed.len(table), "seed table loaded");
        Ok(())
    }

    /// Loads every seed table in load order within one transaction.
    ///
    /// # Errors
    /// Returns `StoreError` if any row fails to load; no rows are kept.
    pub async fn load_seed(&self, seed: &SeedSet) -> StoreResult<()> {
        let query = transaction(&SeedTable::LOAD_ORDER);
        let mut request = self.db.query(query);
        for table in SeedTable::LOAD_ORDER {
            request = bind_rows(request, table, seed);
        }
        request.await?.check()?;
        Ok(())
    }

    /// Lists users followed by `name`, with the `since` value of each edge.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn friends_of(&self, name: &str) -> StoreResult<Vec<Friend>> {
        debug!(user = name, "querying friends");
        let mut response = self
            .db
            .query(FRIENDS_QUERY)
            .bind(("name", name.to_string()))
            .await?;
        let records: Vec<Friend> = response.take(0)?;
        Ok(records)
    }

    /// Fetches the first city `name` lives in.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn city_of(&self, name: &str) -> StoreResult<Option<City>> {
        debug!(user = name, "querying city");
        let mut response = self
            .db
            .query(CITY_QUERY)
            .bind(("name", name.to_string()))
            .await?;
        let records: Vec<City> = response.take(0)?;
        Ok(records.into_iter().next())
    }

    /// Lists users living in `city_name`.
    ///
    /// # Errors
    /// Returns `StoreError` if the database query fails.
    pub async fn residents_of(&self, city_name: &str) -> StoreResult<Vec<Resident>> {
        debug!(city = city_name, "querying residents");
        let mut response = self
            .db
            .query(RESIDENTS_QUERY)
            .bind(("city_name", city_name.to_string()))
            .await?;
        let records: Vec<Resident> = response.take(0)?;
        Ok(records)
    }
}

#[derive(serde::Deserialize)]
struct CountRow {
    count: i64,
}

fn transaction(tables: &[SeedTable]) -> String {
    let mut query = String::from("BEGIN TRANSACTION;\n");
    for table in tables {
        query.push_str(table.load_statement());
        query.push('\n');
    }
    query.push_str("COMMIT TRANSACTION;");
    query
}

fn bind_rows<'r, C: Connection>(
    request: Query<'r, C>,
    table: SeedTable,
    seed: &SeedSet,
) -> Query<'r, C> {
    let param = table.param();
    match table {
        SeedTable::User => request.bind((param, seed.users.clone())),
        SeedTable::City => request.bind((param, seed.cities.clone())),
        SeedTable::Follows => request.bind((param, seed.follows.clone())),
        SeedTable::LivesIn => request.bind((param, seed.lives_in.clone())),
    }
}
