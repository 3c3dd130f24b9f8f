use std::{error::Error, fmt};

use surrealdb::{Connection, Surreal};

use crate::parsers::SeedParseError;
use crate::store::{StoreError, SurrealGraphStore};

pub mod bootstrap;
pub mod queries;

#[derive(Debug)]
pub enum ControlError {
    Seed(SeedParseError),
    Store(StoreError),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seed(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ControlError {}

impl From<SeedParseError> for ControlError {
    fn from(err: SeedParseError) -> Self {
        Self::Seed(err)
    }
}

impl From<StoreError> for ControlError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

/// Entry point for bootstrapping and querying the social graph.
///
/// Holds the store handle explicitly; clones share the same connection.
pub struct GraphControlPlane<C: Connection> {
    store: SurrealGraphStore<C>,
}

impl<C: Connection> Clone for GraphControlPlane<C> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<C: Connection> GraphControlPlane<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self {
            store: SurrealGraphStore::new(db),
        }
    }

    pub const fn store(&self) -> &SurrealGraphStore<C> {
        &self.store
    }
}
