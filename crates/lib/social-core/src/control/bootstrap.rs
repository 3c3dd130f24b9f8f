use std::path::Path;

use serde::{Deserialize, Serialize};
use social_store::models::SeedReport;
use surrealdb::Connection;
use tracing::info;

use crate::parsers::SeedSet;

use super::{ControlError, GraphControlPlane};

/// Result of a seed attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SeedOutcome {
    Loaded(SeedReport),
    Skipped { existing_users: usize },
}

impl<C: Connection> GraphControlPlane<C> {
    /// Declares the four tables. Safe to call on every start.
    ///
    /// # Errors
    /// Returns `ControlError` if a declaration fails.
    pub async fn ensure_schema(&self) -> Result<(), ControlError> {
        self.store.define_schema().await?;
        info!("graph schema ready");
        Ok(())
    }

    /// Loads the seed files from `data_dir` when the store holds no users.
    ///
    /// The files are only read when a load is needed.
    ///
    /// # Errors
    /// Returns `ControlError` if the files cannot be parsed or the load fails.
    pub async fn ensure_seed_data(
        &self,
        data_dir: impl AsRef<Path>,
    ) -> Result<SeedOutcome, ControlError> {
        if let Some(outcome) = self.skip_if_seeded().await? {
            return Ok(outcome);
        }
        let data_dir = data_dir.as_ref();
        info!(data_dir = %data_dir.display(), "reading seed files");
        let seed = SeedSet::read_dir(data_dir).await?;
        self.load(&seed).await
    }

    /// Loads an already parsed seed set when the store holds no users.
    ///
    /// # Errors
    /// Returns `ControlError` if the load fails.
    pub async fn ensure_seed(&self, seed: &SeedSet) -> Result<SeedOutcome, ControlError> {
        if let Some(outcome) = self.skip_if_seeded().await? {
            return Ok(outcome);
        }
        self.load(seed).await
    }

    /// Runs schema declaration and seeding in order.
    ///
    /// # Errors
    /// Returns `ControlError` from either step; the store must not be served
    /// after a failure.
    pub async fn bootstrap(
        &self,
        data_dir: impl AsRef<Path>,
    ) -> Result<SeedOutcome, ControlError> {
        self.ensure_schema().await?;
        self.ensure_seed_data(data_dir).await
    }

    async fn skip_if_seeded(&self) -> Result<Option<SeedOutcome>, ControlError> {
        let existing_users = self.store.count_users().await?;
        if existing_users == 0 {
            return Ok(None);
        }
        info!(existing_users, "seed data present, skipping load");
        Ok(Some(SeedOutcome::Skipped { existing_users }))
    }

    async fn load(&self, seed: &SeedSet) -> Result<SeedOutcome, ControlError> {
        self.store.load_seed(seed).await?;
        let report = SeedReport {
            users: seed.users.len(),
            cities: seed.cities.len(),
            follows: seed.follows.len(),
            lives_in: seed.lives_in.len(),
        };
        info!(
            users = report.users,
            cities = report.cities,
            follows = report.follows,
            lives_in = report.lives_in,
            "seed data loaded"
        );
        Ok(SeedOutcome::Loaded(report))
    }
}
