use std::sync::Arc;

use career_core::aggregate::{self, ProgressMap, ProgressOverview};
use career_core::model::{DreamJob, Percentage, ProgressRecord, RoadmapId, UserId};
use career_core::Catalog;
use storage::repository::ProgressRepository;
use tracing::debug;

use crate::error::ProgressError;
use crate::Clock;

/// Stores and aggregates per-roadmap completion percentages.
#[derive(Clone)]
pub struct ProgressService {
    clock: Clock,
    progress: Arc<dyn ProgressRepository>,
    catalog: Catalog,
}

impl ProgressService {
    #[must_use]
    pub fn new(clock: Clock, progress: Arc<dyn ProgressRepository>, catalog: Catalog) -> Self {
        Self {
            clock,
            progress,
            catalog,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Insert or replace the percentage for `(user_id, roadmap_id)`.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidId` for blank ids.
    /// Returns `ProgressError::Range` outside `[0, 100]`.
    /// Returns `ProgressError::Storage` if persistence fails.
    pub async fn upsert_progress(
        &self,
        user_id: &str,
        roadmap_id: &str,
        value: f64,
    ) -> Result<ProgressRecord, ProgressError> {
        let user_id = UserId::parse(user_id)?;
        let roadmap_id = RoadmapId::parse(roadmap_id)?;
        let percentage = Percentage::new(value)?;

        let record = ProgressRecord {
            user_id,
            roadmap_id,
            percentage,
            updated_at: self.clock.now(),
        };
        self.progress.upsert_progress(&record).await?;
        debug!(
            user_id = %record.user_id,
            roadmap_id = %record.roadmap_id,
            progress = record.percentage.value(),
            "progress stored"
        );
        Ok(record)
    }

    /// Stored percentage, or 0 for an untouched pair.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidId` for blank ids.
    /// Returns `ProgressError::Storage` if the lookup fails.
    pub async fn get_progress(
        &self,
        user_id: &str,
        roadmap_id: &str,
    ) -> Result<Percentage, ProgressError> {
        let user_id = UserId::parse(user_id)?;
        let roadmap_id = RoadmapId::parse(roadmap_id)?;
        let record = self.progress.get_progress(&user_id, &roadmap_id).await?;
        Ok(record.map_or(Percentage::ZERO, |r| r.percentage))
    }

    /// Touched roadmaps only; absence means untouched.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::InvalidId` for a blank id.
    /// Returns `ProgressError::Storage` if the lookup fails.
    pub async fn list_progress(&self, user_id: &str) -> Result<ProgressMap, ProgressError> {
        let user_id = UserId::parse(user_id)?;
        let records = self.progress.list_progress(&user_id).await?;
        Ok(records
            .into_iter()
            .map(|r| (r.roadmap_id, r.percentage))
            .collect())
    }

    /// Dashboard figure: mean over touched roadmaps.
    ///
    /// # Errors
    ///
    /// See [`ProgressService::list_progress`].
    pub async fn overall_progress(&self, user_id: &str) -> Result<f64, ProgressError> {
        let map = self.list_progress(user_id).await?;
        Ok(aggregate::overall_progress(&map))
    }

    /// # Errors
    ///
    /// See [`ProgressService::list_progress`].
    pub async fn overview(
        &self,
        user_id: &str,
        dream_job: Option<DreamJob>,
    ) -> Result<ProgressOverview, ProgressError> {
        let map = self.list_progress(user_id).await?;
        Ok(aggregate::overview(&self.catalog, &map, dream_job))
    }
}
