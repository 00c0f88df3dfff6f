use career_core::model::{ProgressRecord, RoadmapId, UserId};

use super::SqliteRepository;
use super::mapping::{connection, map_progress_row};
use crate::repository::{ProgressRepository, StorageError};

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn upsert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        // Single statement: SQLite applies it atomically per key.
        sqlx::query(
            r"
            INSERT INTO progress (user_id, roadmap_id, percentage, updated_at)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(user_id, roadmap_id) DO UPDATE SET
                percentage = excluded.percentage,
                updated_at = excluded.updated_at
            ",
        )
        .bind(record.user_id.as_str())
        .bind(record.roadmap_id.as_str())
        .bind(record.percentage.value())
        .bind(record.updated_at)
        .execute(&self.pool)
        .await
        .map_err(connection)?;

        Ok(())
    }

    async fn get_progress(
        &self,
        user_id: &UserId,
        roadmap_id: &RoadmapId,
    ) -> Result<Option<ProgressRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT user_id, roadmap_id, percentage, updated_at
            FROM progress WHERE user_id = ?1 AND roadmap_id = ?2
            ",
        )
        .bind(user_id.as_str())
        .bind(roadmap_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(connection)?;

        row.as_ref().map(map_progress_row).transpose()
    }

    async fn list_progress(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT user_id, roadmap_id, percentage, updated_at
            FROM progress
            WHERE user_id = ?1
            ORDER BY roadmap_id ASC
            ",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(connection)?;

        let mut records = Vec::with_capacity(rows.len());
        for row in &rows {
            records.push(map_progress_row(row)?);
        }
        Ok(records)
    }
}
