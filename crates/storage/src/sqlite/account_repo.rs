use career_core::model::UserId;

use super::SqliteRepository;
use super::mapping::{connection, daily_time_to_i64, map_user_row};
use crate::repository::{AccountRepository, StorageError, UserRecord};

#[async_trait::async_trait]
impl AccountRepository for SqliteRepository {
    async fn insert_user(&self, user: &UserRecord) -> Result<(), StorageError> {
        sqlx::query(
            r"
            INSERT INTO users (id, full_name, email, email_key, dream_job, daily_time, secret_salt, secret_hash, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ",
        )
        .bind(user.id.as_str())
        .bind(&user.full_name)
        .bind(&user.email)
        .bind(&user.email_key)
        .bind(user.dream_job.as_str())
        .bind(daily_time_to_i64(user.daily_time))
        .bind(&user.secret_salt)
        .bind(&user.secret_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => StorageError::Conflict,
            other => connection(other),
        })?;

        Ok(())
    }

    async fn find_by_email_key(
        &self,
        email_key: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, full_name, email, email_key, dream_job, daily_time, secret_salt, secret_hash, created_at
            FROM users WHERE email_key = ?1
            ",
        )
        .bind(email_key)
        .fetch_optional(&self.pool)
        .await
        .map_err(connection)?;

        row.as_ref().map(map_user_row).transpose()
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<UserRecord>, StorageError> {
        let row = sqlx::query(
            r"
            SELECT id, full_name, email, email_key, dream_job, daily_time, secret_salt, secret_hash, created_at
            FROM users WHERE id = ?1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(connection)?;

        row.as_ref().map(map_user_row).transpose()
    }
}
