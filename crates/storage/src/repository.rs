use async_trait::async_trait;
use career_core::model::{DailyTime, DreamJob, Profile, ProgressRecord, RoadmapId, UserId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("conflict")]
    Conflict,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Persisted shape of a user account, including the credential digest.
///
/// Only the storage and account layers see this type; everything outward
/// facing goes through [`UserRecord::profile`].
#[derive(Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub full_name: String,
    /// Email as entered.
    pub email: String,
    /// Lowercased email; the uniqueness and lookup key.
    pub email_key: String,
    pub dream_job: DreamJob,
    pub daily_time: DailyTime,
    pub secret_salt: String,
    pub secret_hash: String,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    #[must_use]
    pub fn profile(&self) -> Profile {
        Profile {
            id: self.id.clone(),
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            dream_job: self.dream_job,
            daily_time: self.daily_time,
            created_at: self.created_at,
        }
    }
}

impl fmt::Debug for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserRecord")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("created_at", &self.created_at)
            .finish_non_exhaustive()
    }
}

/// Repository contract for user accounts.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Conflict` if the id or email key is taken; the
    /// store is left unchanged in that case.
    async fn insert_user(&self, user: &UserRecord) -> Result<(), StorageError>;

    /// Fetch an account by its normalized email key.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn find_by_email_key(&self, email_key: &str)
    -> Result<Option<UserRecord>, StorageError>;

    /// Fetch an account by id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn get_user(&self, id: &UserId) -> Result<Option<UserRecord>, StorageError>;
}

/// Repository contract for per-user, per-roadmap progress.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Insert or replace the record for `(user_id, roadmap_id)`.
    ///
    /// Each call is atomic for its key; concurrent writes to the same key
    /// leave exactly one of the submitted values.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn upsert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn get_progress(
        &self,
        user_id: &UserId,
        roadmap_id: &RoadmapId,
    ) -> Result<Option<ProgressRecord>, StorageError>;

    /// All records for a user, ordered by roadmap id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the lookup fails.
    async fn list_progress(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>, StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    users: Arc<Mutex<HashMap<UserId, UserRecord>>>,
    progress: Arc<Mutex<HashMap<(UserId, RoadmapId), ProgressRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E: fmt::Display>(e: E) -> StorageError {
    StorageError::Connection(e.to_string())
}

#[async_trait]
impl AccountRepository for InMemoryRepository {
    async fn insert_user(&self, user: &UserRecord) -> Result<(), StorageError> {
        let mut guard = self.users.lock().map_err(poisoned)?;
        let taken = guard.contains_key(&user.id)
            || guard.values().any(|existing| existing.email_key == user.email_key);
        if taken {
            return Err(StorageError::Conflict);
        }
        guard.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn find_by_email_key(
        &self,
        email_key: &str,
    ) -> Result<Option<UserRecord>, StorageError> {
        let guard = self.users.lock().map_err(poisoned)?;
        Ok(guard.values().find(|u| u.email_key == email_key).cloned())
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<UserRecord>, StorageError> {
        let guard = self.users.lock().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn upsert_progress(&self, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self.progress.lock().map_err(poisoned)?;
        guard.insert(
            (record.user_id.clone(), record.roadmap_id.clone()),
            record.clone(),
        );
        Ok(())
    }

    async fn get_progress(
        &self,
        user_id: &UserId,
        roadmap_id: &RoadmapId,
    ) -> Result<Option<ProgressRecord>, StorageError> {
        let guard = self.progress.lock().map_err(poisoned)?;
        Ok(guard
            .get(&(user_id.clone(), roadmap_id.clone()))
            .cloned())
    }

    async fn list_progress(&self, user_id: &UserId) -> Result<Vec<ProgressRecord>, StorageError> {
        let guard = self.progress.lock().map_err(poisoned)?;
        let mut records: Vec<ProgressRecord> = guard
            .values()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.roadmap_id.cmp(&b.roadmap_id));
        Ok(records)
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub accounts: Arc<dyn AccountRepository>,
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let repo = InMemoryRepository::new();
        let accounts: Arc<dyn AccountRepository> = Arc::new(repo.clone());
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo);
        Self { accounts, progress }
    }
}
