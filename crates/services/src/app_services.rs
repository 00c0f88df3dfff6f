use std::sync::Arc;

use career_core::Catalog;
use storage::repository::Storage;

use crate::account_service::AccountService;
use crate::error::AppServicesError;
use crate::progress_service::ProgressService;
use crate::Clock;

/// Assembles the account and progress services over one storage backend.
#[derive(Clone)]
pub struct AppServices {
    accounts: Arc<AccountService>,
    progress: Arc<ProgressService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the database cannot be opened or migrated.
    pub async fn new_sqlite(db_url: &str, clock: Clock) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, Catalog::builtin()))
    }

    /// Volatile services; everything is lost on drop.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, Catalog::builtin())
    }

    #[must_use]
    pub fn from_storage(storage: &Storage, clock: Clock, catalog: Catalog) -> Self {
        let accounts = Arc::new(AccountService::new(clock, Arc::clone(&storage.accounts)));
        let progress = Arc::new(ProgressService::new(
            clock,
            Arc::clone(&storage.progress),
            catalog,
        ));
        Self { accounts, progress }
    }

    #[must_use]
    pub fn accounts(&self) -> Arc<AccountService> {
        Arc::clone(&self.accounts)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.progress.catalog()
    }
}
