use std::sync::Arc;

use career_core::Catalog;
use services::{AccountService, AppServices, Clock, ProgressService};

/// Shared handles passed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub progress: Arc<ProgressService>,
}

impl AppState {
    #[must_use]
    pub fn new(services: &AppServices) -> Self {
        Self {
            accounts: services.accounts(),
            progress: services.progress(),
        }
    }

    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(&AppServices::in_memory(clock))
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.progress.catalog()
    }
}
