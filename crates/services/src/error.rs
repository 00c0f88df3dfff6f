//! Shared error types for the services crate.

use thiserror::Error;

use career_core::model::{IdError, PercentageError, SignupError};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Errors emitted by `AccountService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AccountError {
    #[error(transparent)]
    Signup(#[from] SignupError),
    #[error("an account with this email already exists")]
    DuplicateEmail,
    #[error("user not found")]
    NotFound,
    /// Deliberately says nothing about which of email or password was wrong.
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by `ProgressService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressError {
    #[error(transparent)]
    Range(#[from] PercentageError),
    #[error(transparent)]
    InvalidId(#[from] IdError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while assembling `AppServices`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
}
