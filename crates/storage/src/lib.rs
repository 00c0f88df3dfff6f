#![forbid(unsafe_code)]

pub mod repository;
pub mod sqlite;

pub use repository::{
    AccountRepository, InMemoryRepository, ProgressRepository, Storage, StorageError, UserRecord,
};
