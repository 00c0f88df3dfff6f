#![forbid(unsafe_code)]

pub mod account_service;
pub mod app_services;
mod credentials;
pub mod error;
pub mod progress_service;

pub use career_core::Clock;

pub use account_service::AccountService;
pub use app_services::AppServices;
pub use error::{AccountError, AppServicesError, ProgressError};
pub use progress_service::ProgressService;
