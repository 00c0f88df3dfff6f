//! Front-end side of the tracker: talks to the HTTP API and keeps the
//! signed-in profile and progress map cached between calls.
#![forbid(unsafe_code)]

mod cache;
mod client;
pub mod error;

pub use client::{CareerClient, ClientConfig, SignupFields};
pub use error::ClientError;
