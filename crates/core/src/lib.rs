#![forbid(unsafe_code)]

pub mod aggregate;
pub mod catalog;
pub mod model;
pub mod time;

pub use catalog::Catalog;
pub use time::Clock;
