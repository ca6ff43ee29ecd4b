//! Holiday Relay Domain Layer
pub mod config;
pub mod errors;
pub mod holiday;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use holiday::{filter_by_name, HolidayQuery};
