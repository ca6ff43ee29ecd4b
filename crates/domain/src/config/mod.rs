//! Configuration for Holiday Relay
//!
//! Structures organized by concern:
//! - `root`: main configuration and CLI overrides
//! - `server`: web port, binding, CORS
//! - `provider`: upstream holiday API credentials and endpoint
//! - `cache`: payload cache sizing and TTL
//! - `logging`: logging settings
//! - `errors`: configuration errors

pub mod cache;
pub mod errors;
pub mod logging;
pub mod provider;
pub mod root;
pub mod server;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use provider::ProviderConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
