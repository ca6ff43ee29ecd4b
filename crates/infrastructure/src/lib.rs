//! Holiday Relay Infrastructure Layer
//!
//! Adapters behind the application ports: the in-process payload cache and
//! the Calendarific HTTP client.
pub mod cache;
pub mod provider;

pub use cache::{CacheMetrics, ManualClock, MemoryPayloadCache, SystemClock, TimeSource};
pub use provider::CalendarificClient;
