pub mod clock;
pub mod store;

pub use clock::{ManualClock, SystemClock, TimeSource};
pub use store::{CacheMetrics, MemoryPayloadCache};
