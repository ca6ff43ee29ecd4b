pub mod holiday_provider;
pub mod payload_cache;

pub use holiday_provider::HolidayProvider;
pub use payload_cache::PayloadCache;
