pub mod holiday_feed_service;

pub use holiday_feed_service::HolidayFeedService;
