use holiday_relay_api::AppState;
use holiday_relay_application::ports::{HolidayProvider, PayloadCache};
use holiday_relay_application::services::HolidayFeedService;
use holiday_relay_application::use_cases::{ListHolidaysUseCase, SearchHolidaysUseCase};
use holiday_relay_domain::Config;
use holiday_relay_infrastructure::{CalendarificClient, MemoryPayloadCache, SystemClock};
use std::sync::Arc;
use std::time::Duration;

/// Wired object graph: adapters, the shared feed service, and API state.
pub struct AppContainer {
    pub state: AppState,
    /// Concrete handle kept for the compaction job.
    pub cache: Arc<MemoryPayloadCache>,
}

pub fn build(config: &Config) -> AppContainer {
    let cache = Arc::new(MemoryPayloadCache::new(
        config.cache.max_entries,
        Arc::new(SystemClock),
    ));
    let provider: Arc<dyn HolidayProvider> = Arc::new(CalendarificClient::new(&config.provider));

    let feed = Arc::new(HolidayFeedService::new(
        cache.clone() as Arc<dyn PayloadCache>,
        provider,
        Duration::from_secs(config.cache.ttl_seconds),
    ));

    AppContainer {
        state: AppState {
            list_holidays: Arc::new(ListHolidaysUseCase::new(feed.clone())),
            search_holidays: Arc::new(SearchHolidaysUseCase::new(feed)),
        },
        cache,
    }
}
