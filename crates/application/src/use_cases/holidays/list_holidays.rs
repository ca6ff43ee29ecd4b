use crate::services::HolidayFeedService;
use holiday_relay_domain::{DomainError, HolidayQuery};
use serde_json::Value;
use std::sync::Arc;

/// Returns the provider payload for a (country, year) verbatim.
pub struct ListHolidaysUseCase {
    feed: Arc<HolidayFeedService>,
}

impl ListHolidaysUseCase {
    pub fn new(feed: Arc<HolidayFeedService>) -> Self {
        Self { feed }
    }

    pub async fn execute(&self, query: &HolidayQuery) -> Result<Value, DomainError> {
        self.feed.payload_for(query).await
    }
}
