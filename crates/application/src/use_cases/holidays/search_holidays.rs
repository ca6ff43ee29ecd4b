use crate::services::HolidayFeedService;
use holiday_relay_domain::{filter_by_name, DomainError, HolidayQuery};
use serde_json::Value;
use std::sync::Arc;

/// Same cache/fetch path as the list use case, then narrows the payload's
/// holiday list by case-insensitive substring match on the query's name.
pub struct SearchHolidaysUseCase {
    feed: Arc<HolidayFeedService>,
}

impl SearchHolidaysUseCase {
    pub fn new(feed: Arc<HolidayFeedService>) -> Self {
        Self { feed }
    }

    pub async fn execute(&self, query: &HolidayQuery) -> Result<Value, DomainError> {
        let payload = self.feed.payload_for(query).await?;
        let filter = query.name.as_deref().unwrap_or("");
        Ok(filter_by_name(&payload, filter))
    }
}
