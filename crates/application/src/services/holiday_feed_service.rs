use crate::ports::{HolidayProvider, PayloadCache};
use holiday_relay_domain::{DomainError, HolidayQuery};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Cache-or-fetch path shared by the list and search use cases.
///
/// One cache entry per (country, year); the name filter plays no part, so
/// both endpoints read and refresh the same entry. Concurrent misses for
/// the same key may each fetch upstream; the last write wins.
pub struct HolidayFeedService {
    cache: Arc<dyn PayloadCache>,
    provider: Arc<dyn HolidayProvider>,
    ttl: Duration,
}

impl HolidayFeedService {
    pub fn new(
        cache: Arc<dyn PayloadCache>,
        provider: Arc<dyn HolidayProvider>,
        ttl: Duration,
    ) -> Self {
        Self {
            cache,
            provider,
            ttl,
        }
    }

    /// Returns the provider payload for the query, served from cache when
    /// a live entry exists. Provider errors propagate; nothing is cached
    /// on error.
    pub async fn payload_for(&self, query: &HolidayQuery) -> Result<Value, DomainError> {
        let key = query.cache_key();

        if let Some(payload) = self.cache.get(&key).await {
            debug!(key = %key, "Serving holiday payload from cache");
            return Ok(payload);
        }

        debug!(
            country = %query.country,
            year = query.year,
            "Cache miss, fetching from provider"
        );
        let payload = self.provider.fetch(&query.country, query.year).await?;
        self.cache.set(&key, payload.clone(), self.ttl).await;

        Ok(payload)
    }
}
