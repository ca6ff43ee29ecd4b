#![allow(dead_code)]

use async_trait::async_trait;
use holiday_relay_application::ports::{HolidayProvider, PayloadCache};
use holiday_relay_domain::DomainError;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

// ============================================================================
// Mock HolidayProvider
// ============================================================================

pub struct MockHolidayProvider {
    payload: Arc<RwLock<Value>>,
    failure: Arc<RwLock<Option<FailureMode>>>,
    call_count: Arc<AtomicU64>,
}

#[derive(Clone, Copy)]
pub enum FailureMode {
    Status(u16),
    Transport,
}

impl MockHolidayProvider {
    pub fn new() -> Self {
        Self::with_payload(sample_payload())
    }

    pub fn with_payload(payload: Value) -> Self {
        Self {
            payload: Arc::new(RwLock::new(payload)),
            failure: Arc::new(RwLock::new(None)),
            call_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::Relaxed)
    }

    pub async fn set_failure(&self, mode: Option<FailureMode>) {
        *self.failure.write().await = mode;
    }

    pub async fn set_payload(&self, payload: Value) {
        *self.payload.write().await = payload;
    }
}

#[async_trait]
impl HolidayProvider for MockHolidayProvider {
    async fn fetch(&self, _country: &str, _year: i32) -> Result<Value, DomainError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        match *self.failure.read().await {
            Some(FailureMode::Status(code)) => Err(DomainError::UpstreamStatus(code)),
            Some(FailureMode::Transport) => Err(DomainError::FetchFailed(
                "connection refused".to_string(),
            )),
            None => Ok(self.payload.read().await.clone()),
        }
    }
}

// ============================================================================
// Mock PayloadCache
// ============================================================================

pub struct MockPayloadCache {
    entries: Arc<RwLock<HashMap<String, Value>>>,
    get_count: Arc<AtomicU64>,
    set_count: Arc<AtomicU64>,
    last_ttl: Arc<RwLock<Option<Duration>>>,
    unavailable: Arc<RwLock<bool>>,
}

impl MockPayloadCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            get_count: Arc::new(AtomicU64::new(0)),
            set_count: Arc::new(AtomicU64::new(0)),
            last_ttl: Arc::new(RwLock::new(None)),
            unavailable: Arc::new(RwLock::new(false)),
        }
    }

    pub fn get_count(&self) -> u64 {
        self.get_count.load(Ordering::Relaxed)
    }

    pub fn set_count(&self) -> u64 {
        self.set_count.load(Ordering::Relaxed)
    }

    pub async fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.read().await
    }

    pub async fn contains(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    /// Simulates an unreachable store: gets miss, sets are dropped.
    pub async fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().await = unavailable;
    }
}

#[async_trait]
impl PayloadCache for MockPayloadCache {
    async fn get(&self, key: &str) -> Option<Value> {
        self.get_count.fetch_add(1, Ordering::Relaxed);
        if *self.unavailable.read().await {
            return None;
        }
        self.entries.read().await.get(key).cloned()
    }

    async fn set(&self, key: &str, payload: Value, ttl: Duration) {
        self.set_count.fetch_add(1, Ordering::Relaxed);
        if *self.unavailable.read().await {
            return;
        }
        self.entries.write().await.insert(key.to_string(), payload);
        *self.last_ttl.write().await = Some(ttl);
    }
}

// ============================================================================
// Fixtures
// ============================================================================

pub fn sample_payload() -> Value {
    json!({
        "meta": { "code": 200 },
        "response": {
            "holidays": [
                { "name": "New Year's Day", "date": { "iso": "2024-01-01" }, "type": ["National holiday"] },
                { "name": "Labour Day", "date": { "iso": "2024-05-01" }, "type": ["National holiday"] }
            ]
        }
    })
}

pub fn list_query(country: &str, year: &str) -> holiday_relay_domain::HolidayQuery {
    holiday_relay_domain::HolidayQuery::for_list(
        Some(country.to_string()),
        Some(year.to_string()),
    )
    .unwrap()
}

pub fn search_query(name: &str, country: &str, year: &str) -> holiday_relay_domain::HolidayQuery {
    holiday_relay_domain::HolidayQuery::for_search(
        Some(name.to_string()),
        Some(country.to_string()),
        Some(year.to_string()),
    )
    .unwrap()
}
