use super::clock::TimeSource;
use async_trait::async_trait;
use dashmap::DashMap;
use holiday_relay_application::ports::PayloadCache;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Hit/miss counters, exposed for logging and tests.
#[derive(Debug, Default)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    pub expirations: AtomicU64,
    pub evictions: AtomicU64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits.load(Ordering::Relaxed);
        let misses = self.misses.load(Ordering::Relaxed);
        let total = hits + misses;
        if total == 0 {
            0.0
        } else {
            (hits as f64 / total as f64) * 100.0
        }
    }
}

struct CacheEntry {
    payload: Value,
    expires_at: u64,
}

/// Concurrent in-process payload store.
///
/// Each entry carries an absolute expiry computed from the injected clock;
/// an expired entry is indistinguishable from an absent one and is removed
/// on the read that finds it. Payloads are replaced wholesale, never
/// mutated in place.
pub struct MemoryPayloadCache {
    entries: DashMap<String, CacheEntry>,
    max_entries: usize,
    clock: Arc<dyn TimeSource>,
    metrics: Arc<CacheMetrics>,
}

impl MemoryPayloadCache {
    pub fn new(max_entries: usize, clock: Arc<dyn TimeSource>) -> Self {
        info!(max_entries, "Initializing payload cache");
        Self {
            entries: DashMap::with_capacity(max_entries.min(1024)),
            max_entries,
            clock,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Removes every expired entry; returns how many were dropped.
    pub fn compact(&self) -> usize {
        let now = self.clock.now_secs();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        let removed = before - self.entries.len();
        if removed > 0 {
            self.metrics
                .expirations
                .fetch_add(removed as u64, Ordering::Relaxed);
            debug!(removed, remaining = self.entries.len(), "Cache compacted");
        }
        removed
    }

    /// Drops the entry closest to expiry. Called when the store is full;
    /// the workload (one entry per country/year, refreshed daily) makes
    /// this a rare path.
    fn evict_soonest_expiry(&self) {
        let victim = self
            .entries
            .iter()
            .min_by_key(|entry| entry.value().expires_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = victim {
            self.entries.remove(&key);
            self.metrics.evictions.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Evicted entry to stay within capacity");
        }
    }
}

#[async_trait]
impl PayloadCache for MemoryPayloadCache {
    async fn get(&self, key: &str) -> Option<Value> {
        let now = self.clock.now_secs();

        if let Some(entry) = self.entries.get(key) {
            if entry.expires_at > now {
                self.metrics.hits.fetch_add(1, Ordering::Relaxed);
                return Some(entry.payload.clone());
            }
            drop(entry);
            self.entries.remove(key);
            self.metrics.expirations.fetch_add(1, Ordering::Relaxed);
        }

        self.metrics.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    async fn set(&self, key: &str, payload: Value, ttl: Duration) {
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(key) {
            if self.compact() == 0 {
                self.evict_soonest_expiry();
            }
        }

        let expires_at = self.clock.now_secs().saturating_add(ttl.as_secs());
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                payload,
                expires_at,
            },
        );
        self.metrics.insertions.fetch_add(1, Ordering::Relaxed);

        debug!(
            key = %key,
            ttl_secs = ttl.as_secs(),
            cache_size = self.entries.len(),
            "Cached provider payload"
        );
    }
}
