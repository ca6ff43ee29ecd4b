use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Key-value store for provider payloads.
///
/// The surface is infallible on purpose: adapters swallow store failures,
/// reporting a miss from `get` and a no-op from `set`, so a broken store
/// degrades to fetch-every-time instead of failing requests.
#[async_trait]
pub trait PayloadCache: Send + Sync {
    /// Returns the cached payload, or `None` when absent or expired.
    async fn get(&self, key: &str) -> Option<Value>;

    /// Stores a payload, replacing any previous entry wholesale.
    async fn set(&self, key: &str, payload: Value, ttl: Duration);
}
