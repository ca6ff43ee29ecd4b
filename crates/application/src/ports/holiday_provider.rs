use async_trait::async_trait;
use holiday_relay_domain::DomainError;
use serde_json::Value;

/// Outbound port to the third-party holiday API.
///
/// A single GET per call, no retries. Errors carry either the upstream
/// status code (`UpstreamStatus`) or a transport/parse diagnostic
/// (`FetchFailed`).
#[async_trait]
pub trait HolidayProvider: Send + Sync {
    async fn fetch(&self, country: &str, year: i32) -> Result<Value, DomainError>;
}
