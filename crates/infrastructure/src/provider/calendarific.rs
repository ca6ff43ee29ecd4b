use async_trait::async_trait;
use holiday_relay_application::ports::HolidayProvider;
use holiday_relay_domain::config::ProviderConfig;
use holiday_relay_domain::DomainError;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// HTTP adapter for the Calendarific holidays API.
///
/// One GET per fetch, no retries. The status of a non-200 response is
/// surfaced unchanged through `UpstreamStatus`; transport and JSON-parse
/// failures become `FetchFailed` with the underlying message.
pub struct CalendarificClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CalendarificClient {
    pub fn new(config: &ProviderConfig) -> Self {
        let http = reqwest::Client::builder()
            .use_rustls_tls()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            http,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }
}

#[async_trait]
impl HolidayProvider for CalendarificClient {
    async fn fetch(&self, country: &str, year: i32) -> Result<Value, DomainError> {
        debug!(url = %self.base_url, country = %country, year, "Fetching holidays from provider");

        let response = self
            .http
            .get(&self.base_url)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("country", country),
                ("year", &year.to_string()),
            ])
            .send()
            .await
            .map_err(|e| DomainError::FetchFailed(e.to_string()))?;

        // Anything but a plain 200 is surfaced as-is to the caller.
        let status = response.status();
        if status != reqwest::StatusCode::OK {
            debug!(status = status.as_u16(), "Provider returned non-200 status");
            return Err(DomainError::UpstreamStatus(status.as_u16()));
        }

        let payload = response
            .json::<Value>()
            .await
            .map_err(|e| DomainError::FetchFailed(e.to_string()))?;

        debug!(country = %country, year, "Provider payload received");
        Ok(payload)
    }
}
