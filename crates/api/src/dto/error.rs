use serde::Serialize;

/// Body returned when the provider answers with a non-200 status.
pub const UPSTREAM_FETCH_ERROR: &str = "Error fetching data from Calendarific API.";

/// Body returned when the outbound call or payload parsing blows up.
pub const FETCH_EXCEPTION_ERROR: &str = "Exception occurred while fetching data.";

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn message(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
