use crate::errors::DomainError;
use serde_json::{json, Value};

pub const LIST_PARAMS_REQUIRED: &str = "country and year are required parameters.";
pub const SEARCH_PARAMS_REQUIRED: &str = "name, country, and year are required parameters.";

/// A validated holiday lookup (country + year, optional name filter).
/// Transient, built once per request.
#[derive(Debug, Clone)]
pub struct HolidayQuery {
    pub country: String,
    pub year: i32,
    pub name: Option<String>,
}

impl HolidayQuery {
    /// Validates parameters for the list endpoint. Empty strings and a
    /// non-integer `year` count as missing.
    pub fn for_list(
        country: Option<String>,
        year: Option<String>,
    ) -> Result<Self, DomainError> {
        let (country, year) = match (non_empty(country), parse_year(year)) {
            (Some(country), Some(year)) => (country, year),
            _ => {
                return Err(DomainError::MissingParameters(
                    LIST_PARAMS_REQUIRED.to_string(),
                ))
            }
        };
        Ok(Self {
            country,
            year,
            name: None,
        })
    }

    /// Validates parameters for the search endpoint (`name` also required).
    pub fn for_search(
        name: Option<String>,
        country: Option<String>,
        year: Option<String>,
    ) -> Result<Self, DomainError> {
        let (name, country, year) = match (non_empty(name), non_empty(country), parse_year(year)) {
            (Some(name), Some(country), Some(year)) => (name, country, year),
            _ => {
                return Err(DomainError::MissingParameters(
                    SEARCH_PARAMS_REQUIRED.to_string(),
                ))
            }
        };
        Ok(Self {
            country,
            year,
            name: Some(name),
        })
    }

    /// Cache key shared by list and search. The name filter never takes
    /// part, so both endpoints hit the same entry.
    pub fn cache_key(&self) -> String {
        format!("holidays_{}_{}", self.country, self.year)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_year(value: Option<String>) -> Option<i32> {
    non_empty(value)?.parse().ok()
}

/// Filters the provider payload's `response.holidays` list by
/// case-insensitive substring match on each entry's `name` field,
/// re-wrapping the survivors in the same envelope shape.
///
/// A missing list at any level yields an empty result. An entry without a
/// `name` only matches an empty filter.
pub fn filter_by_name(payload: &Value, filter: &str) -> Value {
    let needle = filter.to_lowercase();
    let filtered: Vec<Value> = payload
        .pointer("/response/holidays")
        .and_then(Value::as_array)
        .map(|holidays| {
            holidays
                .iter()
                .filter(|holiday| {
                    holiday
                        .get("name")
                        .and_then(Value::as_str)
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&needle)
                })
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    json!({ "response": { "holidays": filtered } })
}
