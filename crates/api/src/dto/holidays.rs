use serde::Deserialize;

/// Raw query parameters for `GET /holidays/`. Validation happens against
/// the domain model, not here, so missing fields deserialize fine.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub country: Option<String>,
    pub year: Option<String>,
}

/// Raw query parameters for `GET /holidays/search/`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub name: Option<String>,
    pub country: Option<String>,
    pub year: Option<String>,
}
