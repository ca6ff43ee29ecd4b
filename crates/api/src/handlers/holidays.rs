use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use holiday_relay_domain::{DomainError, HolidayQuery};
use tracing::{debug, error};

use crate::{
    dto::{
        error::{FETCH_EXCEPTION_ERROR, UPSTREAM_FETCH_ERROR},
        ErrorResponse, ListParams, SearchParams,
    },
    state::AppState,
};

pub async fn list_holidays(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    let query = match HolidayQuery::for_list(params.country, params.year) {
        Ok(query) => query,
        Err(e) => return domain_error_response(e),
    };

    debug!(country = %query.country, year = query.year, "Listing holidays");

    match state.list_holidays.execute(&query).await {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => {
            error!(error = %e, country = %query.country, year = query.year, "Holiday list failed");
            domain_error_response(e)
        }
    }
}

pub async fn search_holidays(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Response {
    let query = match HolidayQuery::for_search(params.name, params.country, params.year) {
        Ok(query) => query,
        Err(e) => return domain_error_response(e),
    };

    debug!(
        country = %query.country,
        year = query.year,
        name = query.name.as_deref().unwrap_or(""),
        "Searching holidays"
    );

    match state.search_holidays.execute(&query).await {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => {
            error!(error = %e, country = %query.country, year = query.year, "Holiday search failed");
            domain_error_response(e)
        }
    }
}

/// Single mapping point from the domain taxonomy to transport responses.
fn domain_error_response(err: DomainError) -> Response {
    match err {
        DomainError::MissingParameters(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message(msg)),
        )
            .into_response(),
        DomainError::UpstreamStatus(code) => (
            // The provider's status passes through unchanged; its body does not.
            StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_GATEWAY),
            Json(ErrorResponse::message(UPSTREAM_FETCH_ERROR)),
        )
            .into_response(),
        DomainError::FetchFailed(details) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::with_details(FETCH_EXCEPTION_ERROR, details)),
        )
            .into_response(),
    }
}
