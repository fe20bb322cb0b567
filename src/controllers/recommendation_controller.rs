use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use tracing::{error, warn};

use crate::models::recommendation::{ApiResponse, DataQuery};
use crate::services::recommendation_service;
use crate::shared_state::AppState;

/// GET /data
/// Recommend an ORC working fluid for a location
///
/// Geocodes the location, averages its daily solar irradiance over the configured
/// window (W/m²) and picks the working fluid for that band. Logical failures are
/// reported in the body with `success: false`; the HTTP status is always 200.
#[utoipa::path(
    get,
    path = "/data",
    params(DataQuery),
    responses(
        (status = 200, description = "Recommendation or failure envelope", body = ApiResponse)
    )
)]
pub async fn get_data(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<ApiResponse> {
    let location = match query {
        Ok(Query(pairs)) => DataQuery::from_pairs(pairs).location.unwrap_or_default(),
        Err(rejection) => {
            warn!("Unreadable query string: {}", rejection.body_text());
            return Json(ApiResponse::failed(rejection.body_text()));
        }
    };

    match recommendation_service::recommend(&location, state.geocoder.as_ref(), state.irradiance.as_ref()).await {
        Ok(recommendation) => Json(ApiResponse::ok(recommendation.into())),
        Err(e) => {
            if e.is_retryable() {
                error!("Request for '{}' failed upstream: {}", location, e);
            } else {
                warn!("Request for '{}' rejected: {}", location, e);
            }
            Json(ApiResponse::failed(e.to_string()))
        }
    }
}

/// GET /health
/// Liveness probe
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn health() -> &'static str {
    "ok"
}
