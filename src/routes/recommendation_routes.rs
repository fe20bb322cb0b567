use axum::{routing::get, Router};

use crate::controllers::recommendation_controller::{get_data, health};
use crate::shared_state::AppState;

/// Build the public router.
/// `/api/getData` is kept as an alias of `/data` for existing front ends.
pub fn recommendation_routes(state: AppState) -> Router {
    Router::new()
        .route("/data",        get(get_data))
        .route("/api/getData", get(get_data))
        .route("/health",      get(health))
        .with_state(state)
}
