mod routes;
mod controllers;
mod services;
mod models;
mod api_docs;
mod shared_state;
mod config;
mod errors;

use std::net::SocketAddr;
use anyhow::Context;
use axum::{Router, routing::get, response::Html};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_scalar::Scalar;
use crate::api_docs::ApiDoc;
use crate::config::Config;
use crate::routes::recommendation_routes::recommendation_routes;
use crate::shared_state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 1. Load configuration
    let config_path = std::env::args().nth(1).unwrap_or_else(|| "config.json".to_string());
    let config = Config::load(&config_path)?;
    tracing::info!(
        "Configuration loaded: irradiance window {} .. {} ({}), timeout {}s",
        config.irradiance.start, config.irradiance.end, config.irradiance.parameter, config.request_timeout_secs
    );

    // 2. Build provider clients
    let state = AppState::from_config(&config).context("building provider clients")?;

    // 3. Start Axum HTTP server
    let app = Router::new()
        .merge(recommendation_routes(state))
        .route("/scalar", get(|| async {
            Html(Scalar::new(ApiDoc::openapi()).to_html())
        }))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("API Server listening on http://{}", addr);
    tracing::info!("Scalar UI: http://{}/scalar", addr);

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .context("HTTP server failed")?;

    Ok(())
}
