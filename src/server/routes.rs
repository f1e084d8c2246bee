//! Router configuration for the web server.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.settings.allowed_origins);
    let max_upload = state.settings.max_upload_bytes;

    Router::new()
        // Upload page
        .route("/", get(handlers::index))
        // Health probes
        .route("/health", get(handlers::health))
        .route("/api/health", get(handlers::health))
        // The check endpoint
        .route("/check-bonds", post(handlers::check_bonds))
        // Static assets (CSS/JS)
        .route("/static/style.css", get(handlers::serve_css))
        .route("/static/app.js", get(handlers::serve_js))
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from the configured origin list.
///
/// An empty list means a permissive layer for local use. Credentials are
/// only sent with an explicit origin list; tower-http rejects the wildcard
/// combination.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Skipping invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    if parsed.is_empty() {
        return CorsLayer::permissive();
    }

    CorsLayer::new()
        .allow_origin(parsed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
