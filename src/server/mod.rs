//! Web server for checking prize bonds.
//!
//! Serves the upload page and the two-file check endpoint:
//! - `/` upload page with embedded CSS/JS assets
//! - `POST /check-bonds` multipart upload returning the match JSON
//! - `/health` and `/api/health` liveness probes

mod handlers;
mod routes;
mod templates;

pub use routes::create_router;

use std::net::SocketAddr;
use std::time::Instant;

use crate::config::Settings;

/// Shared state for the web server.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    /// Process start, for the health uptime field.
    pub started: Instant,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: settings.clone(),
            started: Instant::now(),
        }
    }
}

/// Start the web server.
pub async fn serve(settings: &Settings, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(settings);
    let app = create_router(state);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    tracing::info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
