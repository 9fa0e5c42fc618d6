//! HTTP server setup and routing.

use std::path::Path;

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::routes;

/// Largest accepted LOD request body in bytes.
///
/// Sort cost is `O(n log n)` in point count; oversized inputs are rejected
/// at the boundary before they reach the core.
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Build the application router.
pub fn app(assets: &Path) -> Router {
    Router::new()
        .route("/lod/{depth}", post(routes::lod::handler))
        .route("/mandelbrot/{z}/{x}/{y}", get(routes::mandelbrot::handler))
        .fallback_service(ServeDir::new(assets))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Run the tile server.
pub async fn run(assets: &Path, host: &str, port: u16) -> Result<()> {
    let app = app(assets);

    let addr = format!("{host}:{port}");
    info!("tile server listening on http://{addr}");
    info!("serving static assets from {}", assets.display());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
