//! The mandelbrot raster tile endpoint.

use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use lodcast_raster::{mandelbrot, TileCoord};
use tracing::debug;

use crate::error::ApiError;
use crate::routes::parse_param;

/// `GET /mandelbrot/{z}/{x}/{y}`
///
/// Responds with the raw RGBA bytes of the rendered 256x256 tile.
pub async fn handler(
    Path((z, x, y)): Path<(String, String, String)>,
) -> Result<Response, ApiError> {
    let zoom: u32 = parse_param("z", &z)?;
    let x: u64 = parse_param("x", &x)?;
    let y: u64 = parse_param("y", &y)?;

    let coord = TileCoord::new(zoom, x, y)?;
    let tile = mandelbrot::render(coord);
    debug!(zoom, x, y, "rendered mandelbrot tile");
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], tile.into_bytes()).into_response())
}
