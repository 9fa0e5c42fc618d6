//! The LOD tile endpoint.

use axum::body::Bytes;
use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use lodcast_core::{Encoder, LodTile, PointBuffer};
use tracing::debug;

use crate::error::ApiError;
use crate::routes::parse_param;

/// `POST /lod/{depth}`
///
/// The request body is the raw little-endian scalar buffer (interleaved
/// `x, y` f32 pairs); the response is the encoded tile blob. Each request
/// is processed and discarded — nothing persists between calls.
pub async fn handler(Path(depth): Path<String>, body: Bytes) -> Result<Response, ApiError> {
    let depth: u32 = parse_param("depth", &depth)?;
    let points = PointBuffer::from_le_bytes(&body)?;
    let tile = LodTile::build(points, depth)?;
    let blob = tile.encode()?;
    debug!(depth, points = tile.points().len(), bytes = blob.len(), "encoded lod tile");
    Ok(([(header::CONTENT_TYPE, "application/octet-stream")], blob).into_response())
}
