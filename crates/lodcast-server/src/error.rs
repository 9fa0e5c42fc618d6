//! The JSON error envelope for the HTTP boundary.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Body of an error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

/// An error that renders as the JSON error envelope.
///
/// Every request failure — malformed path parameters, malformed bodies,
/// core pipeline errors — maps to HTTP 500 with
/// `{"success": false, "error": "..."}`. The cores return plain error
/// values; this is the only place they are translated for transport.
#[derive(Debug)]
pub struct ApiError(String);

impl ApiError {
    /// Wrap a message in the envelope.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<lodcast_core::CoreError> for ApiError {
    fn from(err: lodcast_core::CoreError) -> Self {
        Self(err.to_string())
    }
}

impl From<lodcast_raster::RasterError> for ApiError {
    fn from(err: lodcast_raster::RasterError) -> Self {
        Self(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { success: false, error: self.0 };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
