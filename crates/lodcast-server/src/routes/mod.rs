//! Request handlers.

pub mod lod;
pub mod mandelbrot;

use crate::error::ApiError;

/// Parse a path segment as a non-negative integer.
///
/// Path parameters are extracted as strings so that a malformed segment
/// produces the JSON error envelope instead of a plain-text rejection.
pub(crate) fn parse_param<T: std::str::FromStr>(name: &str, raw: &str) -> Result<T, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::new(format!("{name} parameter must be a non-negative integer, got {raw:?}"))
    })
}
