//! Error types for the raster crate.

use thiserror::Error;

/// Errors that can occur validating raster tile requests.
#[derive(Debug, Error)]
pub enum RasterError {
    /// The zoom level exceeds the supported range.
    #[error("zoom level {zoom} exceeds the supported maximum of {max}")]
    ZoomOutOfRange {
        /// The rejected zoom level.
        zoom: u32,
        /// The largest accepted zoom level.
        max: u32,
    },

    /// A tile index does not exist at the given zoom level.
    #[error("tile {axis} = {value} out of range at zoom {zoom}: must be < {limit}")]
    CoordinateOutOfRange {
        /// Which axis was out of range (`"x"` or `"y"`).
        axis: &'static str,
        /// The rejected index.
        value: u64,
        /// The zoom level of the request.
        zoom: u32,
        /// The number of tiles per axis at that zoom level.
        limit: u64,
    },
}
