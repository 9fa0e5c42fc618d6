//! `lodcast` Raster
//!
//! A pure per-pixel raster kernel producing mandelbrot tiles for
//! slippy-map `zoom/x/y` coordinates. Each call renders one 256x256 RGBA
//! tile of the complex plane; there is no shared state and no I/O, so
//! tiles for concurrent requests can be rendered fully in parallel.
//!
//! # Example
//!
//! ```
//! use lodcast_raster::{mandelbrot, TileCoord, TILE_RESOLUTION};
//!
//! let tile = mandelbrot::render(TileCoord::new(1, 0, 1)?);
//! assert_eq!(tile.as_bytes().len(), TILE_RESOLUTION * TILE_RESOLUTION * 4);
//! # Ok::<(), lodcast_raster::RasterError>(())
//! ```

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod mandelbrot;
pub mod tile;

pub use error::RasterError;
pub use tile::{RgbaTile, TileCoord, TILE_RESOLUTION};
