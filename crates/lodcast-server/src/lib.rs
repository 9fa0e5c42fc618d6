//! `lodcast` tile server library.
//!
//! The HTTP boundary over the pure cores: [`routes::lod`] exposes the
//! point-cloud LOD encoder, [`routes::mandelbrot`] the raster tile kernel,
//! and everything else falls through to the static asset directory. The
//! boundary owns all transport concerns — parameter parsing, the JSON
//! error envelope, content types — and the cores never see them.

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod routes;
pub mod server;
