//! Core data types.

mod point;

pub use point::{Point, PointBuffer, BYTES_PER_POINT, BYTES_PER_SCALAR, SCALARS_PER_POINT};
