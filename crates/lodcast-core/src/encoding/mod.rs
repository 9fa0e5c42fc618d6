//! Serialization for LOD tiles.
//!
//! This module provides the [`Encoder`] and [`Decoder`] traits and the
//! fixed-layout binary blob format for [`LodTile`](crate::lod::LodTile):
//! two 32-bit length-prefixed sections (point data, offset table) laid out
//! back to back. See [`blob`] for the exact layout.
//!
//! Encoding is total and reversible: decoding recovers the exact scalar and
//! offset sequences. There is no compression and no error correction.

pub mod blob;
mod traits;


pub use blob::BYTES_PER_OFFSET;
pub use traits::{Decoder, Encoder};
