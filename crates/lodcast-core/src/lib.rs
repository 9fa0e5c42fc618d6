//! `lodcast` Core
//!
//! This crate implements the point-cloud level-of-detail (LOD) pipeline:
//! given an unordered set of 2D points, it produces the points reordered by
//! spatial locality plus a lookup table of byte offsets into the reordered
//! buffer, one offset per quadtree partition at a chosen depth. A renderer
//! can then fetch only the prefix of the buffer needed to draw points up to
//! a given density level, without re-sorting or re-fetching at render time.
//!
//! # Pipeline
//!
//! Data flows strictly one way, and every stage is a pure function of its
//! inputs:
//!
//! 1. [`PointBuffer`] validates a flat buffer of interleaved `x, y` scalars.
//! 2. [`sort::by_locality`] reorders the points by Morton (Z-order) key.
//! 3. [`LodTile::build`] buckets the sorted points into `4^depth` equal-width
//!    ranges of key space and derives the per-partition byte offsets.
//! 4. [`Encoder::encode`](encoding::Encoder::encode) serializes the sorted
//!    buffer and the offset table into one self-describing blob.
//!
//! # Example
//!
//! ```
//! use lodcast_core::encoding::{Decoder, Encoder};
//! use lodcast_core::{LodTile, PointBuffer};
//!
//! let points = PointBuffer::new(vec![0.0, 0.0, 1.0, 1.0, 0.5, 0.5])?;
//! let tile = LodTile::build(points, 1)?;
//!
//! // One offset per partition at depth 1
//! assert_eq!(tile.offsets().len(), 4);
//!
//! // The blob round-trips exactly
//! let blob = tile.encode()?;
//! assert_eq!(LodTile::decode(&blob)?, tile);
//! # Ok::<(), lodcast_core::CoreError>(())
//! ```
//!
//! # Modules
//!
//! - [`types`] - Point and point-buffer types
//! - [`morton`] - Morton (Z-order) locality keys
//! - [`sort`] - The spatial locality sort
//! - [`lod`] - Partitioning and offset tables
//! - [`encoding`] - The binary tile blob format
//! - [`error`] - Error types ([`CoreError`])

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod encoding;
pub mod error;
pub mod lod;
pub mod morton;
pub mod sort;
pub mod types;

// Re-export commonly used types
pub use encoding::{Decoder, Encoder};
pub use error::CoreError;
pub use lod::{encode_lod, LodTile, OffsetTable};
pub use types::{Point, PointBuffer};
