//! Error types for the core crate.

use thiserror::Error;

/// Errors that can occur in the core crate.
///
/// Every anticipated bad input is recoverable: the pipeline returns one of
/// these instead of producing partial output, and never panics. Retrying is
/// pointless for the caller since every stage is deterministic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The scalar buffer cannot form a whole number of points.
    #[error("malformed point buffer: {0}")]
    MalformedBuffer(String),

    /// A coordinate in the input buffer is NaN or infinite.
    #[error("non-finite coordinate at scalar index {index}: {value}")]
    NonFiniteCoordinate {
        /// Index of the offending scalar in the flat buffer.
        index: usize,
        /// The offending value.
        value: f32,
    },

    /// The requested depth cannot be partitioned over the key space.
    #[error("invalid LOD depth {depth}: {reason}")]
    InvalidDepth {
        /// The rejected depth.
        depth: u32,
        /// Why the depth cannot be used.
        reason: &'static str,
    },

    /// An encoding or decoding error occurred.
    #[error("encoding error: {0}")]
    Encoding(String),
}
