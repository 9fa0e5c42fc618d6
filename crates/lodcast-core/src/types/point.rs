//! Point and point-buffer types.
//!
//! A [`PointBuffer`] is the unit of work for the whole pipeline: a flat,
//! even-length sequence of interleaved `x, y` scalars. Validation happens
//! once at construction — odd lengths and non-finite coordinates are
//! rejected here — so downstream stages can assume a whole number of finite
//! points and stay infallible.

use crate::error::CoreError;

/// Number of scalars per point (`x`, then `y`).
pub const SCALARS_PER_POINT: usize = 2;

/// Encoded size of one scalar in bytes (IEEE 754 single precision).
pub const BYTES_PER_SCALAR: usize = 4;

/// Encoded size of one point in bytes.
pub const BYTES_PER_POINT: usize = SCALARS_PER_POINT * BYTES_PER_SCALAR;

/// A single 2D point.
///
/// Points carry no identity beyond their coordinates; two points with equal
/// coordinates are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

/// A validated flat buffer of interleaved `x, y` scalars.
///
/// Invariants, established at construction:
///
/// - the scalar count is even (`len / 2` whole points), and
/// - every scalar is finite (no NaN, no infinities).
///
/// # Example
///
/// ```
/// use lodcast_core::PointBuffer;
///
/// let buffer = PointBuffer::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(buffer.len(), 2);
/// assert_eq!(buffer.byte_len(), 16);
///
/// // Odd-length input is rejected, not truncated
/// assert!(PointBuffer::new(vec![1.0, 2.0, 3.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointBuffer(Vec<f32>);

impl PointBuffer {
    /// Create a point buffer from a flat scalar sequence.
    ///
    /// # Errors
    ///
    /// Returns an error if the scalar count is odd or any scalar is NaN or
    /// infinite.
    pub fn new(scalars: Vec<f32>) -> Result<Self, CoreError> {
        if scalars.len() % SCALARS_PER_POINT != 0 {
            return Err(CoreError::MalformedBuffer(format!(
                "scalar count {} is odd; expected interleaved x,y pairs",
                scalars.len()
            )));
        }
        for (index, &value) in scalars.iter().enumerate() {
            if !value.is_finite() {
                return Err(CoreError::NonFiniteCoordinate { index, value });
            }
        }
        Ok(Self(scalars))
    }

    /// Create a point buffer from raw little-endian scalar bytes.
    ///
    /// This is the boundary-facing constructor: HTTP bodies and raw input
    /// files arrive as bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the byte length is not a multiple of the point
    /// size, or if any decoded scalar is non-finite.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.len() % BYTES_PER_POINT != 0 {
            return Err(CoreError::MalformedBuffer(format!(
                "byte length {} is not a multiple of the {BYTES_PER_POINT}-byte point size",
                bytes.len()
            )));
        }
        let scalars = bytes
            .chunks_exact(BYTES_PER_SCALAR)
            .map(|chunk| {
                let arr: [u8; BYTES_PER_SCALAR] = chunk.try_into().map_err(|_| {
                    CoreError::Encoding("failed to read f32 bytes".to_owned())
                })?;
                Ok(f32::from_le_bytes(arr))
            })
            .collect::<Result<Vec<f32>, CoreError>>()?;
        Self::new(scalars)
    }

    /// Create an empty point buffer.
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Rebuild a buffer from points known to come from a valid buffer.
    ///
    /// A permutation of a valid buffer is still valid, so this skips
    /// re-validation.
    pub(crate) fn from_points(points: &[Point]) -> Self {
        let mut scalars = Vec::with_capacity(points.len() * SCALARS_PER_POINT);
        for point in points {
            scalars.push(point.x);
            scalars.push(point.y);
        }
        Self(scalars)
    }

    /// Number of points in the buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len() / SCALARS_PER_POINT
    }

    /// Whether the buffer holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Encoded size of the buffer in bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.0.len() * BYTES_PER_SCALAR
    }

    /// The underlying flat scalar sequence.
    #[must_use]
    pub fn as_scalars(&self) -> &[f32] {
        &self.0
    }

    /// Consume the buffer and return the flat scalar sequence.
    #[must_use]
    pub fn into_scalars(self) -> Vec<f32> {
        self.0
    }

    /// Iterate over the points in buffer order.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.0.chunks_exact(SCALARS_PER_POINT).map(|pair| Point { x: pair[0], y: pair[1] })
    }
}
