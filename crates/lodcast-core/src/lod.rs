//! LOD partitioning and offset tables.
//!
//! The key space `[0, MAX_KEY]` is split into `4^depth` contiguous,
//! equal-width partitions — one per quadtree cell at that depth. For each
//! partition the table records the byte offset (into the encoded point
//! buffer) of the partition's earliest point in sort order, so a renderer
//! can draw everything up to a given quadtree cell by fetching a single
//! contiguous prefix.
//!
//! Offsets are derived in two explicit passes over the sorted buffer:
//!
//! 1. **Assign representatives.** Scan the points from last to first and
//!    record each point's byte offset under its partition index. Later
//!    writes overwrite earlier ones, and the scan runs in reverse, so the
//!    value that survives for each partition is the offset of its earliest
//!    member.
//! 2. **Back-fill empties.** Scan the partitions from highest to lowest;
//!    a partition with no points takes the offset of its successor, and an
//!    empty highest partition takes the total byte length of the buffer
//!    (render everything — no higher-detail data exists beyond it).
//!
//! Slots are `Option<u32>` until back-fill completes, so an unresolved
//! entry cannot leak into a finished [`OffsetTable`].

use crate::encoding::Encoder;
use crate::error::CoreError;
use crate::morton;
use crate::sort;
use crate::types::{PointBuffer, BYTES_PER_POINT};

/// Byte offsets into an encoded point buffer, one per quadtree partition.
///
/// Entries are non-decreasing in partition order, and every entry is
/// bounded by the total byte length of the buffer it indexes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OffsetTable(Vec<u32>);

impl OffsetTable {
    /// Build a table from fully resolved offsets.
    pub(crate) fn from_resolved(offsets: Vec<u32>) -> Self {
        Self(offsets)
    }

    /// Number of partitions in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table has no partitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The offsets in partition order.
    #[must_use]
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Consume the table and return the offsets.
    #[must_use]
    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }
}

/// A locality-sorted point buffer paired with its partition offset table.
///
/// This is the unit the [`encoding`](crate::encoding) module serializes.
/// Constructed fresh per invocation; nothing is shared or mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct LodTile {
    points: PointBuffer,
    offsets: OffsetTable,
}

impl LodTile {
    /// Sort `points` by spatial locality and derive the offset table for
    /// `depth`.
    ///
    /// `depth` selects `4^depth` partitions; depth 0 yields a single
    /// partition spanning the whole key space.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidDepth`] if the partition count overflows
    /// or the partition stride underflows to zero, and
    /// [`CoreError::Encoding`] if the buffer is too large for 4-byte
    /// offsets.
    pub fn build(points: PointBuffer, depth: u32) -> Result<Self, CoreError> {
        let sorted = sort::by_locality(&points);
        let offsets = partition(&sorted, depth)?;
        Ok(Self { points: sorted, offsets })
    }

    /// Reassemble a tile from decoded parts.
    pub(crate) fn from_parts(points: PointBuffer, offsets: OffsetTable) -> Self {
        Self { points, offsets }
    }

    /// The locality-sorted point buffer.
    #[must_use]
    pub fn points(&self) -> &PointBuffer {
        &self.points
    }

    /// The partition offset table.
    #[must_use]
    pub fn offsets(&self) -> &OffsetTable {
        &self.offsets
    }

    /// Consume the tile and return its parts.
    #[must_use]
    pub fn into_parts(self) -> (PointBuffer, OffsetTable) {
        (self.points, self.offsets)
    }
}

/// Sort, partition, and encode a flat scalar buffer in one call.
///
/// # Errors
///
/// Returns an error for malformed input, an invalid depth, or a buffer
/// exceeding the encodable size.
pub fn encode_lod(scalars: Vec<f32>, depth: u32) -> Result<Vec<u8>, CoreError> {
    let points = PointBuffer::new(scalars)?;
    LodTile::build(points, depth)?.encode()
}

/// Number of partitions at `depth`, or `None` if `4^depth` overflows.
fn partition_count(depth: u32) -> Option<u32> {
    if depth < 16 {
        Some(1u32 << (2 * depth))
    } else {
        None
    }
}

/// Derive the offset table for an already-sorted buffer.
fn partition(sorted: &PointBuffer, depth: u32) -> Result<OffsetTable, CoreError> {
    let count = partition_count(depth).ok_or(CoreError::InvalidDepth {
        depth,
        reason: "partition count overflows the 32-bit key space",
    })?;
    let stride = morton::MAX_KEY / count;
    if stride == 0 {
        return Err(CoreError::InvalidDepth {
            depth,
            reason: "partition stride underflows to zero",
        });
    }
    // Offsets are encoded as u32; reject a buffer they cannot address
    // before computing any of them.
    let total = u32::try_from(sorted.byte_len()).map_err(|_| {
        CoreError::Encoding("point buffer byte length exceeds the 4-byte offset range".to_owned())
    })?;

    let keys: Vec<u32> = sorted.points().map(|point| morton::key(point.x, point.y)).collect();

    // Pass 1: reverse scan, so the surviving offset per partition is the
    // offset of its earliest point in sort order.
    let mut slots: Vec<Option<u32>> = vec![None; count as usize];
    for index in (0..keys.len()).rev() {
        let partition = (keys[index] / stride).min(count - 1) as usize;
        slots[partition] = Some((index * BYTES_PER_POINT) as u32);
    }

    // Pass 2: back-fill empty partitions from their successor, seeding the
    // highest partition with the total byte length.
    let mut resolved = vec![0u32; slots.len()];
    let mut next = total;
    for (index, slot) in slots.iter().enumerate().rev() {
        let offset = slot.unwrap_or(next);
        resolved[index] = offset;
        next = offset;
    }

    Ok(OffsetTable::from_resolved(resolved))
}
