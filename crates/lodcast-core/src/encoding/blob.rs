//! The tile blob layout.
//!
//! # Format
//!
//! A blob is two length-prefixed sections laid out back to back:
//!
//! - `data_len`: 4 bytes, little-endian u32 — byte length of the point section
//! - `offsets_len`: 4 bytes, little-endian u32 — byte length of the offset section
//! - `data`: `data_len` bytes — the sorted scalars, each a little-endian IEEE 754 f32
//! - `offsets`: `offsets_len` bytes — the offset table, each entry a little-endian u32
//!
//! Offsets are encoded as u32 because every valid entry is bounded by
//! `data_len`, which is itself a u32 by format.
//!
//! # Decoder contract
//!
//! Decoding checks structure, not semantics: truncated input, section
//! lengths that do not divide into whole points or offsets, trailing bytes,
//! and non-finite scalars in the data section are all format errors. It
//! does not re-derive or verify the offset values themselves.

use crate::error::CoreError;
use crate::lod::{LodTile, OffsetTable};
use crate::types::{PointBuffer, BYTES_PER_POINT};

use super::traits::{Decoder, Encoder};

/// Encoded size of one offset table entry in bytes.
pub const BYTES_PER_OFFSET: usize = 4;

/// Size of the two length prefixes in bytes.
const HEADER_LEN: usize = 8;

impl Encoder for LodTile {
    fn encode(&self) -> Result<Vec<u8>, CoreError> {
        let mut buf = Vec::new();
        self.encode_to(&mut buf)?;
        Ok(buf)
    }

    fn encode_to(&self, buf: &mut Vec<u8>) -> Result<(), CoreError> {
        // Both lengths must fit their 4-byte prefixes before anything is
        // written; no partial output on failure.
        let data_len = u32::try_from(self.points().byte_len()).map_err(|_| {
            CoreError::Encoding("point section too long for the length header".to_owned())
        })?;
        let offsets_len =
            u32::try_from(self.offsets().len() * BYTES_PER_OFFSET).map_err(|_| {
                CoreError::Encoding("offset section too long for the length header".to_owned())
            })?;

        buf.reserve(HEADER_LEN + data_len as usize + offsets_len as usize);
        buf.extend_from_slice(&data_len.to_le_bytes());
        buf.extend_from_slice(&offsets_len.to_le_bytes());
        for scalar in self.points().as_scalars() {
            buf.extend_from_slice(&scalar.to_le_bytes());
        }
        for offset in self.offsets().as_slice() {
            buf.extend_from_slice(&offset.to_le_bytes());
        }
        Ok(())
    }
}

impl Decoder for LodTile {
    fn decode(bytes: &[u8]) -> Result<Self, CoreError> {
        if bytes.len() < HEADER_LEN {
            return Err(CoreError::Encoding("unexpected end of input".to_owned()));
        }
        let data_len = read_u32(bytes, 0)? as usize;
        let offsets_len = read_u32(bytes, 4)? as usize;

        if data_len % BYTES_PER_POINT != 0 {
            return Err(CoreError::Encoding(format!(
                "data section length {data_len} is not a multiple of the point size"
            )));
        }
        if offsets_len % BYTES_PER_OFFSET != 0 {
            return Err(CoreError::Encoding(format!(
                "offset section length {offsets_len} is not a multiple of the entry size"
            )));
        }

        let expected = HEADER_LEN
            .checked_add(data_len)
            .and_then(|n| n.checked_add(offsets_len))
            .ok_or_else(|| {
                CoreError::Encoding("section lengths exceed platform capacity".to_owned())
            })?;
        if bytes.len() < expected {
            return Err(CoreError::Encoding("unexpected end of input".to_owned()));
        }
        if bytes.len() > expected {
            return Err(CoreError::Encoding(format!(
                "{} trailing bytes after the offset section",
                bytes.len() - expected
            )));
        }

        let points = PointBuffer::from_le_bytes(&bytes[HEADER_LEN..HEADER_LEN + data_len])?;

        let offset_bytes = &bytes[HEADER_LEN + data_len..expected];
        let mut offsets = Vec::with_capacity(offsets_len / BYTES_PER_OFFSET);
        for index in 0..offsets_len / BYTES_PER_OFFSET {
            offsets.push(read_u32(offset_bytes, index * BYTES_PER_OFFSET)?);
        }

        Ok(Self::from_parts(points, OffsetTable::from_resolved(offsets)))
    }
}

/// Read a little-endian u32 at `offset`.
fn read_u32(bytes: &[u8], offset: usize) -> Result<u32, CoreError> {
    let end = offset
        .checked_add(4)
        .filter(|&end| end <= bytes.len())
        .ok_or_else(|| CoreError::Encoding("unexpected end of input".to_owned()))?;
    let arr: [u8; 4] = bytes[offset..end]
        .try_into()
        .map_err(|_| CoreError::Encoding("failed to read u32 bytes".to_owned()))?;
    Ok(u32::from_le_bytes(arr))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::PointBuffer;

    fn tile(scalars: &[f32], depth: u32) -> LodTile {
        LodTile::build(PointBuffer::new(scalars.to_vec()).unwrap(), depth).unwrap()
    }

    #[test]
    fn empty_tile_layout() {
        let encoded = tile(&[], 0).encode().unwrap();
        // data_len = 0, offsets_len = 4, one zero offset
        assert_eq!(encoded, vec![0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn single_point_layout() {
        let encoded = tile(&[1.0, 2.0], 0).encode().unwrap();
        let mut expected = Vec::new();
        expected.extend_from_slice(&8u32.to_le_bytes());
        expected.extend_from_slice(&4u32.to_le_bytes());
        expected.extend_from_slice(&1.0f32.to_le_bytes());
        expected.extend_from_slice(&2.0f32.to_le_bytes());
        // The single depth-0 partition records its earliest point's offset
        expected.extend_from_slice(&0u32.to_le_bytes());
        assert_eq!(encoded, expected);
    }

    #[test]
    fn roundtrip_depth_one() {
        let original = tile(&[0.0, 0.0, 1.0, 1.0, 0.5, 0.5], 1);
        let encoded = original.encode().unwrap();
        let decoded = LodTile::decode(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decode_empty_input() {
        assert!(LodTile::decode(&[]).is_err());
    }

    #[test]
    fn decode_truncated_header() {
        assert!(LodTile::decode(&[1, 0, 0]).is_err());
    }

    #[test]
    fn decode_truncated_data_section() {
        // Claims 8 data bytes and 4 offset bytes but carries neither
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&8u32.to_le_bytes());
        bytes.extend_from_slice(&4u32.to_le_bytes());
        assert!(LodTile::decode(&bytes).is_err());
    }

    #[test]
    fn decode_trailing_bytes() {
        let mut encoded = tile(&[1.0, 2.0], 0).encode().unwrap();
        encoded.push(0xFF);
        let result = LodTile::decode(&encoded);
        assert!(matches!(result, Err(CoreError::Encoding(_))));
    }

    #[test]
    fn decode_ragged_data_length() {
        // data_len = 4 is one scalar, half a point
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&1.0f32.to_le_bytes());
        assert!(LodTile::decode(&bytes).is_err());
    }

    #[test]
    fn decode_ragged_offsets_length() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&3u32.to_le_bytes());
        bytes.extend_from_slice(&[0, 0, 0]);
        assert!(LodTile::decode(&bytes).is_err());
    }

    #[test]
    fn decode_rejects_non_finite_data() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&8u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&f32::NAN.to_le_bytes());
        bytes.extend_from_slice(&1.0f32.to_le_bytes());
        assert!(LodTile::decode(&bytes).is_err());
    }
}
