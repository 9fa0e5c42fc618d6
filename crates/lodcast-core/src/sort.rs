//! The spatial locality sort.
//!
//! Sorting by Morton key places spatially adjacent points next to each
//! other in the buffer, which is what lets the LOD offset table address a
//! contiguous prefix per quadtree cell.

use crate::morton;
use crate::types::{Point, PointBuffer};

/// Reorder a point buffer by ascending Morton key.
///
/// Pure transform: the output holds exactly the same multiset of points as
/// the input. The sort is unstable — points with identical keys keep no
/// particular relative order. Identical keys always land in the same LOD
/// partition, so the offset table downstream does not depend on how ties
/// resolve; only the order of equal-key points within a partition may vary.
#[must_use]
pub fn by_locality(buffer: &PointBuffer) -> PointBuffer {
    let mut points: Vec<Point> = buffer.points().collect();
    points.sort_unstable_by_key(|point| morton::key(point.x, point.y));
    PointBuffer::from_points(&points)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn buffer(scalars: &[f32]) -> PointBuffer {
        PointBuffer::new(scalars.to_vec()).unwrap()
    }

    #[test]
    fn output_is_sorted_by_key() {
        let input = buffer(&[200.0, 200.0, 3.0, 1.0, 0.0, 0.0, 90.0, 14.0, 255.0, 255.0]);
        let sorted = by_locality(&input);
        let keys: Vec<u32> = sorted.points().map(|p| morton::key(p.x, p.y)).collect();
        assert!(keys.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn multiset_is_preserved() {
        let input = buffer(&[9.0, 9.0, 0.0, 0.0, 9.0, 9.0, 4.0, 2.0]);
        let sorted = by_locality(&input);
        assert_eq!(sorted.len(), input.len());

        let mut expected: Vec<(u32, u32)> =
            input.points().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
        let mut actual: Vec<(u32, u32)> =
            sorted.points().map(|p| (p.x.to_bits(), p.y.to_bits())).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn empty_buffer_sorts_to_empty() {
        let sorted = by_locality(&PointBuffer::empty());
        assert!(sorted.is_empty());
    }

    #[test]
    fn already_sorted_input_is_unchanged() {
        let input = buffer(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
        let sorted = by_locality(&input);
        assert_eq!(sorted.as_scalars(), input.as_scalars());
    }
}
