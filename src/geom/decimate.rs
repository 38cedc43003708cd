use geo::LineString;

use crate::feature::Ring;

/// Rings with at most this many coordinates are never decimated.
pub const MIN_DECIMATE_LEN: usize = 10;

/// Fixed-stride ring decimation.
///
/// Keeps interior positions `0, stride, 2*stride, ...` below the last index,
/// then appends the last coordinate so a closed ring stays closed.
pub fn decimate_ring(ring: &Ring, stride: usize) -> Ring {
    let coords = &ring.0;
    if coords.len() <= MIN_DECIMATE_LEN || stride <= 1 {
        return ring.clone();
    }

    let last = coords.len() - 1;
    let mut kept = Vec::with_capacity(last / stride + 2);
    kept.extend(coords[..last].iter().step_by(stride).copied());
    kept.push(coords[last]);
    LineString(kept)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::feature::ring_from;

    #[test]
    fn short_square_is_left_alone() {
        let square = ring_from(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
        assert_eq!(decimate_ring(&square, 2), square);
    }

    #[test]
    fn stride_two_keeps_even_positions_and_closure() {
        let coords: Vec<(f64, f64)> = (0..12).map(|i| (i as f64, 0.0)).chain([(0.0, 0.0)]).collect();
        let ring = ring_from(&coords);
        let out = decimate_ring(&ring, 2);
        let xs: Vec<f64> = out.0.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 0.0]);
    }

    #[test]
    fn stride_one_is_identity() {
        let ring = ring_from(&(0..30).map(|i| (i as f64, i as f64)).collect::<Vec<_>>());
        assert_eq!(decimate_ring(&ring, 1), ring);
    }

    proptest! {
        #[test]
        fn long_rings_keep_endpoints_and_shrink(len in 11usize..300, stride in 2usize..25) {
            let coords: Vec<(f64, f64)> = (0..len).map(|i| (i as f64, -(i as f64))).collect();
            let ring = ring_from(&coords);
            let out = decimate_ring(&ring, stride);
            prop_assert_eq!(out.0.first(), ring.0.first());
            prop_assert_eq!(out.0.last(), ring.0.last());
            prop_assert!(out.0.len() < ring.0.len());
            prop_assert_eq!(out.0.len(), (len - 1).div_ceil(stride) + 1);
        }

        #[test]
        fn short_rings_are_identity(len in 0usize..=10, stride in 1usize..25) {
            let coords: Vec<(f64, f64)> = (0..len).map(|i| (i as f64, 0.5)).collect();
            let ring = ring_from(&coords);
            prop_assert_eq!(decimate_ring(&ring, stride), ring);
        }
    }
}
