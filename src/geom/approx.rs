use crate::feature::Geometry;
use super::{bounding_box, polygon_bounding_box, GeometryError};

/// Midpoint of the geometry's bounding box as `(lat, lng)`.
///
/// This is not the area centroid and may fall outside a concave polygon.
pub fn approximate_center(geometry: &Geometry) -> Result<(f64, f64), GeometryError> {
    Ok(polygon_bounding_box(geometry)?.center())
}

/// Bounding-box containment test for `(lat, lng)`.
///
/// A Polygon contains the point when its outer ring's box does; a MultiPolygon
/// when the box of any sub-polygon does. Points in concave regions outside the
/// real boundary are accepted. Geometries whose box cannot be computed contain nothing.
pub fn contains_approx(point: (f64, f64), geometry: &Geometry) -> bool {
    let (lat, lng) = point;
    match geometry {
        Geometry::Polygon(_) => polygon_bounding_box(geometry)
            .is_ok_and(|bbox| bbox.contains(lat, lng)),
        Geometry::MultiPolygon(polygons) => polygons.iter()
            .filter_map(|rings| rings.first())
            .filter_map(|outer| bounding_box(outer.0.iter()).ok())
            .any(|bbox| bbox.contains(lat, lng)),
        Geometry::Other(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::feature::{ring_from, Ring};

    fn l_shape() -> Geometry {
        // Concave: the (lat 3, lng 3) corner is outside the shape but inside its box.
        Geometry::Polygon(vec![ring_from(&[
            (0.0, 0.0), (0.0, 4.0), (2.0, 4.0), (2.0, 2.0), (4.0, 2.0), (4.0, 0.0), (0.0, 0.0),
        ])])
    }

    #[test]
    fn center_is_box_midpoint_not_centroid() {
        assert_eq!(approximate_center(&l_shape()), Ok((2.0, 2.0)));
    }

    #[test]
    fn containment_accepts_concave_gap() {
        assert!(contains_approx((3.0, 3.0), &l_shape()));
        assert!(!contains_approx((5.0, 1.0), &l_shape()));
    }

    #[test]
    fn multipolygon_containment_checks_each_part() {
        let a = ring_from(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0), (0.0, 0.0)]);
        let b = ring_from(&[(9.0, 9.0), (9.0, 10.0), (10.0, 10.0), (10.0, 9.0), (9.0, 9.0)]);
        let geometry = Geometry::MultiPolygon(vec![vec![a], vec![b]]);
        assert!(contains_approx((0.5, 0.5), &geometry));
        assert!(contains_approx((9.5, 9.5), &geometry));
        // Inside the combined box, outside both parts.
        assert!(!contains_approx((5.0, 5.0), &geometry));
    }

    #[test]
    fn degenerate_geometry_contains_nothing() {
        assert!(!contains_approx((0.0, 0.0), &Geometry::Polygon(vec![])));
        assert!(!contains_approx((0.0, 0.0), &Geometry::MultiPolygon(vec![vec![]])));
    }

    proptest! {
        #[test]
        fn center_lies_in_box_and_is_contained(
            pts in prop::collection::vec((-180.0f64..180.0, -90.0f64..90.0), 3..40)
        ) {
            let mut coords = pts.clone();
            coords.push(pts[0]);
            let geometry = Geometry::Polygon(vec![ring_from(&coords)]);
            let bbox = polygon_bounding_box(&geometry).unwrap();
            let (lat, lng) = approximate_center(&geometry).unwrap();
            prop_assert!(bbox.contains(lat, lng));
            prop_assert!(contains_approx((lat, lng), &geometry));
        }

        #[test]
        fn single_part_multipolygon_contains_its_center(
            pts in prop::collection::vec((-180.0f64..180.0, -90.0f64..90.0), 3..40)
        ) {
            let mut coords = pts.clone();
            coords.push(pts[0]);
            let geometry = Geometry::MultiPolygon(vec![vec![ring_from(&coords)]]);
            let bbox = polygon_bounding_box(&geometry).unwrap();
            let (lat, lng) = approximate_center(&geometry).unwrap();
            prop_assert!(bbox.contains(lat, lng));
            prop_assert!(contains_approx((lat, lng), &geometry));
        }

        #[test]
        fn multipolygon_center_in_combined_box_and_contained_per_part(
            parts in prop::collection::vec(
                prop::collection::vec((-180.0f64..180.0, -90.0f64..90.0), 3..12),
                1..5,
            )
        ) {
            let polygons: Vec<Vec<Ring>> = parts.iter()
                .map(|pts| {
                    let mut coords = pts.clone();
                    coords.push(pts[0]);
                    vec![ring_from(&coords)]
                })
                .collect();
            let part_boxes: Vec<_> = polygons.iter()
                .map(|rings| bounding_box(rings[0].0.iter()).unwrap())
                .collect();
            let geometry = Geometry::MultiPolygon(polygons);

            let bbox = polygon_bounding_box(&geometry).unwrap();
            let (lat, lng) = approximate_center(&geometry).unwrap();
            prop_assert!(bbox.contains(lat, lng));
            for part in &part_boxes {
                prop_assert!(bbox.contains(part.south, part.west) && bbox.contains(part.north, part.east));
            }
            // Disjoint parts can leave the combined midpoint outside every part's box.
            let in_some_part = part_boxes.iter().any(|part| part.contains(lat, lng));
            prop_assert_eq!(contains_approx((lat, lng), &geometry), in_some_part);
        }
    }
}
