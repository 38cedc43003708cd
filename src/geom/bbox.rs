use geo::Coord;

use crate::feature::Geometry;
use super::GeometryError;

/// Minimal axis-aligned box enclosing a set of `(lon, lat)` coordinates, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

impl BoundingBox {
    /// Midpoint of the box as `(lat, lng)`.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        ((self.south + self.north) / 2.0, (self.west + self.east) / 2.0)
    }

    /// Check whether `(lat, lng)` lies inside the box, edges included.
    #[inline]
    pub fn contains(&self, lat: f64, lng: f64) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }

    /// Smallest box enclosing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            south: self.south.min(other.south),
            north: self.north.max(other.north),
            west: self.west.min(other.west),
            east: self.east.max(other.east),
        }
    }
}

/// Fold a coordinate sequence into its bounding box.
/// Empty input, NaN/infinite coordinates, and boxes whose span or midpoint
/// is not representable are rejected.
pub fn bounding_box<'a>(coords: impl IntoIterator<Item = &'a Coord<f64>>) -> Result<BoundingBox, GeometryError> {
    let mut bbox: Option<BoundingBox> = None;
    for c in coords {
        if !c.x.is_finite() || !c.y.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate { x: c.x, y: c.y });
        }
        let point = BoundingBox { south: c.y, north: c.y, west: c.x, east: c.x };
        bbox = Some(match bbox {
            Some(b) => b.union(&point),
            None => point,
        });
    }
    let bbox = bbox.ok_or(GeometryError::EmptyGeometry)?;
    let (lat, lng) = bbox.center();
    let spans = (bbox.north - bbox.south, bbox.east - bbox.west);
    if !(spans.0.is_finite() && spans.1.is_finite() && lat.is_finite() && lng.is_finite()) {
        let BoundingBox { south, north, west, east } = bbox;
        return Err(GeometryError::ExtentOverflow { south, north, west, east });
    }
    Ok(bbox)
}

/// Bounding box of a polygonal geometry's outer ring(s). Holes are ignored.
/// For a MultiPolygon the outer rings of every sub-polygon are bounded together.
pub fn polygon_bounding_box(geometry: &Geometry) -> Result<BoundingBox, GeometryError> {
    match geometry {
        Geometry::Polygon(rings) => {
            let outer = rings.first().ok_or(GeometryError::EmptyGeometry)?;
            bounding_box(outer.0.iter())
        }
        Geometry::MultiPolygon(polygons) => {
            bounding_box(polygons.iter().filter_map(|rings| rings.first()).flat_map(|ring| ring.0.iter()))
        }
        other => Err(GeometryError::Unsupported(other.type_name().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::feature::ring_from;

    #[test]
    fn bounding_box_tracks_extremes() {
        let ring = ring_from(&[(-97.0, 32.5), (-96.5, 33.0), (-96.8, 32.7), (-97.0, 32.5)]);
        let bbox = bounding_box(ring.0.iter()).unwrap();
        assert_eq!(bbox, BoundingBox { south: 32.5, north: 33.0, west: -97.0, east: -96.5 });
    }

    #[test]
    fn bounding_box_rejects_empty_and_nan() {
        assert_eq!(bounding_box(std::iter::empty()), Err(GeometryError::EmptyGeometry));
        let ring = ring_from(&[(0.0, 0.0), (f64::NAN, 1.0)]);
        assert!(matches!(bounding_box(ring.0.iter()), Err(GeometryError::NonFiniteCoordinate { .. })));
    }

    #[test]
    fn bounding_box_rejects_overflowing_extent() {
        let wide = ring_from(&[(-1e308, 0.0), (1e308, 0.0), (1e308, 1.0), (-1e308, 0.0)]);
        assert!(matches!(bounding_box(wide.0.iter()), Err(GeometryError::ExtentOverflow { .. })));

        // Zero span, but the midpoint sum overflows.
        let far = ring_from(&[(1.7e308, 0.0), (1.7e308, 1.0), (1.7e308, 0.0)]);
        assert!(matches!(bounding_box(far.0.iter()), Err(GeometryError::ExtentOverflow { .. })));

        let huge_but_fine = ring_from(&[(-1e307, -1e307), (1e307, 1e307), (-1e307, -1e307)]);
        assert!(bounding_box(huge_but_fine.0.iter()).is_ok());
    }

    #[test]
    fn polygon_box_ignores_holes() {
        let outer = ring_from(&[(0.0, 0.0), (0.0, 4.0), (4.0, 4.0), (4.0, 0.0), (0.0, 0.0)]);
        let hole = ring_from(&[(-10.0, -10.0), (-10.0, 10.0), (10.0, 10.0), (-10.0, -10.0)]);
        let bbox = polygon_bounding_box(&Geometry::Polygon(vec![outer, hole])).unwrap();
        assert_eq!(bbox, BoundingBox { south: 0.0, north: 4.0, west: 0.0, east: 4.0 });
    }

    #[test]
    fn multipolygon_box_spans_all_outer_rings() {
        let a = ring_from(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.0, 0.0)]);
        let b = ring_from(&[(5.0, 5.0), (5.0, 6.0), (6.0, 6.0), (5.0, 5.0)]);
        let bbox = polygon_bounding_box(&Geometry::MultiPolygon(vec![vec![a], vec![b]])).unwrap();
        assert_eq!(bbox, BoundingBox { south: 0.0, north: 6.0, west: 0.0, east: 6.0 });
    }

    #[test]
    fn polygon_box_errors_on_missing_rings_and_other_types() {
        assert_eq!(polygon_bounding_box(&Geometry::Polygon(vec![])), Err(GeometryError::EmptyGeometry));
        assert_eq!(polygon_bounding_box(&Geometry::MultiPolygon(vec![])), Err(GeometryError::EmptyGeometry));
        assert_eq!(
            polygon_bounding_box(&Geometry::Other(json!({ "type": "LineString" }))),
            Err(GeometryError::Unsupported("LineString".into())),
        );
    }
}
