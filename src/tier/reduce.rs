use crate::{
    feature::{Feature, FeatureCollection, Geometry},
    geom::decimate_ring,
};
use super::Profile;

/// Coordinate counts before and after reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointStats {
    pub original: usize,
    pub optimized: usize,
}

impl PointStats {
    /// Number of coordinates dropped.
    #[inline] pub fn removed(&self) -> usize { self.original.saturating_sub(self.optimized) }

    /// Percentage of coordinates dropped, 0 for an empty source.
    pub fn reduction_percent(&self) -> f64 {
        if self.original == 0 { return 0.0 }
        self.removed() as f64 / self.original as f64 * 100.0
    }
}

/// One reduced copy of a collection.
#[derive(Debug, Clone)]
pub struct Reduction {
    pub collection: FeatureCollection,
    pub stats: PointStats,
}

/// Produce a reduced copy of `source` for `profile`, always starting from the source geometry.
pub fn reduce_collection(source: &FeatureCollection, profile: &Profile) -> Reduction {
    let stride = profile.stride();
    let features: Vec<Feature> = source.features.iter()
        .map(|feature| Feature {
            id: feature.id.clone(),
            properties: profile.property_filter.apply(feature.properties.as_ref()),
            geometry: feature.geometry.as_ref().map(|geometry| reduce_geometry(geometry, stride)),
        })
        .collect();

    let collection = FeatureCollection::new(features);
    let stats = PointStats { original: source.point_count(), optimized: collection.point_count() };
    Reduction { collection, stats }
}

/// Decimate every ring of every polygon; unrecognized geometries are copied unchanged.
fn reduce_geometry(geometry: &Geometry, stride: usize) -> Geometry {
    match geometry {
        Geometry::Polygon(rings) => Geometry::Polygon(
            rings.iter().map(|ring| decimate_ring(ring, stride)).collect()
        ),
        Geometry::MultiPolygon(polygons) => Geometry::MultiPolygon(
            polygons.iter()
                .map(|rings| rings.iter().map(|ring| decimate_ring(ring, stride)).collect())
                .collect()
        ),
        Geometry::Other(value) => Geometry::Other(value.clone()),
    }
}
