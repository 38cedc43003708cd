use geo::LineString;
use serde_json::{Map, Value};

/// One closed boundary loop of a polygon, as `(lon, lat)` coordinates.
pub type Ring = LineString<f64>;

/// Geometry variants recognized by the reducer and sampler.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    /// Outer ring first, followed by any holes.
    Polygon(Vec<Ring>),
    /// One ring list per sub-polygon.
    MultiPolygon(Vec<Vec<Ring>>),
    /// Any other GeoJSON geometry, kept verbatim.
    Other(Value),
}

impl Geometry {
    /// GeoJSON type name of this geometry.
    pub fn type_name(&self) -> &str {
        match self {
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::Other(value) => value.get("type").and_then(Value::as_str).unwrap_or("Unknown"),
        }
    }

    /// Iterate over every ring of every polygon (holes included).
    pub fn rings(&self) -> Box<dyn Iterator<Item = &Ring> + '_> {
        match self {
            Geometry::Polygon(rings) => Box::new(rings.iter()),
            Geometry::MultiPolygon(polygons) => Box::new(polygons.iter().flatten()),
            Geometry::Other(_) => Box::new(std::iter::empty()),
        }
    }

    /// Total number of coordinates across all rings; zero for unrecognized types.
    pub fn point_count(&self) -> usize {
        self.rings().map(|ring| ring.0.len()).sum()
    }
}

/// A single GeoJSON feature.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feature {
    pub id: Option<Value>,
    pub properties: Option<Map<String, Value>>,
    pub geometry: Option<Geometry>,
}

impl Feature {
    /// Look up a property as a display string (strings verbatim, numbers formatted).
    pub fn property_str(&self, key: &str) -> Option<String> {
        match self.properties.as_ref()?.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// District identifier, or empty string when absent.
    pub fn district_id(&self) -> String {
        self.property_str("DISTRICT_I").unwrap_or_default()
    }

    /// District display name, or "Unknown District" when absent.
    pub fn district_name(&self) -> String {
        self.property_str("DISTRICT_N").unwrap_or_else(|| "Unknown District".to_string())
    }
}

/// An ordered sequence of features. Order is preserved by every derived artifact.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    pub fn new(features: Vec<Feature>) -> Self { Self { features } }

    #[inline] pub fn len(&self) -> usize { self.features.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// Sum of all ring lengths across all features.
    pub fn point_count(&self) -> usize {
        self.features.iter()
            .filter_map(|feature| feature.geometry.as_ref())
            .map(Geometry::point_count)
            .sum()
    }
}

/// Build a ring from `(lon, lat)` pairs.
#[cfg(test)]
pub(crate) fn ring_from(coords: &[(f64, f64)]) -> Ring {
    LineString(coords.iter().map(|&(x, y)| geo::Coord { x, y }).collect())
}
