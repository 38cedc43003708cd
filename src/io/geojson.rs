use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString};
use serde_json::{json, Map, Value};

use crate::feature::{Feature, FeatureCollection, Geometry, Ring};

impl FeatureCollection {
    /// Build a FeatureCollection from a parsed GeoJSON value.
    /// Polygon and MultiPolygon coordinates are validated; other geometry types are kept verbatim.
    pub fn from_geojson(value: &Value) -> Result<Self> {
        if value["type"].as_str() != Some("FeatureCollection") {
            bail!("Expected a GeoJSON FeatureCollection, found type {}", value["type"]);
        }
        let features = value["features"].as_array()
            .ok_or_else(|| anyhow!("FeatureCollection is missing a features array"))?;

        let features = features.iter().enumerate()
            .map(|(idx, feature)| parse_feature(feature)
                .with_context(|| format!("Invalid feature at index {idx}")))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { features })
    }

    /// Export as a GeoJSON FeatureCollection value, preserving feature order.
    pub fn to_geojson(&self) -> Value {
        json!({
            "type": "FeatureCollection",
            "features": self.features.iter().map(feature_to_geojson).collect::<Vec<_>>(),
        })
    }
}

fn parse_feature(value: &Value) -> Result<Feature> {
    let object = value.as_object()
        .ok_or_else(|| anyhow!("Feature must be a JSON object"))?;

    let properties = match object.get("properties") {
        None | Some(Value::Null) => None,
        Some(Value::Object(map)) => Some(map.clone()),
        Some(other) => bail!("Feature properties must be an object, found {other}"),
    };

    let geometry = match object.get("geometry") {
        None | Some(Value::Null) => None,
        Some(geometry) => Some(parse_geometry(geometry)?),
    };

    Ok(Feature { id: object.get("id").cloned(), properties, geometry })
}

fn parse_geometry(value: &Value) -> Result<Geometry> {
    match value["type"].as_str() {
        Some("Polygon") => Ok(Geometry::Polygon(parse_polygon(&value["coordinates"])?)),
        Some("MultiPolygon") => {
            let polygons = value["coordinates"].as_array()
                .ok_or_else(|| anyhow!("Invalid MultiPolygon: coordinates must be an array"))?;
            Ok(Geometry::MultiPolygon(polygons.iter().map(parse_polygon).collect::<Result<_>>()?))
        }
        _ => Ok(Geometry::Other(value.clone())),
    }
}

/// Parse polygon coordinates: `[outer, hole, ...]`, each ring `[[x, y], ...]`.
fn parse_polygon(value: &Value) -> Result<Vec<Ring>> {
    let rings = value.as_array()
        .ok_or_else(|| anyhow!("Invalid Polygon: rings must be an array"))?;
    rings.iter().map(parse_ring).collect()
}

/// Parse a ring, keeping only the first two ordinates of each position.
fn parse_ring(value: &Value) -> Result<Ring> {
    let positions = value.as_array()
        .ok_or_else(|| anyhow!("Invalid ring: positions must be an array"))?;

    let mut points = Vec::with_capacity(positions.len());
    for position in positions {
        let pair = position.as_array()
            .filter(|pair| pair.len() >= 2)
            .ok_or_else(|| anyhow!("Invalid coordinate: expected [x, y], found {position}"))?;
        let x = pair[0].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
        let y = pair[1].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
        points.push(Coord { x, y });
    }

    Ok(LineString(points))
}

fn feature_to_geojson(feature: &Feature) -> Value {
    let mut object = Map::new();
    object.insert("type".to_string(), json!("Feature"));
    if let Some(id) = &feature.id {
        object.insert("id".to_string(), id.clone());
    }
    object.insert("properties".to_string(), feature.properties.clone().map_or(Value::Null, Value::Object));
    object.insert("geometry".to_string(), feature.geometry.as_ref().map_or(Value::Null, geometry_to_geojson));
    Value::Object(object)
}

fn geometry_to_geojson(geometry: &Geometry) -> Value {
    match geometry {
        Geometry::Polygon(rings) => json!({
            "type": "Polygon",
            "coordinates": polygon_coords(rings),
        }),
        Geometry::MultiPolygon(polygons) => json!({
            "type": "MultiPolygon",
            "coordinates": polygons.iter().map(|rings| polygon_coords(rings)).collect::<Vec<_>>(),
        }),
        Geometry::Other(value) => value.clone(),
    }
}

fn polygon_coords(rings: &[Ring]) -> Vec<Vec<[f64; 2]>> {
    rings.iter()
        .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
        .collect()
}
