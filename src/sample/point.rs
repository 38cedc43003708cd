use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::feature::Feature;

/// A representative point for one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamplePoint {
    pub lat: f64,
    pub lng: f64,
    pub district_id: String,
    pub district_name: String,
    pub is_center: bool,
}

impl SamplePoint {
    pub(crate) fn new(feature: &Feature, (lat, lng): (f64, f64), is_center: bool) -> Self {
        Self {
            lat,
            lng,
            district_id: feature.district_id(),
            district_name: feature.district_name(),
            is_center,
        }
    }
}

/// Final output of one sampling run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleResult {
    /// One per successfully processed feature, in feature order.
    pub center_points: Vec<SamplePoint>,
    /// Four per successfully processed feature, each feature's points contiguous.
    pub additional_points: Vec<SamplePoint>,
    /// All centers, then all additional points.
    pub all_ordered_points: Vec<SamplePoint>,
}

impl SampleResult {
    pub(crate) fn new(center_points: Vec<SamplePoint>, additional_points: Vec<SamplePoint>) -> Self {
        let all_ordered_points = center_points.iter()
            .chain(additional_points.iter())
            .cloned()
            .collect();
        Self { center_points, additional_points, all_ordered_points }
    }

    /// Export `all_ordered_points` as a GeoJSON FeatureCollection of Points.
    pub fn to_geojson(&self) -> Value {
        let features: Vec<Value> = self.all_ordered_points.iter()
            .map(|point| json!({
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [point.lng, point.lat] },
                "properties": {
                    "districtId": point.district_id,
                    "districtName": point.district_name,
                    "isCenter": point.is_center,
                },
            }))
            .collect();

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}
