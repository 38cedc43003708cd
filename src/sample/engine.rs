use rand::{rngs::StdRng, Rng, SeedableRng};
use serde_json::Value;
use tracing::{info, warn};

use crate::{
    feature::{Feature, FeatureCollection, Geometry},
    geom::{approximate_center, contains_approx, polygon_bounding_box, BoundingBox},
};
use super::{EventSink, SamplePoint, SampleResult, SamplingEvent};

/// Interior points generated per feature in the additional pass.
pub const ADDITIONAL_POINTS_PER_FEATURE: usize = 4;

/// Rejection-sampling draws before falling back to the box midpoint.
pub const MAX_SAMPLE_ATTEMPTS: usize = 50;

/// Features between progress events in each pass.
const PROGRESS_INTERVAL: usize = 100;

/// Lifecycle of a single sampling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    Idle,
    ComputingCenters,
    ComputingAdditional,
    Completed,
    Failed,
}

/// Computes one center and four interior points per feature, reporting through an `EventSink`.
///
/// Processing is sequential; the finished `SampleResult` is moved into the terminal event.
#[derive(Debug)]
pub struct SamplingEngine<R = StdRng> {
    rng: R,
    state: EngineState,
}

impl SamplingEngine<StdRng> {
    /// Engine seeded from the operating system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }
}

impl Default for SamplingEngine<StdRng> {
    fn default() -> Self { Self::new() }
}

impl<R: Rng> SamplingEngine<R> {
    /// Engine drawing from the given random source.
    pub fn with_rng(rng: R) -> Self {
        Self { rng, state: EngineState::Idle }
    }

    #[inline] pub fn state(&self) -> EngineState { self.state }

    /// Sample every feature of `collection`, ending with a `Result` event.
    pub fn run<S: EventSink + ?Sized>(&mut self, collection: &FeatureCollection, sink: &mut S) {
        let total = collection.len();

        self.state = EngineState::ComputingCenters;
        info!("[sample] computing center points for {total} features");
        sink.emit(SamplingEvent::Status {
            message: format!("Calculating center points for {total} districts..."),
        });

        let mut center_points = Vec::with_capacity(total);
        let mut skipped = 0;
        for (index, feature) in collection.features.iter().enumerate() {
            if index % PROGRESS_INTERVAL == 0 {
                sink.emit(SamplingEvent::Progress {
                    message: format!("Processing center points: {index}/{total}"),
                    percent: index as f64 / total as f64 * 50.0,
                });
            }
            let Some(geometry) = sampleable(feature) else { continue };
            match approximate_center(geometry) {
                Ok(center) => center_points.push(SamplePoint::new(feature, center, true)),
                Err(e) => {
                    warn!("[sample] feature {index}: no center point: {e}");
                    skipped += 1;
                }
            }
        }

        self.state = EngineState::ComputingAdditional;
        info!("[sample] computing additional points");
        sink.emit(SamplingEvent::Status { message: "Calculating additional points...".to_string() });

        let mut additional_points = Vec::with_capacity(total * ADDITIONAL_POINTS_PER_FEATURE);
        for (index, feature) in collection.features.iter().enumerate() {
            if index % PROGRESS_INTERVAL == 0 {
                sink.emit(SamplingEvent::Progress {
                    message: format!("Processing additional points: {index}/{total}"),
                    percent: 50.0 + index as f64 / total as f64 * 50.0,
                });
            }
            let Some(geometry) = sampleable(feature) else { continue };
            let bbox = match polygon_bounding_box(geometry) {
                Ok(bbox) => bbox,
                Err(e) => {
                    warn!("[sample] feature {index}: no additional points: {e}");
                    continue;
                }
            };
            for _ in 0..ADDITIONAL_POINTS_PER_FEATURE {
                let point = self.sample_within(&bbox, geometry);
                additional_points.push(SamplePoint::new(feature, point, false));
            }
        }

        let result = SampleResult::new(center_points, additional_points);
        let mut message = format!(
            "Completed: {} center points and {} additional points",
            result.center_points.len(), result.additional_points.len(),
        );
        if skipped > 0 {
            message.push_str(&format!(" ({skipped} features skipped due to invalid geometry)"));
        }
        info!("[sample] {message}");

        self.state = EngineState::Completed;
        sink.emit(SamplingEvent::Status { message });
        sink.emit(SamplingEvent::Result(result));
    }

    /// Parse a GeoJSON FeatureCollection and sample it; a parse failure ends the run with `Error`.
    pub fn run_json<S: EventSink + ?Sized>(&mut self, value: &Value, sink: &mut S) {
        match FeatureCollection::from_geojson(value) {
            Ok(collection) => self.run(&collection, sink),
            Err(e) => self.fail(format!("{e:#}"), sink),
        }
    }

    /// End the current run with an `Error` event.
    pub fn fail<S: EventSink + ?Sized>(&mut self, message: String, sink: &mut S) {
        warn!("[sample] failed: {message}");
        self.state = EngineState::Failed;
        sink.emit(SamplingEvent::Error { message });
    }

    /// Rejection-sample a point inside `bbox` that passes `contains_approx`.
    /// Falls back to the box midpoint after `MAX_SAMPLE_ATTEMPTS` misses.
    fn sample_within(&mut self, bbox: &BoundingBox, geometry: &Geometry) -> (f64, f64) {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let lat = self.rng.random_range(bbox.south..=bbox.north);
            let lng = self.rng.random_range(bbox.west..=bbox.east);
            if contains_approx((lat, lng), geometry) {
                return (lat, lng);
            }
        }
        bbox.center()
    }
}

/// Geometry to sample, if the feature has properties and a polygonal geometry.
fn sampleable(feature: &Feature) -> Option<&Geometry> {
    feature.properties.as_ref()?;
    match feature.geometry.as_ref()? {
        geometry @ (Geometry::Polygon(_) | Geometry::MultiPolygon(_)) => Some(geometry),
        Geometry::Other(_) => None,
    }
}
