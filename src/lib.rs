#![doc = "districtkit public API"]
mod feature;
mod geom;
mod io;
mod sample;
mod tier;

#[doc(inline)]
pub use feature::{Feature, FeatureCollection, Geometry, Ring};

#[doc(inline)]
pub use geom::{
    approximate_center, bounding_box, contains_approx, decimate_ring, polygon_bounding_box,
    BoundingBox, GeometryError, MIN_DECIMATE_LEN,
};

#[doc(inline)]
pub use io::{parse_collection, read_collection, write_collection};

#[doc(inline)]
pub use tier::{
    load_profiles, reduce_all, reduce_collection, reduce_file, validate_profiles, PointStats,
    Profile, ProfileOutcome, PropertyFilter, Reduction, TierReport, MINIMAL_PROPERTIES,
};

#[doc(inline)]
pub use sample::{
    Command, EngineState, EventSink, SamplePoint, SampleResult, SamplingEngine, SamplingEvent,
    SamplingWorker, ADDITIONAL_POINTS_PER_FEATURE, MAX_SAMPLE_ATTEMPTS,
};
