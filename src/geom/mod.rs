mod approx;
mod bbox;
mod decimate;

pub use approx::{approximate_center, contains_approx};
pub use bbox::{bounding_box, polygon_bounding_box, BoundingBox};
pub use decimate::{decimate_ring, MIN_DECIMATE_LEN};

/// Failure computing a primitive for a single feature's geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("geometry has no coordinates to bound")]
    EmptyGeometry,
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
    #[error("coordinate extent overflows: lat {south}..{north}, lng {west}..{east}")]
    ExtentOverflow { south: f64, north: f64, west: f64, east: f64 },
    #[error("unsupported geometry type {0:?}")]
    Unsupported(String),
}
