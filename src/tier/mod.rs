mod profile;
mod reduce;
mod report;

pub use profile::{load_profiles, validate_profiles, Profile, PropertyFilter, MINIMAL_PROPERTIES};
pub use reduce::{reduce_collection, PointStats, Reduction};
pub use report::{reduce_all, reduce_file, ProfileOutcome, TierReport};
