pub mod reduce;
pub mod sample;
