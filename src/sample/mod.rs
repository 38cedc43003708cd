mod engine;
mod event;
mod point;
mod worker;

pub use engine::{EngineState, SamplingEngine, ADDITIONAL_POINTS_PER_FEATURE, MAX_SAMPLE_ATTEMPTS};
pub use event::{EventSink, SamplingEvent};
pub use point::{SamplePoint, SampleResult};
pub use worker::{Command, SamplingWorker};
