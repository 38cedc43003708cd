use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};

use super::SampleResult;

/// Outbound message of a sampling run.
///
/// A run emits any number of `Status`/`Progress` events followed by exactly
/// one terminal `Result` or `Error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SamplingEvent {
    Status { message: String },
    Progress { message: String, percent: f64 },
    Result(SampleResult),
    Error { message: String },
}

impl SamplingEvent {
    /// Check whether this event ends the run.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SamplingEvent::Result(_) | SamplingEvent::Error { .. })
    }
}

/// Destination for sampling events.
pub trait EventSink {
    fn emit(&mut self, event: SamplingEvent);
}

impl EventSink for Vec<SamplingEvent> {
    fn emit(&mut self, event: SamplingEvent) {
        self.push(event);
    }
}

impl EventSink for Sender<SamplingEvent> {
    /// Events sent after the receiver is dropped are discarded.
    fn emit(&mut self, event: SamplingEvent) {
        let _ = self.send(event);
    }
}
