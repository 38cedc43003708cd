//! Sampling on a dedicated thread.
//!
//! The worker owns a `SamplingEngine` and talks to its caller only through two
//! `crossbeam_channel`s: commands in, `SamplingEvent`s out. Commands are handled
//! one at a time in arrival order; each produces its own terminal event.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    thread::{self, JoinHandle},
};

use anyhow::{anyhow, Context, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use rand::Rng;
use serde_json::Value;
use tracing::debug;

use crate::feature::FeatureCollection;
use super::{SamplingEngine, SamplingEvent};

/// Inbound message for the worker.
#[derive(Debug, Clone)]
pub enum Command {
    /// Sample an already-parsed collection.
    Process(FeatureCollection),
    /// Parse a GeoJSON FeatureCollection, then sample it.
    ProcessJson(Value),
}

/// Handle to a background sampling thread.
pub struct SamplingWorker {
    commands: Option<Sender<Command>>,
    events: Receiver<SamplingEvent>,
    handle: Option<JoinHandle<()>>,
}

impl SamplingWorker {
    /// Spawn a worker with an OS-seeded engine.
    pub fn spawn() -> Result<Self> {
        Self::spawn_with(SamplingEngine::new())
    }

    /// Spawn a worker around the given engine.
    pub fn spawn_with<R: Rng + Send + 'static>(engine: SamplingEngine<R>) -> Result<Self> {
        let (command_tx, command_rx) = unbounded();
        let (event_tx, event_rx) = unbounded();

        let handle = thread::Builder::new()
            .name("sampling-worker".into())
            .spawn(move || worker_loop(engine, command_rx, event_tx))
            .context("Failed to spawn sampling worker thread")?;

        Ok(Self { commands: Some(command_tx), events: event_rx, handle: Some(handle) })
    }

    /// Queue a command without waiting for it to run.
    pub fn send(&self, command: Command) -> Result<()> {
        self.commands.as_ref()
            .ok_or_else(|| anyhow!("Sampling worker is shut down"))?
            .send(command)
            .map_err(|_| anyhow!("Sampling worker has stopped"))
    }

    /// Queue a collection for sampling.
    pub fn process(&self, collection: FeatureCollection) -> Result<()> {
        self.send(Command::Process(collection))
    }

    /// Outbound event stream, for polling with `try_recv` or `select!`.
    #[inline] pub fn events(&self) -> &Receiver<SamplingEvent> { &self.events }

    /// Block until the next terminal event, passing earlier events to `on_event`.
    pub fn wait_terminal(&self, mut on_event: impl FnMut(&SamplingEvent)) -> Result<SamplingEvent> {
        for event in self.events.iter() {
            if event.is_terminal() {
                return Ok(event);
            }
            on_event(&event);
        }
        Err(anyhow!("Sampling worker exited before sending a terminal event"))
    }

    /// Close the command channel and wait for the thread to finish queued work.
    pub fn shutdown(mut self) -> Result<()> {
        self.join()
    }

    fn join(&mut self) -> Result<()> {
        self.commands.take();
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| anyhow!("Sampling worker thread panicked")),
            None => Ok(()),
        }
    }
}

impl Drop for SamplingWorker {
    fn drop(&mut self) {
        let _ = self.join();
    }
}

fn worker_loop<R: Rng>(mut engine: SamplingEngine<R>, commands: Receiver<Command>, mut events: Sender<SamplingEvent>) {
    debug!("[sample] worker started");
    for command in commands.iter() {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| match &command {
            Command::Process(collection) => engine.run(collection, &mut events),
            Command::ProcessJson(value) => engine.run_json(value, &mut events),
        }));
        if let Err(payload) = outcome {
            engine.fail(format!("Sampling panicked: {}", panic_message(payload.as_ref())), &mut events);
        }
    }
    debug!("[sample] worker stopped");
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload.downcast_ref::<&str>().copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
