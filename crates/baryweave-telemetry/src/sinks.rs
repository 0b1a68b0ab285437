//! Pluggable event sinks.
//!
//! Sinks consume events from the bus and process them
//! (collect in memory, log through `tracing`, etc.).

use std::sync::{Arc, Mutex};

use crate::events::BuildEvent;

/// Trait for event consumers.
///
/// Implement this to create custom telemetry outputs.
pub trait EventSink: Send {
    /// Process a single event.
    fn handle(&mut self, event: &BuildEvent);

    /// Called when the build ends. Flush buffers, close files, etc.
    fn finalize(&mut self) {}

    /// Returns a human-readable name for this sink.
    fn name(&self) -> &str;
}

/// A sink that collects events into a shared buffer.
///
/// Clones share the same buffer, so a clone kept by the caller can inspect
/// what the boxed copy registered on a bus received.
#[derive(Clone, Default)]
pub struct VecSink {
    events: Arc<Mutex<Vec<BuildEvent>>>,
}

impl VecSink {
    /// Creates an empty vec sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the events received so far.
    pub fn events(&self) -> Vec<BuildEvent> {
        match self.events.lock() {
            Ok(events) => events.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn len(&self) -> usize {
        self.events().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EventSink for VecSink {
    fn handle(&mut self, event: &BuildEvent) {
        match self.events.lock() {
            Ok(mut events) => events.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }

    fn name(&self) -> &str {
        "vec_sink"
    }
}

/// A sink that logs every event at one `tracing` level.
pub struct TracingSink {
    level: tracing::Level,
}

impl TracingSink {
    /// Creates a new tracing sink at the given log level.
    pub fn new(level: tracing::Level) -> Self {
        Self { level }
    }
}

impl Default for TracingSink {
    fn default() -> Self {
        Self::new(tracing::Level::DEBUG)
    }
}

impl EventSink for TracingSink {
    fn handle(&mut self, event: &BuildEvent) {
        // `tracing` macros need a constant level, hence the dispatch.
        match self.level {
            tracing::Level::ERROR => tracing::error!(mesh = %event.mesh, event = ?event.kind, "build_event"),
            tracing::Level::WARN => tracing::warn!(mesh = %event.mesh, event = ?event.kind, "build_event"),
            tracing::Level::INFO => tracing::info!(mesh = %event.mesh, event = ?event.kind, "build_event"),
            tracing::Level::DEBUG => tracing::debug!(mesh = %event.mesh, event = ?event.kind, "build_event"),
            _ => tracing::trace!(mesh = %event.mesh, event = ?event.kind, "build_event"),
        }
    }

    fn name(&self) -> &str {
        "tracing_sink"
    }
}
