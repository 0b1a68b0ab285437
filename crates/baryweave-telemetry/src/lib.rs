//! # baryweave-telemetry
//!
//! Event bus for build telemetry. Emits structured events
//! (topology sizes, degenerate triangles, splits) that can be consumed
//! by pluggable sinks (in-memory buffers, `tracing`, etc.).

pub mod bus;
pub mod events;
pub mod sinks;

pub use bus::EventBus;
pub use events::{BuildEvent, EventKind};
pub use sinks::{EventSink, TracingSink, VecSink};
