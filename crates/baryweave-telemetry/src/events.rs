//! Build event types.
//!
//! Structured events emitted at each stage of a wireframe build. Events are
//! lightweight value types that carry just enough data to be useful for
//! monitoring and debugging.

use baryweave_types::{TriangleId, VertexId};
use serde::{Deserialize, Serialize};

/// An event emitted while building a wireframe mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildEvent {
    /// Name of the source mesh being processed.
    pub mesh: String,
    /// Event payload.
    pub kind: EventKind,
}

/// Event payload variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventKind {
    /// A build call started.
    BuildBegin {
        /// Build mode label (`shared` or `unshared`).
        mode: String,
    },

    /// Vertex and triangle records were created.
    TopologyBuilt {
        vertices: usize,
        triangles: usize,
    },

    /// A triangle's normal could not be normalized. Non-fatal.
    DegenerateTriangle {
        triangle: TriangleId,
    },

    /// Triangle edge adjacency was resolved.
    AdjacencyResolved {
        /// Number of adjacent triangle pairs.
        pairs: usize,
    },

    /// Every triangle received masses.
    MassesAssigned {
        /// Number of traversal roots (disconnected adjacency components).
        components: usize,
    },

    /// A conflicting triangle was rebuilt on fresh vertices.
    TriangleSplit {
        triangle: TriangleId,
        /// ID of the first of the three new vertices.
        first_vertex: VertexId,
    },

    /// Output arrays were produced.
    MeshAssembled {
        /// Name of the derived mesh.
        name: String,
        vertices: usize,
        triangles: usize,
    },

    /// Custom event for extensibility.
    Custom {
        /// Arbitrary label.
        label: String,
        /// JSON-encoded payload.
        payload: String,
    },
}

impl BuildEvent {
    /// Creates a new event for the given mesh.
    pub fn new(mesh: impl Into<String>, kind: EventKind) -> Self {
        Self {
            mesh: mesh.into(),
            kind,
        }
    }

    /// True for events that report a recoverable problem.
    pub fn is_warning(&self) -> bool {
        matches!(self.kind, EventKind::DegenerateTriangle { .. })
    }
}
