//! Labelling conflict detection and resolution.
//!
//! A triangle is in conflict when two of its corners hold the same assigned
//! mass. It is resolved by rebuilding the triangle on three fresh vertices
//! that copy the old corners' attributes and take the canonical masses in
//! slot order. The triangle stops sharing those corners with its neighbors;
//! only its own barycentric labelling matters downstream.

use baryweave_mesh::MeshGraph;
use baryweave_types::{MassChannel, TriangleId, VertexId};
use tracing::debug;

/// True when all three masses are assigned and at least two are equal.
///
/// Any unassigned corner means "no conflict".
pub fn has_duplicate_masses(masses: [MassChannel; 3]) -> bool {
    if masses.iter().any(|m| !m.is_assigned()) {
        return false;
    }
    let [a, b, c] = masses;
    a == b || a == c || b == c
}

/// Triangles whose corners carry duplicate masses, in ID order.
pub fn find_conflicts(graph: &MeshGraph) -> Vec<TriangleId> {
    graph
        .iter_triangles()
        .map(|(id, _)| id)
        .filter(|&id| has_duplicate_masses(graph.triangle_masses(id)))
        .collect()
}

/// Rebuilds triangle `t` on three new vertices appended to the arena.
///
/// Slot `k` gets a copy of the old slot-`k` vertex with mass
/// `MassChannel::CANONICAL[k]`. The new vertices list `t` as their only
/// triangle and each other as neighbors; the replaced vertices keep their
/// incidence lists.
///
/// Returns the ID of the first new vertex.
pub fn split_triangle(graph: &mut MeshGraph, t: TriangleId) -> VertexId {
    let old = graph.triangle(t).vertices;
    let first = graph.next_vertex_id();

    let mut fresh = [first; 3];
    for (k, channel) in MassChannel::CANONICAL.into_iter().enumerate() {
        let mut copy = graph.vertex(old[k]).duplicate(first, channel);
        copy.triangles.push(t);
        fresh[k] = graph.push_vertex(copy);
    }
    for k in 0..3 {
        let vertex = graph.vertex_mut(fresh[k]);
        vertex.add_neighbor(fresh[(k + 1) % 3]);
        vertex.add_neighbor(fresh[(k + 2) % 3]);
    }

    graph.triangle_mut(t).vertices = fresh;
    first
}

/// A triangle rebuilt by [`resolve_conflicts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split {
    pub triangle: TriangleId,
    /// First of the three consecutive vertex IDs now used by the triangle.
    pub first_vertex: VertexId,
}

/// Splits every conflicting triangle.
///
/// Splitting never changes the masses of existing vertices, so one pass in
/// ID order is enough.
pub fn resolve_conflicts(graph: &mut MeshGraph) -> Vec<Split> {
    find_conflicts(graph)
        .into_iter()
        .map(|triangle| {
            let first_vertex = split_triangle(graph, triangle);
            debug!(%triangle, %first_vertex, "triangle split");
            Split {
                triangle,
                first_vertex,
            }
        })
        .collect()
}
