//! Barycentric mass assignment.
//!
//! Labels every vertex with one of the three canonical masses by walking the
//! triangle adjacency graph depth-first. Each triangle only looks at its own
//! corners: unlabelled corners take the first channel none of the other
//! corners already hold. Labels are never revisited, so a vertex reached
//! through two non-adjacent triangles can end up duplicating a channel inside
//! one of them. Those triangles are fixed afterwards by
//! [`crate::conflict::resolve_conflicts`].

use baryweave_mesh::MeshGraph;
use baryweave_types::{MassChannel, TriangleId};
use tracing::debug;

/// Labels the unassigned corners of one triangle and marks it assigned.
///
/// Already-labelled corners keep their mass. Channels are tried in the fixed
/// order First, Second, Third.
pub fn assign_triangle_masses(graph: &mut MeshGraph, t: TriangleId) {
    let corners = graph.triangle(t).vertices;

    let mut taken = [false; 3];
    for v in corners {
        if let Some(slot) = graph.vertex(v).mass.slot() {
            taken[slot] = true;
        }
    }

    for v in corners {
        let vertex = graph.vertex_mut(v);
        if vertex.mass.is_assigned() {
            continue;
        }
        // An unlabelled corner means at most two channels are taken.
        let slot = taken.iter().position(|&used| !used).unwrap_or(2);
        vertex.mass = MassChannel::from_slot(slot);
        taken[slot] = true;
    }

    graph.triangle_mut(t).masses_assigned = true;
}

/// Assigns masses over the whole graph.
///
/// Starting from the lowest-indexed unassigned triangle, triangles are
/// visited depth-first over `Triangle::adjacent` (in list order) using an
/// explicit stack, so the visit order matches a recursive walk without
/// tying its depth to the call stack. When a component is exhausted the
/// scan resumes at the next unassigned triangle.
///
/// Triangles already flagged as assigned are skipped, which makes a second
/// call on a fully labelled graph a no-op.
///
/// Returns the number of traversal roots (adjacency components visited).
pub fn assign_masses(graph: &mut MeshGraph) -> usize {
    let mut components = 0;
    let mut stack: Vec<TriangleId> = Vec::new();

    for root in 0..graph.triangle_count() {
        let root = TriangleId(root as u32);
        if graph.triangle(root).masses_assigned {
            continue;
        }
        components += 1;
        stack.push(root);

        while let Some(t) = stack.pop() {
            if graph.triangle(t).masses_assigned {
                continue;
            }
            assign_triangle_masses(graph, t);

            // Reversed so the first neighbor is popped first.
            let tri = graph.triangle(t);
            stack.extend(
                tri.adjacent
                    .iter()
                    .rev()
                    .copied()
                    .filter(|&a| !graph.triangle(a).masses_assigned),
            );
        }
    }

    debug!(components, "masses assigned");
    components
}

/// Clears every triangle's assigned flag, leaving vertex masses untouched.
pub fn clear_assignment_flags(graph: &mut MeshGraph) {
    for tri in &mut graph.triangles {
        tri.masses_assigned = false;
    }
}
