//! Triangle edge adjacency.
//!
//! Two triangles are adjacent when they share exactly two vertices (one
//! edge). Adjacency is discovered from the vertex → triangle incidence built
//! by [`MeshGraph::build`](crate::graph::MeshGraph::build): for a source
//! triangle `T`, every triangle seen through `T`'s corners is counted once
//! per shared vertex. Repeated corners are scanned once.
//!
//! | count | meaning                         |
//! |-------|---------------------------------|
//! | 1     | shares a single vertex — ignored |
//! | 2     | shares an edge — adjacent        |
//! | 3     | duplicate triangle — ignored     |

use baryweave_types::TriangleId;
use tracing::debug;

use crate::graph::MeshGraph;

/// Populates `Triangle::adjacent` for every triangle in the graph.
///
/// Adjacency is recorded symmetrically and never twice: a pair found while
/// scanning the lower-indexed triangle is skipped when the higher one is
/// scanned. Boundary and non-manifold edges leave fewer than three entries.
///
/// Counters live in a dense per-triangle array reset after each source
/// triangle, and candidates are visited in first-seen order so the resulting
/// lists are deterministic.
///
/// Returns the number of adjacent pairs recorded.
pub fn resolve_adjacency(graph: &mut MeshGraph) -> usize {
    let tri_count = graph.triangle_count();
    let mut counts: Vec<u8> = vec![0; tri_count];
    let mut touched: Vec<TriangleId> = Vec::with_capacity(16);
    let mut pairs = 0;

    for t in 0..tri_count {
        let source = TriangleId(t as u32);

        {
            let tri = &graph.triangles[t];
            for v in tri.distinct_vertices() {
                for &other in &graph.vertices[v.index()].triangles {
                    if other == source || tri.is_adjacent_to(other) {
                        continue;
                    }
                    let count = &mut counts[other.index()];
                    if *count == 0 {
                        touched.push(other);
                    }
                    *count += 1;
                }
            }
        }

        for &other in &touched {
            if counts[other.index()] == 2 {
                graph.triangles[t].adjacent.push(other);
                graph.triangles[other.index()].adjacent.push(source);
                pairs += 1;
            }
            counts[other.index()] = 0;
        }
        touched.clear();
    }

    debug!(pairs, "adjacency resolved");
    pairs
}

/// Checks that every recorded adjacency is mirrored, unique, and backed by
/// exactly two shared vertices.
pub fn is_consistent(graph: &MeshGraph) -> bool {
    graph.iter_triangles().all(|(id, tri)| {
        tri.adjacent.iter().enumerate().all(|(k, &other)| {
            !tri.adjacent[..k].contains(&other)
                && graph.triangle(other).is_adjacent_to(id)
                && graph.shared_vertex_count(id, other) == 2
        })
    })
}
