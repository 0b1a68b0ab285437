//! Flattening labelled geometry back into mesh arrays.
//!
//! Output colors are the vertex masses as RGBA with alpha 1. UVs are always
//! emitted, defaulting to zero when the source had none.

use baryweave_math::{Vec2, Vec4};
use baryweave_mesh::{MeshGraph, TriangleMesh};
use baryweave_types::MassChannel;

/// Flattens a labelled graph into a named mesh.
///
/// Vertices are emitted in arena order (source vertices first, split copies
/// after). Each triangle contributes its current corner IDs in slot order.
/// Normals are left empty.
pub fn assemble(graph: &MeshGraph, name: &str) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity(name, graph.vertex_count(), graph.triangle_count());

    for vertex in &graph.vertices {
        let [r, g, b, a] = vertex.mass.rgba();
        mesh.push_vertex(
            vertex.position,
            Some(vertex.uv.unwrap_or(Vec2::ZERO)),
            Some(Vec4::new(r, g, b, a)),
        );
    }

    for tri in &graph.triangles {
        mesh.indices.extend(tri.vertices.map(|v| v.0));
    }

    mesh
}

/// Builds a mesh where every triangle corner is its own vertex.
///
/// Corner `k` of each triangle gets `MassChannel::CANONICAL[k]`, so no
/// labelling pass is needed. Output has `3 × triangle_count` vertices and
/// indices `0, 1, 2, …` in order. The source must already be validated.
pub fn assemble_unshared(source: &TriangleMesh, name: &str) -> TriangleMesh {
    let corner_count = source.indices.len();
    let mut mesh = TriangleMesh::with_capacity(name, corner_count, source.triangle_count());

    for (corner, &i) in source.indices.iter().enumerate() {
        let i = i as usize;
        let [r, g, b, a] = MassChannel::from_slot(corner % 3).rgba();
        mesh.push_vertex(
            source.position_vec3(i),
            Some(source.uv(i).unwrap_or(Vec2::ZERO)),
            Some(Vec4::new(r, g, b, a)),
        );
        mesh.indices.push(corner as u32);
    }

    mesh
}
