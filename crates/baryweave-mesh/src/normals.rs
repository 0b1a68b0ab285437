//! Vertex normal computation from triangle mesh data.
//!
//! Computes area-weighted vertex normals by accumulating
//! face normals from each adjacent triangle.

use baryweave_math::geom::face_cross;
use baryweave_math::Vec3;

use crate::mesh::TriangleMesh;

/// Recompute vertex normals from triangle geometry (area-weighted).
///
/// Each triangle's unnormalized face normal is accumulated at each of its
/// vertices and the sums are normalized. Vertices touched only by degenerate
/// triangles (or by none) keep a zero normal.
///
/// The normal channel is (re)allocated to one entry per vertex.
pub fn compute_vertex_normals(mesh: &mut TriangleMesh) {
    let n = mesh.vertex_count();
    let mut accum = vec![Vec3::ZERO; n];

    for t in 0..mesh.triangle_count() {
        let [a, b, c] = mesh.triangle(t).map(|i| i as usize);
        // Magnitude = 2 × triangle area
        let face = face_cross(
            mesh.position_vec3(a),
            mesh.position_vec3(b),
            mesh.position_vec3(c),
        );
        accum[a] += face;
        accum[b] += face;
        accum[c] += face;
    }

    mesh.normal_x.clear();
    mesh.normal_y.clear();
    mesh.normal_z.clear();
    for normal in accum {
        let normal = normal.normalize_or_zero();
        mesh.normal_x.push(normal.x);
        mesh.normal_y.push(normal.y);
        mesh.normal_z.push(normal.z);
    }
}
