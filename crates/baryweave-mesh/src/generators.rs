//! Procedural mesh generators for tests and demos.
//!
//! These generators produce deterministic, resolution-configurable meshes
//! with counter-clockwise winding and UV coordinates.

use crate::mesh::TriangleMesh;

/// Generates a flat rectangular quad grid in the XY plane.
///
/// The grid spans `[-width/2, width/2]` in X and `[-height/2, height/2]` in Y,
/// centered at the origin at Z=0.
///
/// # Arguments
/// - `cols` — Number of quads along X (vertex count = cols + 1).
/// - `rows` — Number of quads along Y (vertex count = rows + 1).
/// - `width` — Total width.
/// - `height` — Total height.
///
/// # Example
/// ```
/// use baryweave_mesh::generators::quad_grid;
/// let mesh = quad_grid(2, 2, 1.0, 1.0);
/// assert_eq!(mesh.vertex_count(), 9);  // 3×3 vertices
/// assert_eq!(mesh.triangle_count(), 8); // 2×2 quads × 2 tris each
/// ```
pub fn quad_grid(cols: usize, rows: usize, width: f32, height: f32) -> TriangleMesh {
    let verts_x = cols + 1;
    let verts_y = rows + 1;

    let mut mesh = TriangleMesh::with_capacity("quad_grid", verts_x * verts_y, cols * rows * 2);

    let half_w = width / 2.0;
    let half_h = height / 2.0;

    for j in 0..verts_y {
        for i in 0..verts_x {
            let u = i as f32 / cols as f32;
            let v = j as f32 / rows as f32;

            mesh.pos_x.push(-half_w + u * width);
            mesh.pos_y.push(half_h - v * height); // Top to bottom
            mesh.pos_z.push(0.0);

            mesh.normal_x.push(0.0);
            mesh.normal_y.push(0.0);
            mesh.normal_z.push(1.0);

            mesh.uv_u.push(u);
            mesh.uv_v.push(v);
        }
    }

    // Two triangles per quad
    for j in 0..rows {
        for i in 0..cols {
            let top_left = (j * verts_x + i) as u32;
            let top_right = top_left + 1;
            let bot_left = top_left + verts_x as u32;
            let bot_right = bot_left + 1;

            mesh.indices
                .extend_from_slice(&[top_left, bot_left, top_right]);
            mesh.indices
                .extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }

    mesh
}

/// Generates a UV sphere centered at the origin.
///
/// # Arguments
/// - `radius` — Sphere radius.
/// - `stacks` — Number of horizontal slices (latitude divisions).
/// - `slices` — Number of vertical slices (longitude divisions).
pub fn uv_sphere(radius: f32, stacks: usize, slices: usize) -> TriangleMesh {
    let vertex_count = (stacks + 1) * (slices + 1);
    let mut mesh = TriangleMesh::with_capacity("uv_sphere", vertex_count, stacks * slices * 2);

    for i in 0..=stacks {
        let phi = std::f32::consts::PI * i as f32 / stacks as f32; // 0 to PI
        let (sin_phi, cos_phi) = phi.sin_cos();

        for j in 0..=slices {
            let theta = 2.0 * std::f32::consts::PI * j as f32 / slices as f32;
            let (sin_theta, cos_theta) = theta.sin_cos();

            let x = sin_phi * cos_theta;
            let y = cos_phi;
            let z = sin_phi * sin_theta;

            mesh.pos_x.push(radius * x);
            mesh.pos_y.push(radius * y);
            mesh.pos_z.push(radius * z);

            mesh.normal_x.push(x);
            mesh.normal_y.push(y);
            mesh.normal_z.push(z);

            mesh.uv_u.push(j as f32 / slices as f32);
            mesh.uv_v.push(i as f32 / stacks as f32);
        }
    }

    for i in 0..stacks {
        for j in 0..slices {
            let a = (i * (slices + 1) + j) as u32;
            let b = a + (slices + 1) as u32;

            // Skip degenerate triangles at poles
            if i != 0 {
                mesh.indices.extend_from_slice(&[a, b, a + 1]);
            }
            if i != stacks - 1 {
                mesh.indices.extend_from_slice(&[a + 1, b, b + 1]);
            }
        }
    }

    mesh
}

/// Generates a closed triangle fan around a hub vertex in the XY plane.
///
/// Vertex 0 is the hub at the origin; vertices `1..=segments` lie on a circle
/// of the given radius. Triangle `k` is `[0, 1 + k, 1 + (k + 1) % segments]`,
/// so consecutive triangles share a spoke edge and the last wraps to the first.
/// An odd `segments` count yields an odd cycle in the triangle adjacency graph.
pub fn triangle_fan(segments: usize, radius: f32) -> TriangleMesh {
    let mut mesh = TriangleMesh::with_capacity("triangle_fan", segments + 1, segments);

    mesh.pos_x.push(0.0);
    mesh.pos_y.push(0.0);
    mesh.pos_z.push(0.0);
    mesh.uv_u.push(0.5);
    mesh.uv_v.push(0.5);

    for k in 0..segments {
        let theta = 2.0 * std::f32::consts::PI * k as f32 / segments as f32;
        let (sin_t, cos_t) = theta.sin_cos();
        mesh.pos_x.push(radius * cos_t);
        mesh.pos_y.push(radius * sin_t);
        mesh.pos_z.push(0.0);
        mesh.uv_u.push(0.5 + 0.5 * cos_t);
        mesh.uv_v.push(0.5 + 0.5 * sin_t);
    }

    for k in 0..segments {
        let a = 1 + k as u32;
        let b = 1 + ((k + 1) % segments) as u32;
        mesh.indices.extend_from_slice(&[0, a, b]);
    }

    mesh
}
