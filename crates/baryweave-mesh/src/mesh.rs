//! Core triangle mesh type with SoA (Structure of Arrays) layout.
//!
//! The SoA layout stores each coordinate channel contiguously:
//! - `pos_x: [x0, x1, x2, ...]`
//! - `pos_y: [y0, y1, y2, ...]`
//! - `pos_z: [z0, z1, z2, ...]`
//!
//! Optional channels (normals, UVs, colors) are either empty or carry one
//! entry per vertex.

use baryweave_math::{Vec2, Vec3, Vec4};
use baryweave_types::{BaryweaveError, BaryweaveResult};
use serde::{Deserialize, Serialize};

/// A named triangle mesh stored in Structure-of-Arrays layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleMesh {
    /// Mesh name. Derived meshes append a suffix to it.
    #[serde(default)]
    pub name: String,

    // --- Vertex data (SoA) ---
    pub pos_x: Vec<f32>,
    pub pos_y: Vec<f32>,
    pub pos_z: Vec<f32>,

    /// Vertex normals (optional).
    #[serde(default)]
    pub normal_x: Vec<f32>,
    #[serde(default)]
    pub normal_y: Vec<f32>,
    #[serde(default)]
    pub normal_z: Vec<f32>,

    /// Texture coordinates (optional).
    #[serde(default)]
    pub uv_u: Vec<f32>,
    #[serde(default)]
    pub uv_v: Vec<f32>,

    /// RGBA vertex colors (optional).
    #[serde(default)]
    pub color_r: Vec<f32>,
    #[serde(default)]
    pub color_g: Vec<f32>,
    #[serde(default)]
    pub color_b: Vec<f32>,
    #[serde(default)]
    pub color_a: Vec<f32>,

    // --- Triangle data ---
    /// Triangle indices, stored flat: `[t0v0, t0v1, t0v2, t1v0, ...]`.
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.pos_x.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i` as `[x, y, z]`.
    #[inline]
    pub fn position(&self, i: usize) -> [f32; 3] {
        [self.pos_x[i], self.pos_y[i], self.pos_z[i]]
    }

    /// Returns the position as a `glam::Vec3`.
    #[inline]
    pub fn position_vec3(&self, i: usize) -> Vec3 {
        Vec3::new(self.pos_x[i], self.pos_y[i], self.pos_z[i])
    }

    /// Returns true if the mesh carries a UV channel.
    #[inline]
    pub fn has_uvs(&self) -> bool {
        !self.uv_u.is_empty()
    }

    /// Returns true if the mesh carries a color channel.
    #[inline]
    pub fn has_colors(&self) -> bool {
        !self.color_r.is_empty()
    }

    /// Returns true if the mesh carries a normal channel.
    #[inline]
    pub fn has_normals(&self) -> bool {
        !self.normal_x.is_empty()
    }

    /// UV of vertex `i`, if the mesh has UVs.
    #[inline]
    pub fn uv(&self, i: usize) -> Option<Vec2> {
        self.has_uvs()
            .then(|| Vec2::new(self.uv_u[i], self.uv_v[i]))
    }

    /// RGBA color of vertex `i`, if the mesh has colors.
    #[inline]
    pub fn color(&self, i: usize) -> Option<Vec4> {
        self.has_colors().then(|| {
            Vec4::new(self.color_r[i], self.color_g[i], self.color_b[i], self.color_a[i])
        })
    }

    /// Returns the normal of vertex `i`, or zero if the mesh has no normals.
    #[inline]
    pub fn normal_vec3(&self, i: usize) -> Vec3 {
        if self.has_normals() {
            Vec3::new(self.normal_x[i], self.normal_y[i], self.normal_z[i])
        } else {
            Vec3::ZERO
        }
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Appends a vertex with the given attributes.
    ///
    /// UV and color channels are only written when present on the
    /// mesh or when this is the first vertex.
    pub fn push_vertex(&mut self, position: Vec3, uv: Option<Vec2>, color: Option<Vec4>) {
        let first = self.vertex_count() == 0;
        let write_uv = first || self.has_uvs();
        let write_color = first || self.has_colors();

        self.pos_x.push(position.x);
        self.pos_y.push(position.y);
        self.pos_z.push(position.z);

        if let (true, Some(uv)) = (write_uv, uv) {
            self.uv_u.push(uv.x);
            self.uv_v.push(uv.y);
        }
        if let (true, Some(c)) = (write_color, color) {
            self.color_r.push(c.x);
            self.color_g.push(c.y);
            self.color_b.push(c.z);
            self.color_a.push(c.w);
        }
    }

    /// Creates an empty named mesh with pre-allocated capacity.
    pub fn with_capacity(name: &str, vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            name: name.to_string(),
            pos_x: Vec::with_capacity(vertex_capacity),
            pos_y: Vec::with_capacity(vertex_capacity),
            pos_z: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
            ..Default::default()
        }
    }

    /// Appends another mesh, offsetting its indices past this mesh's vertices.
    ///
    /// Optional channels are concatenated as-is; run [`validate`](Self::validate)
    /// afterwards if the two meshes may disagree on which channels they carry.
    pub fn append(&mut self, other: &TriangleMesh) {
        let offset = self.vertex_count() as u32;
        self.pos_x.extend_from_slice(&other.pos_x);
        self.pos_y.extend_from_slice(&other.pos_y);
        self.pos_z.extend_from_slice(&other.pos_z);
        self.normal_x.extend_from_slice(&other.normal_x);
        self.normal_y.extend_from_slice(&other.normal_y);
        self.normal_z.extend_from_slice(&other.normal_z);
        self.uv_u.extend_from_slice(&other.uv_u);
        self.uv_v.extend_from_slice(&other.uv_v);
        self.color_r.extend_from_slice(&other.color_r);
        self.color_g.extend_from_slice(&other.color_g);
        self.color_b.extend_from_slice(&other.color_b);
        self.color_a.extend_from_slice(&other.color_a);
        self.indices
            .extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Validates mesh integrity.
    ///
    /// Checks:
    /// - Position arrays have the same length
    /// - Optional channels are either empty or one entry per vertex
    /// - Index count is a multiple of 3 and every index is in range
    ///
    /// Triangles that repeat a vertex index are accepted; they are
    /// degenerate, not malformed.
    pub fn validate(&self) -> BaryweaveResult<()> {
        let n = self.pos_x.len();

        if self.pos_y.len() != n || self.pos_z.len() != n {
            return Err(BaryweaveError::InvalidMesh(
                "Position arrays have inconsistent lengths".into(),
            ));
        }
        check_channel("Normal", &[&self.normal_x, &self.normal_y, &self.normal_z], n)?;
        check_channel("UV", &[&self.uv_u, &self.uv_v], n)?;
        check_channel(
            "Color",
            &[&self.color_r, &self.color_g, &self.color_b, &self.color_a],
            n,
        )?;

        if self.indices.len() % 3 != 0 {
            return Err(BaryweaveError::InvalidMesh(format!(
                "Index count ({}) is not divisible by 3",
                self.indices.len()
            )));
        }

        for (i, &idx) in self.indices.iter().enumerate() {
            if idx as usize >= n {
                return Err(BaryweaveError::InvalidMesh(format!(
                    "Index {} at position {} is out of range (vertex count: {})",
                    idx, i, n
                )));
            }
        }

        Ok(())
    }

    /// Constructs a mesh from interleaved AoS position data.
    ///
    /// Converts `[x0, y0, z0, x1, y1, z1, ...]` to SoA layout. `uvs` may be
    /// empty or interleaved `[u0, v0, u1, v1, ...]` with one pair per vertex.
    pub fn from_interleaved(
        name: &str,
        positions: &[f32],
        indices: &[u32],
        uvs: &[f32],
    ) -> BaryweaveResult<Self> {
        if positions.len() % 3 != 0 {
            return Err(BaryweaveError::InvalidMesh(
                "Interleaved positions length not divisible by 3".into(),
            ));
        }

        let n = positions.len() / 3;
        if !uvs.is_empty() && uvs.len() != n * 2 {
            return Err(BaryweaveError::InvalidMesh(format!(
                "Interleaved UV length ({}) does not match vertex count ({})",
                uvs.len(),
                n
            )));
        }

        let mut mesh = Self::with_capacity(name, n, indices.len() / 3);
        for p in positions.chunks_exact(3) {
            mesh.pos_x.push(p[0]);
            mesh.pos_y.push(p[1]);
            mesh.pos_z.push(p[2]);
        }
        for uv in uvs.chunks_exact(2) {
            mesh.uv_u.push(uv[0]);
            mesh.uv_v.push(uv[1]);
        }
        mesh.indices = indices.to_vec();

        mesh.validate()?;
        Ok(mesh)
    }
}

fn check_channel(label: &str, channel: &[&Vec<f32>], n: usize) -> BaryweaveResult<()> {
    let len = channel[0].len();
    if channel.iter().any(|c| c.len() != len) {
        return Err(BaryweaveError::InvalidMesh(format!(
            "{label} arrays have inconsistent lengths"
        )));
    }
    if len != 0 && len != n {
        return Err(BaryweaveError::InvalidMesh(format!(
            "{label} channel length ({len}) != vertex count ({n})"
        )));
    }
    Ok(())
}
