//! Vertex/triangle topology graph.
//!
//! Turns the flat arrays of a [`TriangleMesh`] into an arena of [`Vertex`]
//! and [`Triangle`] records. All relations are stored as typed indices into
//! the two arenas, so the graph has no ownership cycles:
//!
//! ```text
//! Vertex.triangles  ──► TriangleId   (triangles that use the vertex)
//! Vertex.neighbors  ──► VertexId     (vertices sharing a triangle with it)
//! Triangle.vertices ──► VertexId     (ordered corners)
//! Triangle.adjacent ──► TriangleId   (edge neighbors, see `adjacency`)
//! ```
//!
//! A vertex's [`VertexId`] always equals its position in the arena.

use baryweave_math::geom::face_normal;
use baryweave_math::{Vec2, Vec3, Vec4};
use baryweave_types::constants::DEGENERATE_NORMAL_THRESHOLD;
use baryweave_types::{BaryweaveResult, MassChannel, TriangleId, VertexId};
use tracing::debug;

use crate::mesh::TriangleMesh;

/// A mesh vertex with its attributes, label, and incidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Arena index, also the index emitted in output meshes.
    pub id: VertexId,
    pub position: Vec3,
    pub color: Option<Vec4>,
    pub uv: Option<Vec2>,
    /// Barycentric label. Once assigned it never changes.
    pub mass: MassChannel,
    /// Deduplicated, unordered.
    pub neighbors: Vec<VertexId>,
    /// Triangles that include this vertex, in build order.
    pub triangles: Vec<TriangleId>,
}

impl Vertex {
    /// Creates an unlabelled vertex with no incidence.
    pub fn new(id: VertexId, position: Vec3) -> Self {
        Self {
            id,
            position,
            color: None,
            uv: None,
            mass: MassChannel::Unassigned,
            neighbors: Vec::with_capacity(6),
            triangles: Vec::with_capacity(6),
        }
    }

    /// Adds `neighbor` unless it is already present.
    pub fn add_neighbor(&mut self, neighbor: VertexId) {
        if !self.has_neighbor(neighbor) {
            self.neighbors.push(neighbor);
        }
    }

    pub fn has_neighbor(&self, neighbor: VertexId) -> bool {
        self.neighbors.contains(&neighbor)
    }

    pub fn has_triangle(&self, triangle: TriangleId) -> bool {
        self.triangles.contains(&triangle)
    }

    /// A copy of this vertex's attributes under a new identity and label.
    ///
    /// The copy starts with no neighbors and no incident triangles.
    pub fn duplicate(&self, id: VertexId, mass: MassChannel) -> Self {
        Self {
            id,
            position: self.position,
            color: self.color,
            uv: self.uv,
            mass,
            neighbors: Vec::new(),
            triangles: Vec::new(),
        }
    }
}

/// A triangle referencing three vertices.
///
/// Source triangles may repeat a vertex; such a triangle is degenerate and
/// gets three distinct vertices when the conflict pass rebuilds it.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    /// Ordered corners; order is preserved when emitting indices.
    pub vertices: [VertexId; 3],
    /// Unit normal of the `(v0, v1, v2)` winding, or zero if degenerate.
    pub normal: Vec3,
    /// Set once the mass assignment pass has labelled this triangle.
    pub masses_assigned: bool,
    /// Triangles sharing exactly one edge with this one.
    pub adjacent: Vec<TriangleId>,
}

impl Triangle {
    pub fn has_vertex(&self, v: VertexId) -> bool {
        self.vertices.contains(&v)
    }

    /// Corners in slot order with repeats dropped.
    pub fn distinct_vertices(&self) -> Vec<VertexId> {
        let mut out = Vec::with_capacity(3);
        for v in self.vertices {
            if !out.contains(&v) {
                out.push(v);
            }
        }
        out
    }

    /// True when the normal could not be computed.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.normal == Vec3::ZERO
    }

    pub fn is_adjacent_to(&self, other: TriangleId) -> bool {
        self.adjacent.contains(&other)
    }
}

/// Arena-backed working graph for one wireframe build.
#[derive(Debug, Clone, Default)]
pub struct MeshGraph {
    pub vertices: Vec<Vertex>,
    pub triangles: Vec<Triangle>,
}

impl MeshGraph {
    /// Builds the graph with the default degenerate-normal threshold.
    pub fn build(mesh: &TriangleMesh) -> BaryweaveResult<Self> {
        Self::build_with_threshold(mesh, DEGENERATE_NORMAL_THRESHOLD)
    }

    /// Builds vertex and triangle records from a mesh descriptor.
    ///
    /// One vertex per input position (ID = position index, unlabelled) and one
    /// triangle per index triple. Each triangle is registered on its three
    /// vertices, and each corner gains the other two corners as neighbors.
    ///
    /// The mesh is validated first; malformed input fails with
    /// `InvalidMesh` before anything is allocated. Triangles whose cross
    /// product is shorter than `threshold` get a zero normal.
    ///
    /// Edge adjacency between triangles is *not* computed here; see
    /// [`crate::adjacency::resolve_adjacency`].
    pub fn build_with_threshold(mesh: &TriangleMesh, threshold: f32) -> BaryweaveResult<Self> {
        mesh.validate()?;

        let mut vertices: Vec<Vertex> = (0..mesh.vertex_count())
            .map(|i| {
                let mut v = Vertex::new(VertexId(i as u32), mesh.position_vec3(i));
                v.color = mesh.color(i);
                v.uv = mesh.uv(i);
                v
            })
            .collect();

        let mut triangles = Vec::with_capacity(mesh.triangle_count());
        for t in 0..mesh.triangle_count() {
            let tid = TriangleId(t as u32);
            let corners = mesh.triangle(t).map(VertexId);
            let [v0, v1, v2] = corners;

            let normal = face_normal(
                vertices[v0.index()].position,
                vertices[v1.index()].position,
                vertices[v2.index()].position,
                threshold,
            )
            .unwrap_or(Vec3::ZERO);

            // A repeated corner registers the triangle once and is not its own neighbor.
            for (k, &v) in corners.iter().enumerate() {
                let vertex = &mut vertices[v.index()];
                if !vertex.has_triangle(tid) {
                    vertex.triangles.push(tid);
                }
                for other in [corners[(k + 1) % 3], corners[(k + 2) % 3]] {
                    if other != v {
                        vertex.add_neighbor(other);
                    }
                }
            }

            triangles.push(Triangle {
                vertices: corners,
                normal,
                masses_assigned: false,
                adjacent: Vec::with_capacity(3),
            });
        }

        debug!(
            vertices = vertices.len(),
            triangles = triangles.len(),
            "topology built"
        );

        Ok(Self { vertices, triangles })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.index()]
    }

    #[inline]
    pub fn triangle(&self, id: TriangleId) -> &Triangle {
        &self.triangles[id.index()]
    }

    #[inline]
    pub fn triangle_mut(&mut self, id: TriangleId) -> &mut Triangle {
        &mut self.triangles[id.index()]
    }

    /// The ID the next appended vertex will receive.
    #[inline]
    pub fn next_vertex_id(&self) -> VertexId {
        VertexId(self.vertices.len() as u32)
    }

    /// Appends a vertex, re-stamping its ID to the next arena slot.
    pub fn push_vertex(&mut self, mut vertex: Vertex) -> VertexId {
        let id = self.next_vertex_id();
        vertex.id = id;
        self.vertices.push(vertex);
        id
    }

    /// The labels of a triangle's corners, in slot order.
    pub fn triangle_masses(&self, id: TriangleId) -> [MassChannel; 3] {
        self.triangle(id).vertices.map(|v| self.vertex(v).mass)
    }

    /// Number of distinct vertices two triangles have in common.
    pub fn shared_vertex_count(&self, a: TriangleId, b: TriangleId) -> usize {
        let tb = self.triangle(b);
        let corners = self.triangle(a).distinct_vertices();
        corners.iter().filter(|&&v| tb.has_vertex(v)).count()
    }

    /// Triangles whose normal could not be computed, in ID order.
    pub fn degenerate_triangles(&self) -> Vec<TriangleId> {
        self.triangles
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_degenerate())
            .map(|(i, _)| TriangleId(i as u32))
            .collect()
    }

    /// Iterator over `(TriangleId, &Triangle)`.
    pub fn iter_triangles(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> {
        self.triangles
            .iter()
            .enumerate()
            .map(|(i, t)| (TriangleId(i as u32), t))
    }
}
