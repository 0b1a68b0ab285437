//! # baryweave-mesh
//!
//! Triangle mesh representation and the topology graph the wireframe
//! labelling runs on.
//!
//! ## Key Types
//!
//! - [`TriangleMesh`] — Host-facing mesh descriptor. Stores positions, normals,
//!   UVs, colors, and indices in contiguous SoA buffers.
//! - [`MeshGraph`] — Arena of [`Vertex`] and [`Triangle`] records with
//!   index-based incidence, built by the topology builder.
//! - [`adjacency::resolve_adjacency`] — Edge adjacency between triangles.
//! - Procedural generators for test meshes (quad grids, UV spheres, fans).

pub mod adjacency;
pub mod generators;
pub mod graph;
pub mod mesh;
pub mod normals;

pub use graph::{MeshGraph, Triangle, Vertex};
pub use mesh::TriangleMesh;
