//! # baryweave-wireframe
//!
//! Derives a wireframe mesh whose vertex colors carry one-hot barycentric
//! labels ("masses"), so a single shader pass can draw triangle edges.
//!
//! ## Pipeline
//!
//! ```text
//! TriangleMesh ─► MeshGraph::build ─► resolve_adjacency ─► assign_masses
//!              ─► resolve_conflicts ─► assemble ─► TriangleMesh (+ BuildReport)
//! ```
//!
//! ## Key Types
//!
//! - [`WireframeBuilder`] — Runs the pipeline and emits telemetry.
//! - [`BuildConfig`] — Mode, naming, and normal options (TOML-loadable).
//! - [`BuildReport`] — Counts, split triangles, and degenerate triangles.

pub mod assembler;
pub mod assignment;
pub mod builder;
pub mod config;
pub mod conflict;
pub mod report;

pub use builder::{build_wireframe, WireframeBuilder, WireframeOutput};
pub use config::{BuildConfig, BuildMode};
pub use report::BuildReport;
