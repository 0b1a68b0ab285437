//! # baryweave-math
//!
//! Vector primitives for the baryweave mesh pipeline.
//!
//! Provides:
//! - Re-exports of `glam` types (`Vec2`, `Vec3`, `Vec4`)
//! - Triangle geometry helpers (face cross products and unit normals)

pub mod geom;

// Re-export glam types as the canonical math types for baryweave.
pub use glam::{Vec2, Vec3, Vec4};
