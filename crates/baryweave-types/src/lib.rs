//! # baryweave-types
//!
//! Shared types, identifiers, error types, and constants
//! for the baryweave wireframe mesh builder.
//!
//! This crate has zero domain logic. It defines the vocabulary
//! that all other baryweave crates share.

pub mod constants;
pub mod error;
pub mod ids;
pub mod mass;

pub use error::{BaryweaveError, BaryweaveResult};
pub use ids::{TriangleId, VertexId};
pub use mass::MassChannel;
