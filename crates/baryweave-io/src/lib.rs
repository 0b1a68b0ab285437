//! # baryweave-io
//!
//! Build input/output contract, validation, and mesh persistence.
//!
//! Defines the boundary types that external systems (CLI, asset pipeline)
//! use to hand meshes to the wireframe builder and store what it derives.

pub mod contract;
pub mod persistence;
pub mod validator;

pub use contract::{BuildRequest, BuildResponse};
