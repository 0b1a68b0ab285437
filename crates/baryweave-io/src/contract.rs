//! Build input/output contract types.
//!
//! These types define the I/O boundary of the wireframe builder.
//! They are serializable for transport and for the CLI.

use baryweave_mesh::TriangleMesh;
use baryweave_telemetry::EventBus;
use baryweave_types::BaryweaveResult;
use baryweave_wireframe::{BuildConfig, BuildReport, WireframeBuilder};
use serde::{Deserialize, Serialize};

use crate::validator::validate_request;

/// Everything a build call needs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildRequest {
    /// The mesh to derive a wireframe from. `None` when the host has no
    /// mesh attached; executing such a request fails with `MissingSource`.
    pub source: Option<TriangleMesh>,

    #[serde(default)]
    pub config: BuildConfig,
}

/// The derived mesh and its build report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildResponse {
    pub mesh: TriangleMesh,
    pub report: BuildReport,
}

impl BuildRequest {
    pub fn new(source: TriangleMesh, config: BuildConfig) -> Self {
        Self {
            source: Some(source),
            config,
        }
    }

    /// Validates the request and runs it, flushing events to `bus`.
    pub fn execute_with_bus(&self, bus: EventBus) -> BaryweaveResult<BuildResponse> {
        validate_request(self)?;
        let mut builder = WireframeBuilder::new(self.config.clone()).with_bus(bus);
        let output = builder.build(self.source.as_ref())?;
        Ok(BuildResponse {
            mesh: output.mesh,
            report: output.report,
        })
    }

    /// Validates and runs the request with no telemetry sinks.
    pub fn execute(&self) -> BaryweaveResult<BuildResponse> {
        self.execute_with_bus(EventBus::new())
    }
}
