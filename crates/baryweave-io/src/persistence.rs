//! JSON persistence for meshes, requests, and reports.

use std::path::{Path, PathBuf};

use baryweave_mesh::TriangleMesh;
use baryweave_types::{BaryweaveError, BaryweaveResult};
use baryweave_wireframe::BuildReport;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Writes a mesh as pretty-printed JSON.
pub fn save_mesh(mesh: &TriangleMesh, path: impl AsRef<Path>) -> BaryweaveResult<()> {
    write_json(mesh, path.as_ref())?;
    debug!(
        mesh = %mesh.name,
        path = %path.as_ref().display(),
        vertices = mesh.vertex_count(),
        "mesh saved"
    );
    Ok(())
}

/// Reads a mesh from JSON. The mesh is not validated.
pub fn load_mesh(path: impl AsRef<Path>) -> BaryweaveResult<TriangleMesh> {
    read_json(path.as_ref())
}

/// Writes a build report as pretty-printed JSON.
pub fn save_report(report: &BuildReport, path: impl AsRef<Path>) -> BaryweaveResult<()> {
    write_json(report, path.as_ref())
}

pub fn load_report(path: impl AsRef<Path>) -> BaryweaveResult<BuildReport> {
    read_json(path.as_ref())
}

/// Default output path for a derived mesh: `<dir of source>/<mesh name>.json`.
pub fn derived_path(source_path: &Path, mesh: &TriangleMesh) -> PathBuf {
    source_path.with_file_name(format!("{}.json", mesh.name))
}

fn write_json<T: Serialize>(value: &T, path: &Path) -> BaryweaveResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| BaryweaveError::Serialization(format!("JSON serialization failed: {e}")))?;
    std::fs::write(path, json)?;
    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> BaryweaveResult<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        BaryweaveError::Serialization(format!("Failed to parse {}: {e}", path.display()))
    })
}
