//! Request and output validation.
//!
//! Catches data-level errors before the builder runs, and checks derived
//! meshes for the labelling invariant afterwards.

use baryweave_mesh::TriangleMesh;
use baryweave_types::{BaryweaveError, BaryweaveResult, MassChannel};

use crate::contract::BuildRequest;

/// Validates a build request.
///
/// Checks:
/// - A source mesh is present
/// - Source mesh integrity (channel lengths, index count and range)
/// - Configuration values
pub fn validate_request(request: &BuildRequest) -> BaryweaveResult<()> {
    let source = request.source.as_ref().ok_or_else(|| {
        BaryweaveError::MissingSource("build request carries no source mesh".into())
    })?;

    source.validate().map_err(|e| match e {
        BaryweaveError::InvalidMesh(msg) => {
            BaryweaveError::InvalidMesh(format!("Source mesh '{}': {msg}", source.name))
        }
        other => other,
    })?;

    request.config.validate()?;
    Ok(())
}

/// Checks that a derived mesh can be drawn as a wireframe.
///
/// Every triangle's three vertex colors must decode to a permutation of the
/// canonical masses: none unassigned, none repeated. The first offending
/// triangle is reported as `InvariantViolation`.
pub fn validate_wireframe(mesh: &TriangleMesh) -> BaryweaveResult<()> {
    mesh.validate()?;
    if !mesh.has_colors() && mesh.triangle_count() > 0 {
        return Err(BaryweaveError::InvariantViolation(format!(
            "Mesh '{}' has no color channel to carry masses",
            mesh.name
        )));
    }

    for t in 0..mesh.triangle_count() {
        let masses = mesh.triangle(t).map(|v| decode_mass(mesh, v as usize));
        let mut seen = [false; 3];
        for (corner, mass) in masses.iter().enumerate() {
            let Some(slot) = mass.slot() else {
                return Err(BaryweaveError::InvariantViolation(format!(
                    "Triangle {t} corner {corner} has no mass"
                )));
            };
            if seen[slot] {
                return Err(BaryweaveError::InvariantViolation(format!(
                    "Triangle {t} repeats mass {mass:?}"
                )));
            }
            seen[slot] = true;
        }
    }

    Ok(())
}

/// Counts how many vertices carry each mass, as `[unassigned, first, second, third]`.
pub fn mass_histogram(mesh: &TriangleMesh) -> [usize; 4] {
    let mut counts = [0; 4];
    if !mesh.has_colors() {
        counts[0] = mesh.vertex_count();
        return counts;
    }
    for i in 0..mesh.vertex_count() {
        let bucket = decode_mass(mesh, i).slot().map_or(0, |s| s + 1);
        counts[bucket] += 1;
    }
    counts
}

fn decode_mass(mesh: &TriangleMesh, i: usize) -> MassChannel {
    MassChannel::from_rgb(mesh.color_r[i], mesh.color_g[i], mesh.color_b[i])
}
