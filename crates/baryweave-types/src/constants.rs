//! Build defaults.

/// Suffix appended to the source mesh name to name the derived wireframe mesh.
pub const WIREFRAME_NAME_SUFFIX: &str = "_WF";

/// Cross-product length below which a triangle normal is treated as undefined.
pub const DEGENERATE_NORMAL_THRESHOLD: f32 = 1.0e-10;
