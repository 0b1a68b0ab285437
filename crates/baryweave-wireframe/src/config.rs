//! Build configuration.
//!
//! Parameters that control how a wireframe mesh is derived: build mode,
//! output naming, normal recomputation, and degeneracy tolerance.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use baryweave_types::constants::{DEGENERATE_NORMAL_THRESHOLD, WIREFRAME_NAME_SUFFIX};
use baryweave_types::{BaryweaveError, BaryweaveResult};
use serde::{Deserialize, Serialize};

/// How triangle corners are mapped to output vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuildMode {
    /// Keep shared vertices, label them over the triangle adjacency graph,
    /// and split only conflicting triangles.
    #[default]
    Shared,
    /// Give every triangle corner its own vertex (3 × triangle count).
    Unshared,
}

impl BuildMode {
    pub fn name(self) -> &'static str {
        match self {
            BuildMode::Shared => "shared",
            BuildMode::Unshared => "unshared",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BuildMode {
    type Err = BaryweaveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "shared" => Ok(BuildMode::Shared),
            "unshared" => Ok(BuildMode::Unshared),
            other => Err(BaryweaveError::InvalidConfig(format!(
                "Unknown build mode '{other}' (expected 'shared' or 'unshared')"
            ))),
        }
    }
}

/// Configuration for a wireframe build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Vertex sharing strategy.
    pub mode: BuildMode,

    /// Appended to the source mesh name to name the derived mesh.
    pub name_suffix: String,

    /// Recompute area-weighted vertex normals on the output mesh.
    pub recompute_normals: bool,

    /// Cross-product length below which a triangle normal is undefined.
    pub degenerate_threshold: f32,

    /// Emit telemetry events on the builder's bus.
    pub emit_events: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            mode: BuildMode::Shared,
            name_suffix: WIREFRAME_NAME_SUFFIX.to_string(),
            recompute_normals: true,
            degenerate_threshold: DEGENERATE_NORMAL_THRESHOLD,
            emit_events: true,
        }
    }
}

impl BuildConfig {
    /// Every corner on its own vertex; no labelling pass.
    pub fn unshared() -> Self {
        Self {
            mode: BuildMode::Unshared,
            ..Default::default()
        }
    }

    /// Parses a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> BaryweaveResult<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| BaryweaveError::InvalidConfig(format!("TOML parse failed: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> BaryweaveResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serializes to TOML.
    pub fn to_toml_string(&self) -> BaryweaveResult<String> {
        toml::to_string(self)
            .map_err(|e| BaryweaveError::Serialization(format!("TOML serialization failed: {e}")))
    }

    /// Checks value ranges.
    pub fn validate(&self) -> BaryweaveResult<()> {
        if self.name_suffix.is_empty() {
            return Err(BaryweaveError::InvalidConfig(
                "name_suffix must not be empty (the derived mesh would shadow its source)".into(),
            ));
        }
        if !self.degenerate_threshold.is_finite() || self.degenerate_threshold < 0.0 {
            return Err(BaryweaveError::InvalidConfig(format!(
                "degenerate_threshold must be finite and non-negative, got {}",
                self.degenerate_threshold
            )));
        }
        Ok(())
    }

    /// Name of the mesh derived from `source_name`.
    pub fn derived_name(&self, source_name: &str) -> String {
        format!("{source_name}{}", self.name_suffix)
    }
}
