//! Build report: what a wireframe build did to its source.

use baryweave_types::TriangleId;
use serde::{Deserialize, Serialize};

use crate::config::BuildMode;

/// Summary of one wireframe build.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildReport {
    /// Source mesh name.
    pub source_name: String,
    /// Derived mesh name.
    pub output_name: String,
    pub mode: BuildMode,
    pub source_vertices: usize,
    pub output_vertices: usize,
    /// Triangle count (identical for source and output).
    pub triangles: usize,
    /// Adjacent triangle pairs found (shared mode only).
    pub adjacency_pairs: usize,
    /// Disconnected adjacency components labelled (shared mode only).
    pub components: usize,
    /// Triangles rebuilt on fresh vertices to break a labelling conflict.
    pub split_triangles: Vec<TriangleId>,
    /// Triangles with an undefined normal. Reported, not rejected.
    pub degenerate_triangles: Vec<TriangleId>,
}

impl BuildReport {
    /// Vertices added on top of the source vertex count.
    pub fn added_vertices(&self) -> usize {
        self.output_vertices.saturating_sub(self.source_vertices)
    }

    /// Format as CSV header.
    pub fn to_csv_header() -> String {
        "source,output,mode,source_vertices,output_vertices,triangles,adjacency_pairs,components,splits,degenerate".to_string()
    }

    /// Format this report as a CSV data row.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{},{}",
            self.source_name,
            self.output_name,
            self.mode,
            self.source_vertices,
            self.output_vertices,
            self.triangles,
            self.adjacency_pairs,
            self.components,
            self.split_triangles.len(),
            self.degenerate_triangles.len(),
        )
    }
}
