//! The wireframe build pipeline.
//!
//! One call owns one working graph from start to finish:
//!
//! ```text
//! validate ─► topology ─► adjacency ─► masses ─► conflicts ─► assemble ─► normals
//! ```
//!
//! Any failure aborts the call with no partial output. Degenerate triangles
//! are reported (log, event, report) but do not stop the build.

use baryweave_math::geom::face_normal;
use baryweave_mesh::adjacency::resolve_adjacency;
use baryweave_mesh::normals::compute_vertex_normals;
use baryweave_mesh::{MeshGraph, TriangleMesh};
use baryweave_telemetry::{BuildEvent, EventBus, EventKind};
use baryweave_types::{BaryweaveError, BaryweaveResult, TriangleId};
use tracing::{info, warn};

use crate::assembler::{assemble, assemble_unshared};
use crate::assignment::assign_masses;
use crate::config::{BuildConfig, BuildMode};
use crate::conflict::resolve_conflicts;
use crate::report::BuildReport;

/// A derived wireframe mesh and how it was produced.
#[derive(Debug, Clone)]
pub struct WireframeOutput {
    pub mesh: TriangleMesh,
    pub report: BuildReport,
}

/// Runs wireframe builds with a fixed configuration and event bus.
///
/// ```text
/// let mut builder = WireframeBuilder::new(BuildConfig::default());
/// let output = builder.build(Some(&mesh))?;
/// ```
pub struct WireframeBuilder {
    config: BuildConfig,
    bus: EventBus,
}

impl WireframeBuilder {
    /// Creates a builder with an event bus that has no sinks.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            bus: EventBus::new(),
        }
    }

    /// Replaces the event bus.
    pub fn with_bus(mut self, bus: EventBus) -> Self {
        self.bus = bus;
        self
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn bus_mut(&mut self) -> &mut EventBus {
        &mut self.bus
    }

    /// Derives a wireframe mesh from `source`.
    ///
    /// `None` fails with `MissingSource`. Events emitted along the way are
    /// flushed to the bus sinks before returning, whether the build
    /// succeeded or not.
    pub fn build(&mut self, source: Option<&TriangleMesh>) -> BaryweaveResult<WireframeOutput> {
        self.bus.set_enabled(self.config.emit_events);
        let result = self.run(source);
        self.bus.flush();
        result
    }

    fn run(&self, source: Option<&TriangleMesh>) -> BaryweaveResult<WireframeOutput> {
        let source = source.ok_or_else(|| {
            BaryweaveError::MissingSource("no source mesh supplied to the build call".into())
        })?;
        self.config.validate()?;
        source.validate()?;

        self.emit(
            &source.name,
            EventKind::BuildBegin {
                mode: self.config.mode.name().to_string(),
            },
        );

        let output_name = self.config.derived_name(&source.name);
        let mut output = match self.config.mode {
            BuildMode::Shared => self.build_shared(source, &output_name)?,
            BuildMode::Unshared => self.build_unshared(source, &output_name),
        };

        if self.config.recompute_normals {
            compute_vertex_normals(&mut output.mesh);
        }

        self.emit(
            &source.name,
            EventKind::MeshAssembled {
                name: output_name,
                vertices: output.mesh.vertex_count(),
                triangles: output.mesh.triangle_count(),
            },
        );
        info!(
            source = %source.name,
            output = %output.report.output_name,
            mode = %self.config.mode,
            vertices = output.report.output_vertices,
            splits = output.report.split_triangles.len(),
            "wireframe built"
        );

        Ok(output)
    }

    fn build_shared(&self, source: &TriangleMesh, output_name: &str) -> BaryweaveResult<WireframeOutput> {
        let name = source.name.as_str();

        let mut graph = MeshGraph::build_with_threshold(source, self.config.degenerate_threshold)?;
        self.emit(
            name,
            EventKind::TopologyBuilt {
                vertices: graph.vertex_count(),
                triangles: graph.triangle_count(),
            },
        );

        let degenerate = graph.degenerate_triangles();
        self.report_degenerate(name, &degenerate);

        let adjacency_pairs = resolve_adjacency(&mut graph);
        self.emit(name, EventKind::AdjacencyResolved { pairs: adjacency_pairs });

        let components = assign_masses(&mut graph);
        self.emit(name, EventKind::MassesAssigned { components });

        let splits = resolve_conflicts(&mut graph);
        for split in &splits {
            self.emit(
                name,
                EventKind::TriangleSplit {
                    triangle: split.triangle,
                    first_vertex: split.first_vertex,
                },
            );
        }
        debug_assert!(crate::conflict::find_conflicts(&graph).is_empty());

        let mesh = assemble(&graph, output_name);
        let report = BuildReport {
            source_name: source.name.clone(),
            output_name: output_name.to_string(),
            mode: BuildMode::Shared,
            source_vertices: source.vertex_count(),
            output_vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            adjacency_pairs,
            components,
            split_triangles: splits.iter().map(|s| s.triangle).collect(),
            degenerate_triangles: degenerate,
        };

        Ok(WireframeOutput { mesh, report })
    }

    fn build_unshared(&self, source: &TriangleMesh, output_name: &str) -> WireframeOutput {
        let threshold = self.config.degenerate_threshold;
        let degenerate: Vec<TriangleId> = (0..source.triangle_count())
            .filter(|&t| {
                let [a, b, c] = source.triangle(t).map(|i| source.position_vec3(i as usize));
                face_normal(a, b, c, threshold).is_none()
            })
            .map(|t| TriangleId(t as u32))
            .collect();
        self.report_degenerate(&source.name, &degenerate);

        let mesh = assemble_unshared(source, output_name);
        let report = BuildReport {
            source_name: source.name.clone(),
            output_name: output_name.to_string(),
            mode: BuildMode::Unshared,
            source_vertices: source.vertex_count(),
            output_vertices: mesh.vertex_count(),
            triangles: mesh.triangle_count(),
            degenerate_triangles: degenerate,
            ..Default::default()
        };
        WireframeOutput { mesh, report }
    }

    fn report_degenerate(&self, mesh: &str, triangles: &[TriangleId]) {
        for &triangle in triangles {
            warn!(%mesh, %triangle, "triangle normal is undefined (collinear or coincident corners)");
            self.emit(mesh, EventKind::DegenerateTriangle { triangle });
        }
    }

    fn emit(&self, mesh: &str, kind: EventKind) {
        self.bus.emit(BuildEvent::new(mesh, kind));
    }
}

/// Builds a wireframe mesh with the default configuration and no sinks.
pub fn build_wireframe(source: &TriangleMesh) -> BaryweaveResult<WireframeOutput> {
    WireframeBuilder::new(BuildConfig::default()).build(Some(source))
}
