//! Integration tests for baryweave-wireframe.

use baryweave_mesh::adjacency::resolve_adjacency;
use baryweave_mesh::generators::{quad_grid, triangle_fan, uv_sphere};
use baryweave_mesh::{MeshGraph, TriangleMesh};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use baryweave_telemetry::{EventBus, EventKind, TracingSink, VecSink};
use baryweave_types::{BaryweaveError, MassChannel, TriangleId, VertexId};
use baryweave_wireframe::assignment::{assign_masses, assign_triangle_masses, clear_assignment_flags};
use baryweave_wireframe::conflict::{find_conflicts, has_duplicate_masses, resolve_conflicts};
use baryweave_wireframe::{build_wireframe, BuildConfig, BuildMode, WireframeBuilder};
use proptest::prelude::*;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use MassChannel::{First, Second, Third, Unassigned};

// ─── Helpers ──────────────────────────────────────────────────

fn single_triangle() -> TriangleMesh {
    TriangleMesh::from_interleaved(
        "tri",
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        &[0, 1, 2],
        &[],
    )
    .unwrap()
}

fn unit_quad() -> TriangleMesh {
    TriangleMesh::from_interleaved(
        "quad",
        &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        &[0, 1, 2, 0, 2, 3],
        &[],
    )
    .unwrap()
}

fn labelled_graph(mesh: &TriangleMesh) -> MeshGraph {
    let mut graph = MeshGraph::build(mesh).unwrap();
    resolve_adjacency(&mut graph);
    assign_masses(&mut graph);
    graph
}

/// Decodes output colors back into masses.
fn output_masses(mesh: &TriangleMesh) -> Vec<MassChannel> {
    (0..mesh.vertex_count())
        .map(|i| MassChannel::from_rgb(mesh.color_r[i], mesh.color_g[i], mesh.color_b[i]))
        .collect()
}

/// Every triangle's corners carry a permutation of the three canonical masses.
fn assert_valid_labelling(mesh: &TriangleMesh) {
    let masses = output_masses(mesh);
    for t in 0..mesh.triangle_count() {
        let mut slots: Vec<usize> = mesh
            .triangle(t)
            .iter()
            .map(|&v| masses[v as usize].slot().expect("unassigned mass in output"))
            .collect();
        slots.sort_unstable();
        assert_eq!(slots, vec![0, 1, 2], "triangle {t} has masses {slots:?}");
    }
}

/// Counts `WARN` records seen by the subscriber.
struct WarnCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

fn quad_with_sliver() -> TriangleMesh {
    let mut mesh = unit_quad();
    // Collinear sliver along the bottom edge.
    mesh.pos_x.push(2.0);
    mesh.pos_y.push(0.0);
    mesh.pos_z.push(0.0);
    mesh.indices.extend_from_slice(&[0, 1, 4]);
    mesh
}

// ─── Mass Assignment Tests ────────────────────────────────────

#[test]
fn single_triangle_gets_canonical_order() {
    let graph = labelled_graph(&single_triangle());
    assert_eq!(graph.triangle_masses(TriangleId(0)), [First, Second, Third]);
}

#[test]
fn triangle_fills_around_fixed_corner() {
    let mut graph = MeshGraph::build(&single_triangle()).unwrap();
    graph.vertex_mut(VertexId(1)).mass = First;
    assign_triangle_masses(&mut graph, TriangleId(0));
    assert_eq!(graph.triangle_masses(TriangleId(0)), [Second, First, Third]);
    assert!(graph.triangle(TriangleId(0)).masses_assigned);
}

#[test]
fn assigned_masses_are_never_overwritten() {
    let mut graph = MeshGraph::build(&single_triangle()).unwrap();
    graph.vertex_mut(VertexId(0)).mass = Third;
    graph.vertex_mut(VertexId(2)).mass = Third;
    assign_triangle_masses(&mut graph, TriangleId(0));
    assert_eq!(graph.triangle_masses(TriangleId(0)), [Third, First, Third]);
}

#[test]
fn quad_labels_without_conflict() {
    let graph = labelled_graph(&unit_quad());
    assert_eq!(graph.triangle_masses(TriangleId(0)), [First, Second, Third]);
    assert_eq!(graph.triangle_masses(TriangleId(1)), [First, Third, Second]);
    assert!(find_conflicts(&graph).is_empty());
}

#[test]
fn every_vertex_in_a_triangle_is_labelled() {
    let graph = labelled_graph(&uv_sphere(1.0, 6, 10));
    assert!(graph.triangles.iter().all(|t| t.masses_assigned));
    for tri in &graph.triangles {
        for v in tri.vertices {
            assert!(graph.vertex(v).mass.is_assigned());
        }
    }
}

#[test]
fn reassignment_is_idempotent() {
    let mut graph = labelled_graph(&quad_grid(4, 3, 1.0, 1.0));
    let before: Vec<MassChannel> = graph.vertices.iter().map(|v| v.mass).collect();

    assert_eq!(assign_masses(&mut graph), 0);
    clear_assignment_flags(&mut graph);
    assign_masses(&mut graph);

    let after: Vec<MassChannel> = graph.vertices.iter().map(|v| v.mass).collect();
    assert_eq!(before, after);
}

#[test]
fn disconnected_components_are_all_visited() {
    let mut mesh = unit_quad();
    let mut other = unit_quad();
    for x in &mut other.pos_x {
        *x += 5.0;
    }
    mesh.append(&other);

    let mut graph = MeshGraph::build(&mesh).unwrap();
    resolve_adjacency(&mut graph);
    assert_eq!(assign_masses(&mut graph), 2);
    assert!(graph.vertices.iter().all(|v| v.mass.is_assigned()));
    assert!(find_conflicts(&graph).is_empty());
    // Each component labels exactly like a lone quad.
    assert_eq!(graph.triangle_masses(TriangleId(2)), [First, Second, Third]);
    assert_eq!(graph.triangle_masses(TriangleId(3)), [First, Third, Second]);
}

#[test]
fn empty_graph_has_no_components() {
    let mut graph = MeshGraph::build(&TriangleMesh::default()).unwrap();
    assert_eq!(assign_masses(&mut graph), 0);
}

// ─── Conflict Tests ───────────────────────────────────────────

#[test]
fn duplicate_detection() {
    assert!(!has_duplicate_masses([First, Second, Third]));
    assert!(has_duplicate_masses([First, Second, First]));
    assert!(has_duplicate_masses([Third, Third, Third]));
    // Unassigned corners never count as a conflict.
    assert!(!has_duplicate_masses([First, First, Unassigned]));
}

#[test]
fn odd_fan_forces_a_split() {
    let mut graph = labelled_graph(&triangle_fan(5, 1.0));
    assert_eq!(find_conflicts(&graph), vec![TriangleId(4)]);

    let splits = resolve_conflicts(&mut graph);
    assert_eq!(splits.len(), 1);
    assert_eq!(splits[0].triangle, TriangleId(4));
    assert_eq!(splits[0].first_vertex, VertexId(6));
    assert_eq!(graph.vertex_count(), 9);
    assert_eq!(
        graph.triangle(TriangleId(4)).vertices,
        [VertexId(6), VertexId(7), VertexId(8)]
    );
    assert_eq!(graph.triangle_masses(TriangleId(4)), [First, Second, Third]);
    assert!(find_conflicts(&graph).is_empty());
}

#[test]
fn split_vertices_inherit_attributes() {
    let mesh = triangle_fan(5, 2.0);
    let mut graph = labelled_graph(&mesh);
    let old = graph.triangle(TriangleId(4)).vertices;
    resolve_conflicts(&mut graph);
    let new = graph.triangle(TriangleId(4)).vertices;

    for k in 0..3 {
        let (o, n) = (graph.vertex(old[k]), graph.vertex(new[k]));
        assert_eq!(n.id, new[k]);
        assert_eq!(o.position, n.position);
        assert_eq!(o.uv, n.uv);
        assert_eq!(o.color, n.color);
        assert_eq!(n.triangles, vec![TriangleId(4)]);
        assert_eq!(n.neighbors.len(), 2);
    }
}

#[test]
fn split_leaves_original_vertices_labelled() {
    let mut graph = labelled_graph(&triangle_fan(5, 1.0));
    let before: Vec<MassChannel> = graph.vertices.iter().map(|v| v.mass).collect();
    resolve_conflicts(&mut graph);
    for (i, &mass) in before.iter().enumerate() {
        assert_eq!(graph.vertices[i].mass, mass);
    }
}

// ─── Pipeline Tests ───────────────────────────────────────────

#[test]
fn build_single_triangle() {
    let output = build_wireframe(&single_triangle()).unwrap();
    assert_eq!(output.mesh.vertex_count(), 3);
    assert_eq!(output.mesh.indices, vec![0, 1, 2]);
    assert_eq!(output_masses(&output.mesh), vec![First, Second, Third]);
    assert_eq!(output.mesh.color_a, vec![1.0; 3]);
}

#[test]
fn build_quad_has_no_splits() {
    let output = build_wireframe(&unit_quad()).unwrap();
    assert_eq!(output.mesh.vertex_count(), 4);
    assert_eq!(output.mesh.indices, vec![0, 1, 2, 0, 2, 3]);
    assert!(output.report.split_triangles.is_empty());
    assert_eq!(output.report.added_vertices(), 0);
    assert_valid_labelling(&output.mesh);
}

#[test]
fn build_fan_adds_three_vertices_per_split() {
    let source = triangle_fan(5, 1.0);
    let output = build_wireframe(&source).unwrap();
    let splits = output.report.split_triangles.len();
    assert!(splits >= 1);
    assert_eq!(output.mesh.vertex_count(), source.vertex_count() + 3 * splits);
    assert_eq!(output.mesh.triangle_count(), source.triangle_count());
    assert_valid_labelling(&output.mesh);
}

#[test]
fn build_sphere_is_valid() {
    let source = uv_sphere(1.0, 8, 12);
    let output = build_wireframe(&source).unwrap();
    assert_eq!(output.mesh.triangle_count(), source.triangle_count());
    assert!(output.mesh.vertex_count() >= source.vertex_count());
    assert_eq!(
        output.mesh.vertex_count(),
        source.vertex_count() + 3 * output.report.split_triangles.len()
    );
    assert_valid_labelling(&output.mesh);
    assert!(output.mesh.validate().is_ok());
}

#[test]
fn build_names_output_with_suffix() {
    let output = build_wireframe(&unit_quad()).unwrap();
    assert_eq!(output.mesh.name, "quad_WF");
    assert_eq!(output.report.output_name, "quad_WF");

    let config = BuildConfig {
        name_suffix: "_wire".into(),
        ..Default::default()
    };
    let output = WireframeBuilder::new(config).build(Some(&unit_quad())).unwrap();
    assert_eq!(output.mesh.name, "quad_wire");
}

#[test]
fn build_defaults_missing_uvs_to_zero() {
    let output = build_wireframe(&unit_quad()).unwrap();
    assert_eq!(output.mesh.uv_u, vec![0.0; 4]);
    assert_eq!(output.mesh.uv_v, vec![0.0; 4]);
}

#[test]
fn build_recomputes_normals() {
    let output = build_wireframe(&unit_quad()).unwrap();
    assert_eq!(output.mesh.normal_z.len(), 4);
    assert!(output.mesh.normal_z.iter().all(|&z| (z - 1.0).abs() < 1e-5));

    let config = BuildConfig {
        recompute_normals: false,
        ..Default::default()
    };
    let output = WireframeBuilder::new(config).build(Some(&unit_quad())).unwrap();
    assert!(!output.mesh.has_normals());
}

#[test]
fn build_without_source_fails() {
    let mut builder = WireframeBuilder::new(BuildConfig::default());
    assert!(matches!(builder.build(None), Err(BaryweaveError::MissingSource(_))));
}

#[test]
fn build_rejects_bad_indices() {
    let mut mesh = unit_quad();
    mesh.indices.truncate(5);
    assert!(matches!(build_wireframe(&mesh), Err(BaryweaveError::InvalidMesh(_))));

    let mut mesh = unit_quad();
    mesh.indices[4] = 10;
    assert!(matches!(build_wireframe(&mesh), Err(BaryweaveError::InvalidMesh(_))));
}

#[test]
fn degenerate_triangle_is_reported_not_fatal() {
    let mesh = quad_with_sliver();

    let sink = VecSink::new();
    let bus = EventBus::new().with_sink(Box::new(sink.clone()));
    let output = WireframeBuilder::new(BuildConfig::default())
        .with_bus(bus)
        .build(Some(&mesh))
        .unwrap();

    assert_eq!(output.report.degenerate_triangles, vec![TriangleId(2)]);
    assert!(sink
        .events()
        .iter()
        .any(|e| e.kind == EventKind::DegenerateTriangle { triangle: TriangleId(2) }));
    assert_valid_labelling(&output.mesh);
}

#[test]
fn degenerate_triangle_warns_once_with_tracing_sink() {
    let warnings = Arc::new(AtomicUsize::new(0));
    let subscriber = tracing_subscriber::registry().with(WarnCounter(warnings.clone()));

    tracing::subscriber::with_default(subscriber, || {
        let bus = EventBus::new().with_sink(Box::new(TracingSink::new(tracing::Level::TRACE)));
        WireframeBuilder::new(BuildConfig::default())
            .with_bus(bus)
            .build(Some(&quad_with_sliver()))
            .unwrap();
    });

    assert_eq!(warnings.load(Ordering::SeqCst), 1);
}

#[test]
fn repeated_corner_triangle_is_split_not_rejected() {
    let mut mesh = single_triangle();
    mesh.indices.extend_from_slice(&[0, 0, 1]);

    let output = build_wireframe(&mesh).unwrap();

    assert_eq!(output.report.split_triangles, vec![TriangleId(1)]);
    assert_eq!(output.report.degenerate_triangles, vec![TriangleId(1)]);
    assert_eq!(output.mesh.vertex_count(), 6);
    assert_eq!(output.mesh.triangle(1), [3, 4, 5]);
    assert_valid_labelling(&output.mesh);
}

#[test]
fn build_emits_stage_events_in_order() {
    let sink = VecSink::new();
    let bus = EventBus::new().with_sink(Box::new(sink.clone()));
    let mut builder = WireframeBuilder::new(BuildConfig::default()).with_bus(bus);
    builder.build(Some(&triangle_fan(5, 1.0))).unwrap();

    let labels: Vec<&'static str> = sink
        .events()
        .iter()
        .map(|e| match e.kind {
            EventKind::BuildBegin { .. } => "begin",
            EventKind::TopologyBuilt { .. } => "topology",
            EventKind::DegenerateTriangle { .. } => "degenerate",
            EventKind::AdjacencyResolved { .. } => "adjacency",
            EventKind::MassesAssigned { .. } => "masses",
            EventKind::TriangleSplit { .. } => "split",
            EventKind::MeshAssembled { .. } => "assembled",
            EventKind::Custom { .. } => "custom",
        })
        .collect();
    assert_eq!(
        labels,
        vec!["begin", "topology", "adjacency", "masses", "split", "assembled"]
    );
    assert!(sink.events().iter().all(|e| e.mesh == "triangle_fan"));
}

#[test]
fn disabled_events_reach_no_sink() {
    let sink = VecSink::new();
    let config = BuildConfig {
        emit_events: false,
        ..Default::default()
    };
    let mut builder =
        WireframeBuilder::new(config).with_bus(EventBus::new().with_sink(Box::new(sink.clone())));
    builder.build(Some(&unit_quad())).unwrap();
    assert!(sink.is_empty());
}

#[test]
fn build_is_deterministic() {
    let source = uv_sphere(1.0, 7, 9);
    let a = build_wireframe(&source).unwrap();
    let b = build_wireframe(&source).unwrap();
    assert_eq!(a.mesh, b.mesh);
    assert_eq!(a.report, b.report);
}

// ─── Unshared Mode Tests ──────────────────────────────────────

#[test]
fn unshared_gives_every_corner_a_vertex() {
    let source = unit_quad();
    let output = WireframeBuilder::new(BuildConfig::unshared())
        .build(Some(&source))
        .unwrap();
    assert_eq!(output.report.mode, BuildMode::Unshared);
    assert_eq!(output.mesh.vertex_count(), 6);
    assert_eq!(output.mesh.indices, vec![0, 1, 2, 3, 4, 5]);
    assert_eq!(
        output_masses(&output.mesh),
        vec![First, Second, Third, First, Second, Third]
    );
    assert_eq!(output.mesh.position(3), source.position(0));
    assert_eq!(output.mesh.position(4), source.position(2));
    assert_valid_labelling(&output.mesh);
}

#[test]
fn unshared_carries_uvs() {
    let source = triangle_fan(4, 1.0);
    let output = WireframeBuilder::new(BuildConfig::unshared())
        .build(Some(&source))
        .unwrap();
    // Corner 1 of triangle 0 is source vertex 1.
    assert_eq!(output.mesh.uv_u[1], source.uv_u[1]);
    assert_eq!(output.mesh.uv_v[1], source.uv_v[1]);
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn default_config() {
    let config = BuildConfig::default();
    assert_eq!(config.mode, BuildMode::Shared);
    assert_eq!(config.name_suffix, "_WF");
    assert!(config.recompute_normals);
    assert!(config.validate().is_ok());
}

#[test]
fn config_from_toml_fills_defaults() {
    let config = BuildConfig::from_toml_str("mode = \"unshared\"\nname_suffix = \"_wire\"\n").unwrap();
    assert_eq!(config.mode, BuildMode::Unshared);
    assert_eq!(config.name_suffix, "_wire");
    assert!(config.recompute_normals);
}

#[test]
fn config_toml_round_trip() {
    let config = BuildConfig::unshared();
    let text = config.to_toml_string().unwrap();
    assert_eq!(BuildConfig::from_toml_str(&text).unwrap(), config);
}

#[test]
fn config_rejects_unknown_mode() {
    assert!(matches!(
        BuildConfig::from_toml_str("mode = \"sparse\""),
        Err(BaryweaveError::InvalidConfig(_))
    ));
    assert!("sparse".parse::<BuildMode>().is_err());
    assert_eq!("Unshared".parse::<BuildMode>().unwrap(), BuildMode::Unshared);
}

#[test]
fn config_rejects_empty_suffix() {
    let config = BuildConfig {
        name_suffix: String::new(),
        ..Default::default()
    };
    assert!(config.validate().is_err());
    assert!(WireframeBuilder::new(config).build(Some(&unit_quad())).is_err());
}

#[test]
fn report_serializes() {
    let output = build_wireframe(&triangle_fan(5, 1.0)).unwrap();
    let json = serde_json::to_string(&output.report).unwrap();
    assert!(json.contains("split_triangles"));
    let row = output.report.to_csv_row();
    assert!(row.starts_with("triangle_fan,triangle_fan_WF,shared,6,9,5"));
    let header = baryweave_wireframe::BuildReport::to_csv_header();
    assert_eq!(header.split(',').count(), row.split(',').count());
}

// ─── Property Tests ───────────────────────────────────────────

proptest! {
    #[test]
    fn prop_labelling_is_always_valid(
        cols in 1usize..7,
        rows in 1usize..7,
        order in prop::collection::vec(any::<u32>(), 72),
        flip in any::<bool>(),
    ) {
        // Shuffle triangle order and optionally rotate corners to vary traversal.
        let grid = quad_grid(cols, rows, 1.0, 1.0);
        let mut tris: Vec<(u32, [u32; 3])> = (0..grid.triangle_count())
            .map(|t| (order[t % order.len()], grid.triangle(t)))
            .collect();
        tris.sort_by_key(|&(key, _)| key);

        let mut mesh = grid.clone();
        mesh.indices.clear();
        for (_, [a, b, c]) in tris {
            let corners = if flip { [b, c, a] } else { [a, b, c] };
            mesh.indices.extend_from_slice(&corners);
        }

        let output = build_wireframe(&mesh).unwrap();
        prop_assert_eq!(output.mesh.triangle_count(), mesh.triangle_count());
        prop_assert_eq!(
            output.mesh.vertex_count(),
            mesh.vertex_count() + 3 * output.report.split_triangles.len()
        );
        assert_valid_labelling(&output.mesh);
    }

    #[test]
    fn prop_fans_resolve(segments in 3usize..12) {
        let source = triangle_fan(segments, 1.0);
        let output = build_wireframe(&source).unwrap();
        assert_valid_labelling(&output.mesh);
        // The hub takes the first channel, so the ring alternates the other
        // two and only closes cleanly around an even number of segments.
        if segments % 2 == 0 {
            prop_assert!(output.report.split_triangles.is_empty());
        } else {
            prop_assert!(!output.report.split_triangles.is_empty());
        }
    }
}
