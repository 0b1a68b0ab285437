//! CLI command implementations.

use std::path::Path;

use baryweave_io::persistence::{derived_path, load_mesh, save_mesh, save_report};
use baryweave_io::validator::{mass_histogram, validate_wireframe};
use baryweave_io::{BuildRequest, BuildResponse};
use baryweave_mesh::generators::{quad_grid, triangle_fan, uv_sphere};
use baryweave_telemetry::{EventBus, TracingSink};
use baryweave_wireframe::{BuildConfig, BuildMode, BuildReport};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

fn event_bus(verbose: bool) -> EventBus {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::TRACE
    };
    EventBus::new().with_sink(Box::new(TracingSink::new(level)))
}

/// Derive a wireframe mesh from a JSON mesh file.
pub fn build(
    input: &str,
    output: Option<&str>,
    config_path: Option<&str>,
    mode: Option<&str>,
    report_path: Option<&str>,
    verbose: bool,
) -> CommandResult {
    let mut config = match config_path {
        Some(path) => BuildConfig::load(path)?,
        None => BuildConfig::default(),
    };
    if let Some(mode) = mode {
        config.mode = mode.parse::<BuildMode>()?;
    }

    let source = load_mesh(input)?;
    let response = BuildRequest::new(source, config).execute_with_bus(event_bus(verbose))?;

    let out_path = match output {
        Some(path) => Path::new(path).to_path_buf(),
        None => derived_path(Path::new(input), &response.mesh),
    };
    save_mesh(&response.mesh, &out_path)?;
    if let Some(path) = report_path {
        save_report(&response.report, path)?;
    }

    print_report(&response.report);
    println!("Mesh written to: {}", out_path.display());
    Ok(())
}

/// Validate a mesh or config.
pub fn validate(path: &str) -> CommandResult {
    println!("baryweave validator");
    println!("───────────────────");
    println!();

    if path.ends_with(".toml") {
        println!("Validating config: {path}");
        let config = BuildConfig::load(path)?;
        println!("✅ Config is valid (mode: {}).", config.mode);
    } else if path.ends_with(".json") {
        println!("Validating mesh: {path}");
        let mesh = load_mesh(path)?;
        if let Err(e) = mesh.validate() {
            println!("❌ Mesh validation failed: {e}");
            return Err(e.into());
        }
        println!(
            "✅ Mesh is valid ({} verts, {} tris).",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        if mesh.has_colors() {
            if let Err(e) = validate_wireframe(&mesh) {
                println!("❌ Wireframe check failed: {e}");
                return Err(e.into());
            }
            println!("✅ Barycentric masses are consistent.");
        }
    } else {
        println!("Unsupported file format. Use .toml (config) or .json (mesh).");
        return Err("Unsupported file format".into());
    }

    Ok(())
}

/// Print counts and the mass histogram of a mesh.
pub fn inspect(path: &str) -> CommandResult {
    let mesh = load_mesh(path)?;
    mesh.validate()?;

    println!("baryweave mesh inspector");
    println!("────────────────────────");
    println!();
    println!("Name:        {}", mesh.name);
    println!("Vertices:    {}", mesh.vertex_count());
    println!("Triangles:   {}", mesh.triangle_count());
    println!("UVs:         {}", if mesh.has_uvs() { "yes" } else { "no" });
    println!("Colors:      {}", if mesh.has_colors() { "yes" } else { "no" });

    let [unassigned, first, second, third] = mass_histogram(&mesh);
    println!();
    println!("Masses:");
    println!("  (1,0,0)    {first}");
    println!("  (0,1,0)    {second}");
    println!("  (0,0,1)    {third}");
    println!("  other      {unassigned}");
    Ok(())
}

/// Build a generated mesh.
pub fn demo(shape: &str, output: Option<&str>, verbose: bool) -> CommandResult {
    let source = match shape {
        "fan" => triangle_fan(5, 1.0),
        "grid" => quad_grid(8, 8, 2.0, 2.0),
        "sphere" => uv_sphere(1.0, 12, 24),
        other => {
            eprintln!("Unknown shape: {other}");
            eprintln!("Available: fan, grid, sphere");
            return Err("Unknown shape".into());
        }
    };

    let response: BuildResponse =
        BuildRequest::new(source, BuildConfig::default()).execute_with_bus(event_bus(verbose))?;
    validate_wireframe(&response.mesh)?;
    print_report(&response.report);

    if let Some(path) = output {
        save_mesh(&response.mesh, path)?;
        println!("Mesh written to: {path}");
    }
    Ok(())
}

fn print_report(report: &BuildReport) {
    println!("Source:      {} ({} verts)", report.source_name, report.source_vertices);
    println!("Output:      {} ({} verts)", report.output_name, report.output_vertices);
    println!("Mode:        {}", report.mode);
    println!("Triangles:   {}", report.triangles);
    if report.mode == BuildMode::Shared {
        println!("Adjacency:   {} pairs", report.adjacency_pairs);
        println!("Components:  {}", report.components);
        println!("Splits:      {} (+{} verts)", report.split_triangles.len(), report.added_vertices());
    }
    if !report.degenerate_triangles.is_empty() {
        println!("Degenerate:  {}", report.degenerate_triangles.len());
    }
}

