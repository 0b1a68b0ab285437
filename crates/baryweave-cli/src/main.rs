//! baryweave CLI — wireframe mesh builds, validation, and inspection.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "baryweave")]
#[command(version, about = "baryweave — barycentric wireframe mesh builder")]
struct Cli {
    /// Log build events at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a wireframe mesh from a JSON mesh file.
    Build {
        /// Path to the source mesh (JSON).
        input: String,

        /// Output mesh path. Defaults to `<mesh name><suffix>.json` next to the input.
        #[arg(short, long)]
        output: Option<String>,

        /// Build config (TOML).
        #[arg(short, long)]
        config: Option<String>,

        /// Overrides the config's mode (shared, unshared).
        #[arg(short, long)]
        mode: Option<String>,

        /// Also write the build report (JSON) here.
        #[arg(short, long)]
        report: Option<String>,
    },

    /// Validate a mesh (.json) or build config (.toml).
    Validate {
        /// Path to mesh or config file.
        path: String,
    },

    /// Print counts and the mass histogram of a mesh.
    Inspect {
        /// Path to mesh file (JSON).
        path: String,
    },

    /// Build a generated mesh (fan, grid, sphere).
    Demo {
        /// Which shape to generate.
        #[arg(default_value = "fan")]
        shape: String,

        /// Output mesh path.
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let result = match cli.command {
        Commands::Build {
            input,
            output,
            config,
            mode,
            report,
        } => commands::build(
            &input,
            output.as_deref(),
            config.as_deref(),
            mode.as_deref(),
            report.as_deref(),
            cli.verbose,
        ),
        Commands::Validate { path } => commands::validate(&path),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Demo { shape, output } => commands::demo(&shape, output.as_deref(), cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
