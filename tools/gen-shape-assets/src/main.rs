//! gen-shape-assets - procedural solid GLB generator
//!
//! Writes cube, icosahedron-sphere and pyramid meshes as single-mesh,
//! single-material GLB files.
//!
//! Usage:
//!   cargo run -p gen-shape-assets -- build
//!   cargo run -p gen-shape-assets -- build --manifest shapes.toml --output out/
//!   cargo run -p gen-shape-assets -- inspect assets/shapes/cube.glb

mod generate;
mod inspect;
mod manifest;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gen-shape-assets")]
#[command(about = "Generate procedural shape GLB assets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shapes (the built-in set unless a manifest is given)
    Build {
        /// Path to a shapes.toml manifest
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Output directory (overrides manifest)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Validate a manifest without generating anything
    Check {
        /// Path to shapes.toml manifest
        #[arg(default_value = "shapes.toml")]
        manifest: PathBuf,
    },

    /// Print the header, chunks and contents of a GLB file
    Inspect {
        /// GLB file to read
        input: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Commands::Build { verbose: true, .. });
    init_logging(verbose);

    match cli.command {
        Commands::Build {
            manifest,
            output,
            verbose: _,
        } => {
            let manifest = match &manifest {
                Some(path) => {
                    tracing::info!("Building shapes from {:?}", path);
                    manifest::load_manifest(path)?
                }
                None => manifest::Manifest::builtin(),
            };

            let reports = generate::build_all(&manifest, output.as_deref())?;
            for report in &reports {
                tracing::info!(
                    "Generated: {} ({} bytes, {} verts, {} tris)",
                    report.path.display(),
                    report.bytes,
                    report.vertices,
                    report.triangles
                );
            }
            tracing::info!("Generated {} GLB files", reports.len());
        }

        Commands::Check { manifest } => {
            tracing::info!("Checking manifest {:?}", manifest);
            let manifest = manifest::load_manifest(&manifest)?;
            manifest.validate()?;
            tracing::info!("Manifest is valid! ({} shapes)", manifest.shapes.len());
        }

        Commands::Inspect { input } => {
            print!("{}", inspect::inspect(&input)?);
        }
    }

    Ok(())
}
