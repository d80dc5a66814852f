//! gen-thick-object - rigged polygon extrusion generator
//!
//! Extrudes a regular polygon into a rounded solid, rigs it with the
//! three-arm flex skeleton and writes the result as a GLB file.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

use thick_rig::{build_thick_object, regular_polygon, GeneratorConfig};

#[derive(Parser)]
#[command(name = "gen-thick-object")]
#[command(about = "Generate a rigged, animated extrusion of a regular polygon")]
#[command(version)]
struct Cli {
    /// TOML config file (fields default when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of polygon corners
    #[arg(short, long)]
    sides: Option<usize>,

    /// Polygon circumradius
    #[arg(short, long)]
    radius: Option<f32>,

    /// Extrusion thickness
    #[arg(short, long)]
    thickness: Option<f32>,

    /// Angle of the first corner, in radians
    #[arg(long)]
    start_angle: Option<f32>,

    /// Output GLB file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl Cli {
    /// Config file (or defaults) with command-line overrides applied
    fn resolve(self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(sides) = self.sides {
            config.sides = sides;
        }
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(thickness) = self.thickness {
            config.thickness = thickness;
        }
        if let Some(start_angle) = self.start_angle {
            config.start_angle = start_angle;
        }
        if let Some(output) = self.output {
            config.output = output;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Cli::parse().resolve()?;

    let polygon = regular_polygon(config.sides, config.radius, config.start_angle);
    let object = build_thick_object(&polygon, config.thickness)
        .context("Failed to build rigged object")?;
    let glb = object.to_glb()?;

    if let Some(parent) = config.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("Failed to create output directory")?;
    }
    fs::write(&config.output, &glb)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    tracing::info!(
        "Generated {} ({} bytes): {} vertices, {} triangles, {} joints, {} channels over {}s",
        config.output.display(),
        glb.len(),
        object.mesh.vertex_count(),
        object.mesh.triangle_count(),
        object.skeleton.len(),
        object.clip.tracks.len(),
        object.clip.duration()
    );

    Ok(())
}
