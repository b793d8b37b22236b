//! shadetool - render a shaded parametric surface to a PNG
//!
//! The hosting shell around the `shading` core: parameter entry on the
//! command line (or a RON scene file), one shading call, one image write.

mod render;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use shading::{shade, Camera, Light, ShadingModel, ShadingParams, Surface, SurfaceParams};
use std::path::PathBuf;
use tracing::info;

use render::{render_image, ViewAngles};

/// Facet sorting is O(n² log n) in resolution; keep previews bounded.
const MAX_RESOLUTION: usize = 512;

#[derive(Parser)]
#[command(name = "shadetool")]
#[command(about = "Offline renderer for locally shaded parametric surfaces", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shade a surface and write the result as a PNG
    Render {
        /// Surface kind: sphere, cylinder or plane
        #[arg(long, default_value = "sphere")]
        shape: String,

        /// Shading model: diffuse, specular or combined
        #[arg(long, default_value = "combined")]
        model: String,

        /// Sphere/cylinder radius, or plane half-extent
        #[arg(long, default_value_t = 1.0)]
        radius: f32,

        /// Cylinder height
        #[arg(long, default_value_t = 2.0)]
        height: f32,

        /// Samples per parameter axis
        #[arg(long, default_value_t = 50)]
        resolution: usize,

        /// Light position as x,y,z
        #[arg(long, value_delimiter = ',', num_args = 3, default_values_t = [2.0, 2.0, 2.0])]
        light: Vec<f32>,

        /// Light intensity in [0, 1]
        #[arg(long, default_value_t = 1.0)]
        intensity: f32,

        /// Light color as r,g,b with channels in [0, 1]
        #[arg(long, value_delimiter = ',', num_args = 3, default_values_t = [1.0, 1.0, 1.0])]
        color: Vec<f32>,

        /// Viewer position as x,y,z (specular and combined models)
        #[arg(long, value_delimiter = ',', num_args = 3, default_values_t = [5.0, 5.0, 5.0])]
        camera: Vec<f32>,

        /// Phong shininess exponent
        #[arg(long, default_value_t = shading::DEFAULT_SHININESS)]
        shininess: f32,

        /// View azimuth rotation in degrees (rendering only)
        #[arg(long, default_value_t = 45.0)]
        rotation: f32,

        /// Output image side length in pixels
        #[arg(long, default_value_t = 800)]
        size: u32,

        /// Output PNG path
        #[arg(short, long, default_value = "surface.png")]
        output: PathBuf,

        /// Load surface and shading parameters from a RON scene file,
        /// overriding the individual flags
        #[arg(long)]
        scene: Option<PathBuf>,
    },
}

/// A full parameter set, loadable from a RON file.
#[derive(Debug, Serialize, Deserialize)]
struct Scene {
    surface: SurfaceParams,
    shading: ShadingParams,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            shape,
            model,
            radius,
            height,
            resolution,
            light,
            intensity,
            color,
            camera,
            shininess,
            rotation,
            size,
            output,
            scene,
        } => {
            let scene = match scene {
                Some(path) => load_scene(&path)?,
                None => Scene {
                    surface: SurfaceParams {
                        kind: shape.parse()?,
                        radius,
                        height,
                        resolution,
                    },
                    shading: ShadingParams {
                        model: model.parse::<ShadingModel>()?,
                        light: Light {
                            position: vec3_arg("light", &light)?,
                            intensity,
                            color: vec3_arg("color", &color)?,
                        },
                        camera: Camera {
                            position: vec3_arg("camera", &camera)?,
                        },
                        shininess,
                    },
                },
            };
            run_render(&scene, rotation, size, &output)
        }
    }
}

fn run_render(scene: &Scene, rotation: f32, size: u32, output: &PathBuf) -> Result<()> {
    if scene.surface.resolution > MAX_RESOLUTION {
        bail!(
            "resolution {} exceeds the preview limit of {MAX_RESOLUTION}",
            scene.surface.resolution
        );
    }

    let surface = Surface::generate(&scene.surface)?;
    let (rows, cols) = surface.shape();
    info!("generated {} surface: {rows}x{cols} points", scene.surface.kind);

    let colors = shade(&surface, &scene.shading)?;
    info!("shaded with {} model", scene.shading.model);

    let view = ViewAngles {
        azimuth: rotation,
        ..Default::default()
    };
    let img = render_image(&surface, &colors, view, size);
    img.save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("wrote {}", output.display());
    Ok(())
}

fn load_scene(path: &PathBuf) -> Result<Scene> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scene file {}", path.display()))?;
    ron::from_str(&text).with_context(|| format!("failed to parse scene file {}", path.display()))
}

fn vec3_arg(name: &str, values: &[f32]) -> Result<Vec3> {
    match values {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        other => bail!("--{name} expects exactly 3 components, got {}", other.len()),
    }
}
