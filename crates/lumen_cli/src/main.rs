use anyhow::{Context, Result};
use clap::Parser;
use lumen_core::{generate_scene, load_scene, save_scene, Scene, SceneGenerator};
use lumen_math::Tuple;
use lumen_renderer::{render, save_image, Camera, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();
    args.validate()?;

    let scene = build_scene(&args)?;
    scene.log_contents();

    if let Some(path) = &args.save_scene {
        save_scene(&scene, path)
            .with_context(|| format!("Failed to save scene to {}", path.display()))?;
    }

    let camera = Camera::new()
        .with_resolution(args.width, args.height)
        .with_fov_degrees(args.fov)
        .with_position(args.camera_position());
    log::debug!(
        "Camera at {} looking down -Z, fov {} degrees",
        Tuple(camera.position()),
        args.fov
    );

    let image = render(&camera, &scene, &RenderConfig::default());

    save_image(&image, &args.output)
        .with_context(|| format!("Failed to write image to {}", args.output.display()))?;

    log::info!("what do you think about my tiny renderer!");
    Ok(())
}

/// Load the scene file if one was given, otherwise generate a random one.
fn build_scene(args: &Args) -> Result<Scene> {
    if let Some(path) = &args.scene {
        return load_scene(path)
            .with_context(|| format!("Failed to load scene from {}", path.display()));
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("Generating {} spheres with seed {}", args.spheres, seed);

    let params = SceneGenerator::default().with_sphere_count(args.spheres);
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(generate_scene(&params, &mut rng))
}
