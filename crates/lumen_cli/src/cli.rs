use std::path::PathBuf;

use anyhow::{ensure, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_math::Vec3;

/// Log levels selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Render a field of diffuse spheres to an image")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value_t = 2048, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 1560, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Vertical field of view in degrees
    #[arg(long, default_value_t = 90.0, allow_negative_numbers = true)]
    pub fov: f32,

    /// Camera position as x,y,z
    #[arg(
        long,
        value_delimiter = ',',
        default_values_t = [0.0, 0.0, 0.0],
        allow_hyphen_values = true
    )]
    pub camera: Vec<f32>,

    /// Number of random spheres to generate
    #[arg(long, default_value_t = 20)]
    pub spheres: usize,

    /// Seed for scene generation (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Load the scene from a JSON file instead of generating one
    #[arg(long, conflicts_with_all = ["spheres", "seed"])]
    pub scene: Option<PathBuf>,

    /// Write the scene that was rendered to a JSON file
    #[arg(long)]
    pub save_scene: Option<PathBuf>,

    /// Output file path (.ppm or .png)
    #[arg(short, long, default_value = "out.ppm")]
    pub output: PathBuf,

    /// Set the logging level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl Args {
    /// Check constraints clap cannot express.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.fov > 0.0 && self.fov < 180.0,
            "--fov must be between 0 and 180 degrees, got {}",
            self.fov
        );
        ensure!(
            self.camera.len() == 3 && self.camera.iter().all(|c| c.is_finite()),
            "--camera must be three finite numbers, got {:?}",
            self.camera
        );
        Ok(())
    }

    /// Only meaningful once `validate` has passed.
    pub fn camera_position(&self) -> Vec3 {
        Vec3::from_slice(&self.camera)
    }
}
