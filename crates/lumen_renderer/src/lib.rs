//! Lumen Renderer - CPU sphere ray caster.
//!
//! Casts one primary ray per pixel, finds the nearest sphere, and shades it
//! with a diffuse-only model summed over point lights. No shadows, no
//! bounces, no sampling.

mod camera;
mod hittable;
mod output;
mod renderer;
mod shading;
mod sphere;

pub use camera::Camera;
pub use hittable::{resolve, HitRecord, Hittable, MAX_VISIBLE_DISTANCE};
pub use output::{save_image, save_png, save_ppm, write_ppm, OutputError, OutputResult};
pub use renderer::{color_to_rgb, render, render_pixel, Framebuffer, RenderConfig};
pub use shading::{ray_color, shade, BACKGROUND};

/// Re-export scene and math types used in the public API
pub use lumen_core::{Color, Light, Material, Scene, Sphere};
pub use lumen_math::{Ray, Vec2, Vec3};
