//! Core render loop.
//!
//! One primary ray per pixel, rows top to bottom, columns left to right.

use std::time::Instant;

use crate::shading::{ray_color, BACKGROUND};
use crate::Camera;
use lumen_core::{Color, Scene};
use lumen_math::Interval;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Background color when ray doesn't hit anything
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            background: BACKGROUND,
        }
    }
}

/// Convert a color to 8-bit RGB.
///
/// Each channel is clamped to [0, 1] and scaled to 0-255, truncating.
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let to_byte = |c: f32| (255.0 * Interval::UNIT.clamp(c)) as u8;
    [to_byte(color.x), to_byte(color.y), to_byte(color.z)]
}

/// Render a single pixel.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.get_ray(x, y);
    let color = ray_color(&ray, scene, config);
    debug_assert!(color.is_finite(), "pixel ({x}, {y}) produced {color}");
    color
}

/// Row-major image of linear colors, row 0 at the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Framebuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl Framebuffer {
    /// Create a new framebuffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert to packed RGB bytes, row-major.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb(*color));
        }
        bytes
    }
}

/// Render the entire scene to a framebuffer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> Framebuffer {
    let start = Instant::now();
    log::info!(
        "Rendering {}x{} with {} spheres, {} lights",
        camera.image_width,
        camera.image_height,
        scene.sphere_count(),
        scene.light_count()
    );

    let mut image = Framebuffer::new(camera.image_width, camera.image_height);

    for y in 0..camera.image_height {
        for x in 0..camera.image_width {
            let color = render_pixel(camera, scene, x, y, config);
            image.set(x, y, color);
        }
    }

    log::info!("Rendered in {:.2?}", start.elapsed());
    image
}
