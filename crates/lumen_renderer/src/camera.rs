//! Pinhole camera for primary ray generation.

use lumen_math::{unit, Ray, Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;

/// Camera looking down -Z with +Y up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    // Image settings
    pub image_width: u32,
    pub image_height: u32,

    // Lens and placement
    fov: f32, // Vertical field of view in radians
    position: Vec3,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            image_width: 2048,
            image_height: 1560,
            fov: FRAC_PI_2,
            position: Vec3::ZERO,
        }
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.image_width = width;
        self.image_height = height;
        self
    }

    /// Set the vertical field of view in radians.
    pub fn with_fov(mut self, fov: f32) -> Self {
        self.fov = fov;
        self
    }

    /// Set the vertical field of view in degrees.
    pub fn with_fov_degrees(self, degrees: f32) -> Self {
        self.with_fov(degrees.to_radians())
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Vertical field of view in radians.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f32 {
        self.image_width as f32 / self.image_height as f32
    }

    /// Project the center of pixel (i, j) onto the image plane at z = -1.
    ///
    /// Row 0 is the top of the image, so y decreases as j grows.
    pub fn screen_point(&self, i: u32, j: u32) -> Vec2 {
        let width = self.image_width as f32;
        let height = self.image_height as f32;
        let half_height = (self.fov / 2.0).tan();

        let x = (2.0 * (i as f32 + 0.5) / width - 1.0) * half_height * self.aspect_ratio();
        let y = -(2.0 * (j as f32 + 0.5) / height - 1.0) * half_height;
        Vec2::new(x, y)
    }

    /// Generate the primary ray through pixel (i, j).
    pub fn get_ray(&self, i: u32, j: u32) -> Ray {
        let p = self.screen_point(i, j);
        Ray::new(self.position, unit(Vec3::new(p.x, p.y, -1.0)))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
