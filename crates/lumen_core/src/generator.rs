//! Random scene generation.
//!
//! Scatters spheres over a box in front of the camera. The random source is
//! always passed in, so seeding it makes the scene reproducible.

use lumen_math::Vec3;
use rand::Rng;

use crate::scene::{Color, Light, Material, Scene, Sphere};

/// Parameters for a random sphere field.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneGenerator {
    /// Number of spheres to place
    pub sphere_count: usize,
    /// Radius shared by every sphere
    pub radius: f32,
    /// Half-open integer ranges for sphere centers
    pub x_range: (i32, i32),
    pub y_range: (i32, i32),
    pub z_range: (i32, i32),
    /// Lights added after the spheres
    pub lights: Vec<Light>,
}

impl Default for SceneGenerator {
    fn default() -> Self {
        Self {
            sphere_count: 20,
            radius: 2.0,
            x_range: (-10, 10),
            y_range: (-10, 10),
            z_range: (-20, -10),
            lights: vec![Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5)],
        }
    }
}

impl SceneGenerator {
    /// Set the number of spheres.
    pub fn with_sphere_count(mut self, count: usize) -> Self {
        self.sphere_count = count;
        self
    }

    /// Replace the lights.
    pub fn with_lights(mut self, lights: Vec<Light>) -> Self {
        self.lights = lights;
        self
    }
}

/// Build a random scene from `params`, drawing everything from `rng`.
///
/// Centers sit on integer coordinates. Each color channel is uniform in
/// [0, 1) truncated to two decimal places.
pub fn generate_scene<R: Rng + ?Sized>(params: &SceneGenerator, rng: &mut R) -> Scene {
    let mut scene = Scene::new();

    for _ in 0..params.sphere_count {
        let center = Vec3::new(
            rng.gen_range(params.x_range.0..params.x_range.1) as f32,
            rng.gen_range(params.y_range.0..params.y_range.1) as f32,
            rng.gen_range(params.z_range.0..params.z_range.1) as f32,
        );
        let color = Color::new(
            two_decimals(rng.gen::<f32>()),
            two_decimals(rng.gen::<f32>()),
            two_decimals(rng.gen::<f32>()),
        );
        scene.add_sphere(Sphere::new(center, params.radius, Material::new(color)));
    }

    for light in &params.lights {
        scene.add_light(*light);
    }

    log::debug!(
        "Generated {} spheres and {} lights",
        scene.sphere_count(),
        scene.light_count()
    );
    scene
}

#[inline]
fn two_decimals(x: f32) -> f32 {
    (x * 100.0).trunc() / 100.0
}
