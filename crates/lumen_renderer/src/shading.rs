//! Diffuse-only shading.

use crate::hittable::resolve;
use crate::RenderConfig;
use lumen_core::{Color, Light, Material, Scene};
use lumen_math::{unit, Ray, Vec3};

/// Color returned for rays that hit nothing.
pub const BACKGROUND: Color = Color::new(0.2, 0.3, 0.2);

/// Shade a surface point lit by `lights`.
///
/// Each light adds `intensity * max(0, cos θ)` where θ is the angle between
/// `normal` and the direction to the light. There is no occlusion test and no
/// distance falloff. No light may sit exactly on `point`.
pub fn shade(point: Vec3, normal: Vec3, material: &Material, lights: &[Light]) -> Color {
    let diffuse_intensity: f32 = lights
        .iter()
        .map(|light| {
            let light_dir = unit(light.position - point);
            light.intensity * light_dir.dot(normal).max(0.0)
        })
        .sum();

    material.diffuse_color * diffuse_intensity
}

/// Compute the color seen by a primary ray.
pub fn ray_color(ray: &Ray, scene: &Scene, config: &RenderConfig) -> Color {
    match resolve(ray, &scene.spheres) {
        Some(hit) => shade(hit.point, hit.normal, &hit.material, &scene.lights),
        None => config.background,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_core::Sphere;

    fn red() -> Material {
        Material::new(Color::new(1.0, 0.0, 0.0))
    }

    #[test]
    fn test_no_lights_is_black() {
        for material in [red(), Material::new(Color::ONE), Material::new(Color::splat(0.3))] {
            assert_eq!(shade(Vec3::ZERO, Vec3::Y, &material, &[]), Color::ZERO);
        }
    }

    #[test]
    fn test_light_straight_above() {
        let lights = [Light::new(Vec3::new(0.0, 10.0, 0.0), 1.5)];
        let color = shade(Vec3::ZERO, Vec3::Y, &red(), &lights);
        assert!((color - Color::new(1.5, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_cosine_falloff() {
        // 60 degrees off the normal contributes half
        let angle = 60.0_f32.to_radians();
        let lights = [Light::new(Vec3::new(angle.sin(), angle.cos(), 0.0) * 5.0, 1.0)];
        let color = shade(Vec3::ZERO, Vec3::Y, &red(), &lights);
        assert!((color.x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_light_behind_surface_contributes_nothing() {
        let front = Light::new(Vec3::new(0.0, 10.0, 0.0), 1.0);
        let behind = Light::new(Vec3::new(0.0, -10.0, 0.0), 5.0);

        let only_behind = shade(Vec3::ZERO, Vec3::Y, &red(), &[behind]);
        assert_eq!(only_behind, Color::ZERO);

        let both = shade(Vec3::ZERO, Vec3::Y, &red(), &[front, behind]);
        let front_only = shade(Vec3::ZERO, Vec3::Y, &red(), &[front]);
        assert_eq!(both, front_only);
    }

    #[test]
    fn test_lights_accumulate() {
        let light = Light::new(Vec3::new(0.0, 3.0, 0.0), 0.25);
        let material = Material::new(Color::new(0.5, 1.0, 0.2));

        let color = shade(Vec3::ZERO, Vec3::Y, &material, &[light, light, light, light]);
        assert!((color - material.diffuse_color).length() < 1e-6);
    }

    #[test]
    fn test_no_distance_falloff() {
        let near = [Light::new(Vec3::new(0.0, 1.0, 0.0), 1.0)];
        let far = [Light::new(Vec3::new(0.0, 500.0, 0.0), 1.0)];
        assert_eq!(
            shade(Vec3::ZERO, Vec3::Y, &red(), &near),
            shade(Vec3::ZERO, Vec3::Y, &red(), &far)
        );
    }

    #[test]
    fn test_ray_color_miss_returns_background() {
        let scene = Scene::new().with_light(Light::new(Vec3::Y, 1.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        assert_eq!(ray_color(&ray, &scene, &RenderConfig::default()), BACKGROUND);

        let config = RenderConfig {
            background: Color::ONE,
        };
        assert_eq!(ray_color(&ray, &scene, &config), Color::ONE);
    }

    #[test]
    fn test_ray_color_hit_is_shaded() {
        let scene = Scene::new()
            .with_sphere(Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, red()))
            .with_light(Light::new(Vec3::new(0.0, 0.0, 10.0), 2.0));
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // Light sits straight along the hit normal
        let color = ray_color(&ray, &scene, &RenderConfig::default());
        assert!((color - Color::new(2.0, 0.0, 0.0)).length() < 1e-5);
    }
}
