//! Simple ray caster example.
//!
//! Renders three spheres under two lights and saves to PPM format.

use lumen_renderer::{
    render, save_ppm, Camera, Color, Light, Material, RenderConfig, Scene, Sphere, Vec3,
};

fn main() {
    println!("Lumen Ray Caster - Simple Example");
    println!("=================================");

    let scene = build_scene();

    let camera = Camera::new()
        .with_resolution(1024, 768)
        .with_fov_degrees(90.0);

    println!("Rendering {}x{}...", camera.image_width, camera.image_height);

    let start = std::time::Instant::now();
    let image = render(&camera, &scene, &RenderConfig::default());
    println!("Rendered in {:?}", start.elapsed());

    let filename = "simple_render.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn build_scene() -> Scene {
    Scene::new()
        .with_sphere(Sphere::new(
            Vec3::new(-3.0, 0.0, -16.0),
            2.0,
            Material::new(Color::new(0.4, 0.4, 0.3)),
        ))
        .with_sphere(Sphere::new(
            Vec3::new(-1.0, -1.5, -12.0),
            2.0,
            Material::new(Color::new(0.3, 0.1, 0.1)),
        ))
        .with_sphere(Sphere::new(
            Vec3::new(7.0, 5.0, -18.0),
            4.0,
            Material::new(Color::new(0.1, 0.3, 0.6)),
        ))
        .with_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5))
        .with_light(Light::new(Vec3::new(30.0, 50.0, -25.0), 0.8))
}
