//! Lumen Core - Scene description for the Lumen sphere renderer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Scene`, `Sphere`, `Light`, `Material`
//! - **Scene generation**: seeded random sphere fields
//! - **Scene files**: JSON loading and saving
//!
//! # Example
//!
//! ```ignore
//! use lumen_core::{generate_scene, SceneGenerator};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let scene = generate_scene(&SceneGenerator::default(), &mut rng);
//! println!("{} spheres, {} lights", scene.sphere_count(), scene.light_count());
//! ```

pub mod generator;
pub mod loader;
pub mod scene;

// Re-export commonly used types
pub use generator::{generate_scene, SceneGenerator};
pub use loader::{load_scene, load_scene_from_str, save_scene, scene_to_string, LoadError, LoadResult};
pub use scene::{Color, Light, Material, Scene, SceneError, Sphere};
