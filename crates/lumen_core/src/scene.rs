//! Scene types for Lumen.
//!
//! A scene is an ordered list of spheres and an ordered list of point
//! lights. Everything here is plain data: the renderer only ever reads it.

use lumen_math::{Tuple, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Color type alias (RGB values typically 0-1)
pub type Color = Vec3;

/// Errors found when validating a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere {index} has invalid radius {radius} (must be positive and finite)")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("sphere {index} has a non-finite center")]
    InvalidCenter { index: usize },

    #[error("light {index} has invalid intensity {intensity} (must be non-negative and finite)")]
    InvalidIntensity { index: usize, intensity: f32 },

    #[error("light {index} has a non-finite position")]
    InvalidLightPosition { index: usize },
}

/// A diffuse-only surface description.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Diffuse reflectance (RGB, expected in 0-1 but not enforced)
    pub diffuse_color: Color,
}

impl Material {
    /// Create a new material with the given diffuse color.
    pub fn new(diffuse_color: Color) -> Self {
        Self { diffuse_color }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::new(Color::ZERO)
    }
}

/// A sphere with a center, radius and material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
    pub material: Material,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f32, material: Material) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Create a new point light.
    pub fn new(position: Vec3, intensity: f32) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

/// A complete scene: spheres and lights, both in insertion order.
///
/// Sphere order is only significant when two spheres are hit at exactly the
/// same distance; the one added first wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub spheres: Vec<Sphere>,

    #[serde(default)]
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sphere to the scene.
    pub fn add_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    /// Add a light to the scene.
    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    /// Builder-style variant of [`Scene::add_sphere`].
    pub fn with_sphere(mut self, sphere: Sphere) -> Self {
        self.add_sphere(sphere);
        self
    }

    /// Builder-style variant of [`Scene::add_light`].
    pub fn with_light(mut self, light: Light) -> Self {
        self.add_light(light);
        self
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check the scene for values the renderer cannot handle.
    ///
    /// Diffuse colors outside [0, 1] are allowed and only logged.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if !sphere.center.is_finite() {
                return Err(SceneError::InvalidCenter { index });
            }
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            let color = sphere.material.diffuse_color;
            if color.min_element() < 0.0 || color.max_element() > 1.0 {
                log::warn!(
                    "Sphere {} has diffuse color {} outside [0, 1]",
                    index,
                    Tuple(color)
                );
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            if !light.position.is_finite() {
                return Err(SceneError::InvalidLightPosition { index });
            }
            if !(light.intensity.is_finite() && light.intensity >= 0.0) {
                return Err(SceneError::InvalidIntensity {
                    index,
                    intensity: light.intensity,
                });
            }
        }

        Ok(())
    }

    /// Log the scene contents at debug level.
    pub fn log_contents(&self) {
        for (i, sphere) in self.spheres.iter().enumerate() {
            log::debug!(
                "Sphere {}: center {} radius {} color {}",
                i,
                Tuple(sphere.center),
                sphere.radius,
                Tuple(sphere.material.diffuse_color)
            );
        }
        for (i, light) in self.lights.iter().enumerate() {
            log::debug!(
                "Light {}: position {} intensity {}",
                i,
                Tuple(light.position),
                light.intensity
            );
        }
    }
}
