//! JSON scene files.
//!
//! A scene file mirrors [`Scene`] directly:
//!
//! ```json
//! {
//!   "spheres": [
//!     { "center": [-3.0, 0.0, -16.0], "radius": 2.0,
//!       "material": { "diffuse_color": [0.4, 0.4, 0.3] } }
//!   ],
//!   "lights": [ { "position": [-20.0, 20.0, 20.0], "intensity": 1.5 } ]
//! }
//! ```
//!
//! Either list may be omitted. Scenes are validated after parsing.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::scene::{Scene, SceneError};

/// Errors that can occur while reading or writing scene files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid scene: {0}")]
    Invalid(#[from] SceneError),
}

/// Result type for scene file operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Load and validate a scene from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> LoadResult<Scene> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let scene: Scene = serde_json::from_reader(reader)?;
    scene.validate()?;

    log::info!(
        "Loaded scene {}: {} spheres, {} lights",
        path.display(),
        scene.sphere_count(),
        scene.light_count()
    );
    Ok(scene)
}

/// Parse and validate a scene from a JSON string.
pub fn load_scene_from_str(json: &str) -> LoadResult<Scene> {
    let scene: Scene = serde_json::from_str(json)?;
    scene.validate()?;
    Ok(scene)
}

/// Serialize a scene to pretty-printed JSON.
pub fn scene_to_string(scene: &Scene) -> LoadResult<String> {
    Ok(serde_json::to_string_pretty(scene)?)
}

/// Write a scene to a JSON file.
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> LoadResult<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, scene)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    log::info!("Saved scene to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Color, Light, Material, Sphere};
    use lumen_math::Vec3;

    const SAMPLE: &str = r#"{
        "spheres": [
            { "center": [-3.0, 0.0, -16.0], "radius": 2.0,
              "material": { "diffuse_color": [0.4, 0.4, 0.3] } },
            { "center": [1.0, 1.0, -12.0], "radius": 1.5,
              "material": { "diffuse_color": [0.3, 0.1, 0.1] } }
        ],
        "lights": [ { "position": [-20.0, 20.0, 20.0], "intensity": 1.5 } ]
    }"#;

    #[test]
    fn test_load_from_str() {
        let scene = load_scene_from_str(SAMPLE).expect("sample scene should parse");

        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.spheres[0].center, Vec3::new(-3.0, 0.0, -16.0));
        assert_eq!(
            scene.spheres[1].material.diffuse_color,
            Color::new(0.3, 0.1, 0.1)
        );
        assert_eq!(scene.lights[0].intensity, 1.5);
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let scene = load_scene_from_str("{}").expect("empty object is an empty scene");
        assert_eq!(scene, Scene::new());

        let lights_only =
            load_scene_from_str(r#"{ "lights": [ { "position": [0, 1, 0], "intensity": 1 } ] }"#)
                .expect("lights-only scene should parse");
        assert_eq!(lights_only.sphere_count(), 0);
        assert_eq!(lights_only.light_count(), 1);
    }

    #[test]
    fn test_invalid_scene_is_rejected() {
        let json = r#"{ "spheres": [ { "center": [0, 0, -5], "radius": -1.0,
            "material": { "diffuse_color": [1, 1, 1] } } ] }"#;

        match load_scene_from_str(json) {
            Err(LoadError::Invalid(SceneError::InvalidRadius { index: 0, .. })) => {}
            other => panic!("expected invalid radius, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        assert!(matches!(
            load_scene_from_str("{ \"spheres\": [ { \"center\": [0, 0] } ] }"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn test_string_preserves_scene() {
        let scene = Scene::new()
            .with_sphere(Sphere::new(
                Vec3::new(0.5, -2.0, -14.0),
                2.0,
                Material::new(Color::new(0.12, 0.34, 0.56)),
            ))
            .with_light(Light::new(Vec3::new(-20.0, 20.0, 20.0), 1.5));

        let json = scene_to_string(&scene).expect("scene should serialize");
        let reloaded = load_scene_from_str(&json).expect("serialized scene should parse");
        assert_eq!(reloaded, scene);
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("lumen_scene_that_does_not_exist.json");
        assert!(matches!(load_scene(&path), Err(LoadError::Io(_))));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("lumen_scene_{}.json", std::process::id()));
        let scene = load_scene_from_str(SAMPLE).expect("sample scene should parse");

        save_scene(&scene, &path).expect("scene should save");
        let loaded = load_scene(&path).expect("saved scene should load");
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, scene);
    }
}
