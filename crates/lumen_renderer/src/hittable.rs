//! Hittable trait, HitRecord, and nearest-hit resolution.

use lumen_core::Material;
use lumen_math::{Ray, Vec3};

/// Hits at or beyond this distance are treated as misses.
pub const MAX_VISIBLE_DISTANCE: f32 = 1000.0;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Outward unit surface normal at the intersection
    pub normal: Vec3,
    /// Material of the object that was hit
    pub material: Material,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Distance along `ray` to the nearest non-negative intersection.
    ///
    /// `ray.direction` must be unit length.
    fn intersect(&self, ray: &Ray) -> Option<f32>;

    /// Outward unit normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Vec3;

    /// Surface material.
    fn material(&self) -> Material;
}

/// Find the nearest visible hit among `objects`.
///
/// Objects are tested in order and only a strictly closer hit replaces the
/// current one, so the earliest object wins ties.
pub fn resolve<H: Hittable>(ray: &Ray, objects: &[H]) -> Option<HitRecord> {
    let mut closest: Option<HitRecord> = None;

    for object in objects {
        let Some(t) = object.intersect(ray) else {
            continue;
        };
        if closest.map_or(true, |best| t < best.t) {
            let point = ray.at(t);
            closest = Some(HitRecord {
                t,
                point,
                normal: object.normal_at(point),
                material: object.material(),
            });
        }
    }

    closest.filter(|hit| hit.t < MAX_VISIBLE_DISTANCE)
}
