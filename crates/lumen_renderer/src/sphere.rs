//! Ray-sphere intersection.

use crate::hittable::Hittable;
use lumen_core::{Material, Sphere};
use lumen_math::{unit, Ray, Vec3};

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // Geometric form: project the center onto the ray, then step back
        // along it by the half-chord length.
        let l = self.center - ray.origin();
        let tca = l.dot(ray.direction());
        let d2 = l.dot(l) - tca * tca;
        let r2 = self.radius * self.radius;
        if d2 > r2 {
            return None;
        }

        let thc = (r2 - d2).sqrt();
        let mut t0 = tca - thc;
        let t1 = tca + thc;

        // Near root behind the origin: the origin is inside, use the far root
        if t0 < 0.0 {
            t0 = t1;
        }
        if t0 < 0.0 {
            return None;
        }

        Some(t0)
    }

    fn normal_at(&self, point: Vec3) -> Vec3 {
        unit(point - self.center)
    }

    fn material(&self) -> Material {
        self.material
    }
}
