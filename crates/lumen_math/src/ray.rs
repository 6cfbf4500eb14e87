use crate::Vec3;

/// A ray in 3D space with an origin and a direction.
///
/// Intersection routines assume `direction` is unit length. Nothing here
/// re-normalizes it; build rays with [`Ray::towards`] or normalize the
/// direction yourself before calling [`Ray::new`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Create a ray from `origin` pointing at `target`.
    ///
    /// `target` must differ from `origin`.
    pub fn towards(origin: Vec3, target: Vec3) -> Self {
        Self::new(origin, crate::unit(target - origin))
    }

    /// Get the origin point of the ray.
    ///
    /// Note: Since `origin` is public, you can also access it directly via `ray.origin`.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    ///
    /// Note: Since `direction` is public, you can also access it directly via `ray.direction`.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}
