use crate::vec3::{Point3f, Vec3f};

/// A half-line `origin + t * direction` for `t` in `[0, max_t]`.
///
/// Rays are plain values. A query that wants to narrow the valid range builds a
/// new ray with `with_max_t` instead of mutating one that others may hold.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Point3f,
    pub direction: Vec3f,
    max_t: f64,
}

impl Ray {
    /// A ray extending to infinity.
    pub fn new(origin: Point3f, direction: Vec3f) -> Self {
        Self::with_range(origin, direction, f64::INFINITY)
    }

    pub fn with_range(origin: Point3f, direction: Vec3f, max_t: f64) -> Self {
        assert!(max_t >= 0.0, "ray max_t must be non-negative, got {}", max_t);

        Self {
            origin,
            direction,
            max_t,
        }
    }

    #[inline]
    pub fn max_t(&self) -> f64 {
        self.max_t
    }

    #[inline]
    pub fn with_max_t(self, max_t: f64) -> Self {
        Self::with_range(self.origin, self.direction, max_t)
    }

    #[inline]
    pub fn at(&self, t: f64) -> Point3f {
        assert!(t >= 0.0, "ray parameter must be non-negative, got {}", t);
        self.origin + self.direction * t
    }

    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= 0.0 && t <= self.max_t
    }
}
