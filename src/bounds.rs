//! Axis-aligned bounding boxes.
//!
//! A box whose `min` exceeds its `max` along any axis is *empty*. Empty boxes
//! are a regular value rather than an error: they are the identity of `union`
//! and absorb `intersect`.

use num_traits::Bounded;

use crate::scalar::{self, Scalar};
use crate::vec3::{Point3, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb3<T> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

pub type Aabb3i = Aabb3<i32>;
pub type Aabb3f = Aabb3<f64>;

impl<T: Scalar> Aabb3<T> {
    /// The box spanned by two arbitrary corners.
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Self {
        Self {
            min: Point3::new(scalar::min(p1.x, p2.x), scalar::min(p1.y, p2.y), scalar::min(p1.z, p2.z)),
            max: Point3::new(scalar::max(p1.x, p2.x), scalar::max(p1.y, p2.y), scalar::max(p1.z, p2.z)),
        }
    }

    #[inline]
    pub fn from_point(p: Point3<T>) -> Self {
        Self { min: p, max: p }
    }

    /// Selects one of the 8 corners: bit 2 of `i` picks x, bit 1 picks y and
    /// bit 0 picks z, with a clear bit meaning the `min` side.
    pub fn corner(&self, i: usize) -> Point3<T> {
        assert!(i < 8, "corner index out of range: {}", i);

        let pick = |bit: usize, axis: usize| {
            if i & bit == 0 {
                self.min[axis]
            } else {
                self.max[axis]
            }
        };

        Point3::new(pick(4, 0), pick(2, 1), pick(1, 2))
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Grows the box by `delta` in every direction.
    pub fn expand(&mut self, delta: T) {
        let d = Vec3::new(delta, delta, delta);
        self.min -= d;
        self.max += d;
    }

    /// The vector from `min` to `max`, zero for an empty box.
    pub fn diagonal(&self) -> Vec3<T> {
        if self.is_empty() {
            return Vec3::new(T::zero(), T::zero(), T::zero());
        }

        self.max - self.min
    }

    pub fn surface_area(&self) -> T {
        let d = self.diagonal();
        let two = T::one() + T::one();
        two * (d.x * d.y + d.x * d.z + d.y * d.z)
    }

    pub fn volume(&self) -> T {
        let d = self.diagonal();
        d.x * d.y * d.z
    }

    /// The smallest box enclosing both. An empty operand is ignored.
    pub fn union(&self, other: &Aabb3<T>) -> Aabb3<T> {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }

        Aabb3 {
            min: Point3::new(
                scalar::min(self.min.x, other.min.x),
                scalar::min(self.min.y, other.min.y),
                scalar::min(self.min.z, other.min.z),
            ),
            max: Point3::new(
                scalar::max(self.max.x, other.max.x),
                scalar::max(self.max.y, other.max.y),
                scalar::max(self.max.z, other.max.z),
            ),
        }
    }

    pub fn union_point(&self, p: &Point3<T>) -> Aabb3<T> {
        self.union(&Aabb3::from_point(*p))
    }

    /// The overlap of both boxes, which is empty when they are disjoint or
    /// when either operand is empty.
    pub fn intersect(&self, other: &Aabb3<T>) -> Aabb3<T> {
        if self.is_empty() {
            return *self;
        }
        if other.is_empty() {
            return *other;
        }

        // No min/max normalization here: a disjoint pair must stay empty.
        Aabb3 {
            min: Point3::new(
                scalar::max(self.min.x, other.min.x),
                scalar::max(self.min.y, other.min.y),
                scalar::max(self.min.z, other.min.z),
            ),
            max: Point3::new(
                scalar::min(self.max.x, other.max.x),
                scalar::min(self.max.y, other.max.y),
                scalar::min(self.max.z, other.max.z),
            ),
        }
    }

    pub fn overlaps(&self, other: &Aabb3<T>) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        (0..3).all(|axis| self.max[axis] >= other.min[axis] && self.min[axis] <= other.max[axis])
    }

    pub fn contains(&self, p: &Point3<T>) -> bool {
        if self.is_empty() {
            return false;
        }

        (0..3).all(|axis| p[axis] >= self.min[axis] && p[axis] <= self.max[axis])
    }
}

impl<T: Scalar + Bounded> Aabb3<T> {
    /// An empty box, the starting value for accumulating unions.
    pub fn empty() -> Self {
        Self {
            min: Point3::new(T::max_value(), T::max_value(), T::max_value()),
            max: Point3::new(T::min_value(), T::min_value(), T::min_value()),
        }
    }
}
