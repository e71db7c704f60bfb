//! Affine transforms backed by a matrix and its cached inverse.

use std::ops::Mul;

use crate::bounds::Aabb3f;
use crate::matrix::Matrix4x4;
use crate::ray::Ray;
use crate::vec3::{Normal3f, Point3f, Vec3f};
use crate::vec4::Vec4;

/// Something that can be moved between coordinate frames.
pub trait Transformable {
    fn transform(&self, transform: &Transform) -> Self;
}

/// A matrix together with its inverse, which is computed once up front so that
/// `inverse` is free.
///
/// Two transforms are equal iff both of their matrices are.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Transform {
    matrix: Matrix4x4,
    inverse: Matrix4x4,
}

impl Transform {
    /// Panics if `matrix` is singular.
    pub fn new(matrix: Matrix4x4) -> Self {
        Self {
            matrix,
            inverse: matrix.inverse(),
        }
    }

    /// Trusts the caller that `inverse` really is the inverse of `matrix`.
    pub fn with_inverse(matrix: Matrix4x4, inverse: Matrix4x4) -> Self {
        Self { matrix, inverse }
    }

    pub fn identity() -> Self {
        Self::default()
    }

    #[inline]
    pub fn matrix(&self) -> &Matrix4x4 {
        &self.matrix
    }

    #[inline]
    pub fn inverse_matrix(&self) -> &Matrix4x4 {
        &self.inverse
    }

    #[inline]
    pub fn inverse(&self) -> Transform {
        Transform::with_inverse(self.inverse, self.matrix)
    }

    pub fn transpose(&self) -> Transform {
        Transform::with_inverse(self.matrix.transpose(), self.inverse.transpose())
    }

    /// Whether the linear part flips orientation, i.e. has a negative determinant.
    pub fn swaps_handedness(&self) -> bool {
        self.matrix.determinant3x3() < 0.0
    }

    #[inline]
    pub fn apply<T: Transformable>(&self, value: &T) -> T {
        value.transform(self)
    }

    pub fn translate(delta: Vec3f) -> Self {
        let matrix = Matrix4x4::new([
            [1.0, 0.0, 0.0, delta.x],
            [0.0, 1.0, 0.0, delta.y],
            [0.0, 0.0, 1.0, delta.z],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        let inverse = Matrix4x4::new([
            [1.0, 0.0, 0.0, -delta.x],
            [0.0, 1.0, 0.0, -delta.y],
            [0.0, 0.0, 1.0, -delta.z],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Transform::with_inverse(matrix, inverse)
    }

    pub fn scale(x: f64, y: f64, z: f64) -> Self {
        assert!(x != 0.0 && y != 0.0 && z != 0.0, "degenerate scale ({}, {}, {})", x, y, z);

        let matrix = Matrix4x4::new([[x, 0.0, 0.0, 0.0], [0.0, y, 0.0, 0.0], [0.0, 0.0, z, 0.0], [0.0, 0.0, 0.0, 1.0]]);
        let inverse = Matrix4x4::new([
            [1.0 / x, 0.0, 0.0, 0.0],
            [0.0, 1.0 / y, 0.0, 0.0],
            [0.0, 0.0, 1.0 / z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Transform::with_inverse(matrix, inverse)
    }

    /// Rotation by `theta` radians about the x axis.
    pub fn rotate_x(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::rotation(Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, cos, -sin, 0.0],
            [0.0, sin, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    pub fn rotate_y(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::rotation(Matrix4x4::new([
            [cos, 0.0, sin, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-sin, 0.0, cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    pub fn rotate_z(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::rotation(Matrix4x4::new([
            [cos, -sin, 0.0, 0.0],
            [sin, cos, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    /// Rotation by `theta` radians about an arbitrary `axis` through the origin
    /// (Rodrigues' formula). The axis does not need to be normalized.
    pub fn rotate(theta: f64, axis: Vec3f) -> Self {
        let a = axis.normalize();
        let (sin, cos) = theta.sin_cos();
        let k = 1.0 - cos;

        Self::rotation(Matrix4x4::new([
            [a.x * a.x + (1.0 - a.x * a.x) * cos, a.x * a.y * k - a.z * sin, a.x * a.z * k + a.y * sin, 0.0],
            [a.x * a.y * k + a.z * sin, a.y * a.y + (1.0 - a.y * a.y) * cos, a.y * a.z * k - a.x * sin, 0.0],
            [a.x * a.z * k - a.y * sin, a.y * a.z * k + a.x * sin, a.z * a.z + (1.0 - a.z * a.z) * cos, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]))
    }

    // Rotations are orthogonal, the transpose is the inverse.
    fn rotation(matrix: Matrix4x4) -> Self {
        Transform::with_inverse(matrix, matrix.transpose())
    }

    /// The world-to-camera transform of a camera at `position` looking at
    /// `target`, with `up` roughly pointing up.
    pub fn look_at(position: Point3f, target: Point3f, up: Vec3f) -> Self {
        let direction = (target - position).normalize();
        let left = up.normalize().cross(&direction).normalize();
        let new_up = direction.cross(&left);

        let camera_to_world = Matrix4x4::new([
            [left.x, new_up.x, direction.x, position.x],
            [left.y, new_up.y, direction.y, position.y],
            [left.z, new_up.z, direction.z, position.z],
            [0.0, 0.0, 0.0, 1.0],
        ]);

        Transform::with_inverse(camera_to_world.inverse(), camera_to_world)
    }

    /// Projects camera space onto the canonical view volume: x and y are divided
    /// by z and scaled so that a field of view of `fov` degrees maps to
    /// `[-1, 1]`, z in `[near, far]` maps to `[0, 1]`.
    pub fn perspective(fov: f64, near: f64, far: f64) -> Self {
        assert!(far > near, "far plane {} must lie beyond near plane {}", far, near);

        let projection = Matrix4x4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, far / (far - near), -far * near / (far - near)],
            [0.0, 0.0, 1.0, 0.0],
        ]);
        let inv_tan = 1.0 / (fov.to_radians() / 2.0).tan();

        Transform::scale(inv_tan, inv_tan, 1.0) * Transform::new(projection)
    }
}

impl Mul<Transform> for Transform {
    type Output = Transform;

    /// `a * b` applies `b` first. The inverse is `b⁻¹ * a⁻¹`.
    fn mul(self, other: Transform) -> Self::Output {
        Transform::with_inverse(self.matrix * other.matrix, other.inverse * self.inverse)
    }
}

impl Transformable for Point3f {
    fn transform(&self, t: &Transform) -> Self {
        let v = &t.matrix * Vec4::from(*self);
        let w = *v.w();
        assert!(w != 0.0, "point {:?} maps to infinity", self);

        if w == 1.0 {
            Point3f::new(*v.x(), *v.y(), *v.z())
        } else {
            Point3f::new(*v.x() / w, *v.y() / w, *v.z() / w)
        }
    }
}

impl Transformable for Vec3f {
    fn transform(&self, t: &Transform) -> Self {
        let v = &t.matrix * Vec4::from(*self);
        Vec3f::new(*v.x(), *v.y(), *v.z())
    }
}

/// Normals go through the transpose of the inverse, which keeps them
/// perpendicular to transformed surfaces under non-uniform scale and shear.
impl Transformable for Normal3f {
    fn transform(&self, t: &Transform) -> Self {
        let inv = &t.inverse;
        let n = self;

        Normal3f::new(
            inv.get(0, 0) * n.x + inv.get(1, 0) * n.y + inv.get(2, 0) * n.z,
            inv.get(0, 1) * n.x + inv.get(1, 1) * n.y + inv.get(2, 1) * n.z,
            inv.get(0, 2) * n.x + inv.get(1, 2) * n.y + inv.get(2, 2) * n.z,
        )
    }
}

impl Transformable for Ray {
    fn transform(&self, t: &Transform) -> Self {
        Ray::with_range(t.apply(&self.origin), t.apply(&self.direction), self.max_t())
    }
}

/// Transforms all 8 corners. Exact for translation and scale, conservative
/// under rotation.
impl Transformable for Aabb3f {
    fn transform(&self, t: &Transform) -> Self {
        if self.is_empty() {
            return *self;
        }

        (1..8).fold(Aabb3f::from_point(t.apply(&self.corner(0))), |bounds, i| {
            bounds.union_point(&t.apply(&self.corner(i)))
        })
    }
}
