use approx::assert_abs_diff_eq;

use crate::bounds::Aabb3f;
use crate::matrix::Matrix4x4;
use crate::transform::Transform;
use crate::vec3::{Normal3f, Point3f, Vec3f};

pub const EPSILON: f64 = 1e-6;

pub fn assert_float_eq(expected: f64, actual: f64) {
    assert_abs_diff_eq!(expected, actual, epsilon = EPSILON);
}

pub fn assert_vec3_eq(v: Vec3f, x: f64, y: f64, z: f64) {
    assert_abs_diff_eq!(&[x, y, z][..], &[v.x, v.y, v.z][..], epsilon = EPSILON);
}

pub fn assert_point3_eq(p: Point3f, x: f64, y: f64, z: f64) {
    assert_abs_diff_eq!(&[x, y, z][..], &[p.x, p.y, p.z][..], epsilon = EPSILON);
}

pub fn assert_normal3_eq(n: Normal3f, x: f64, y: f64, z: f64) {
    assert_abs_diff_eq!(&[x, y, z][..], &[n.x, n.y, n.z][..], epsilon = EPSILON);
}

pub fn assert_aabb_eq(b: Aabb3f, min_x: f64, min_y: f64, min_z: f64, max_x: f64, max_y: f64, max_z: f64) {
    assert_point3_eq(b.min, min_x, min_y, min_z);
    assert_point3_eq(b.max, max_x, max_y, max_z);
}

pub fn assert_matrix_eq(m: &Matrix4x4, expected: &[f64; 16]) {
    let actual: Vec<f64> = (0..16).map(|i| m[i]).collect();
    assert_abs_diff_eq!(&expected[..], &actual[..], epsilon = EPSILON);
}

/// Compares both the matrix and the cached inverse.
pub fn assert_transform_eq(expected: &Transform, actual: &Transform) {
    let flat = |m: &Matrix4x4| {
        let mut out = [0.0; 16];
        for (i, v) in out.iter_mut().enumerate() {
            *v = m[i];
        }
        out
    };

    assert_matrix_eq(actual.matrix(), &flat(expected.matrix()));
    assert_matrix_eq(actual.inverse_matrix(), &flat(expected.inverse_matrix()));
}
