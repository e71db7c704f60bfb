use std::ops::{Index, Mul, MulAssign};

use crate::vec4::Vec4;

/// Below this absolute determinant a matrix is treated as singular.
pub const SINGULAR_EPSILON: f64 = 1e-6;

///
/// Index notation is: i, j - row, column.
///
/// Equality is exact and element-wise.
#[derive(Copy, Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Matrix4x4([Vec4<f64>; 4]);

impl Matrix4x4 {
    pub fn new(v: [[f64; 4]; 4]) -> Self {
        Matrix4x4([Vec4::from(v[0]), Vec4::from(v[1]), Vec4::from(v[2]), Vec4::from(v[3])])
    }

    /// Builds a matrix from 16 values in row-major order.
    pub fn from_row_slice(v: &[f64; 16]) -> Self {
        Matrix4x4::new([
            [v[0], v[1], v[2], v[3]],
            [v[4], v[5], v[6], v[7]],
            [v[8], v[9], v[10], v[11]],
            [v[12], v[13], v[14], v[15]],
        ])
    }

    pub fn identity() -> Self {
        Matrix4x4::new([[1.0, 0.0, 0.0, 0.0], [0.0, 1.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0], [0.0, 0.0, 0.0, 1.0]])
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < 4 && j < 4, "matrix index out of range: ({}, {})", i, j);
        self.0[i][j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: f64) {
        assert!(i < 4 && j < 4, "matrix index out of range: ({}, {})", i, j);
        self.0[i][j] = value;
    }

    pub fn transpose(&self) -> Self {
        let a = &self.0;

        Matrix4x4::new([
            [a[0][0], a[1][0], a[2][0], a[3][0]],
            [a[0][1], a[1][1], a[2][1], a[3][1]],
            [a[0][2], a[1][2], a[2][2], a[3][2]],
            [a[0][3], a[1][3], a[2][3], a[3][3]],
        ])
    }

    /// Determinant of the upper-left 3x3 block, i.e. of the linear part of an
    /// affine transform.
    pub fn determinant3x3(&self) -> f64 {
        let a = &self.0;

        a[0][0] * (a[1][1] * a[2][2] - a[1][2] * a[2][1]) - a[0][1] * (a[1][0] * a[2][2] - a[1][2] * a[2][0])
            + a[0][2] * (a[1][0] * a[2][1] - a[1][1] * a[2][0])
    }

    pub fn determinant(&self) -> f64 {
        let (s, c) = self.cofactor_pairs();
        Self::determinant_from(&s, &c)
    }

    /// 2x2 sub-determinants of the two top rows (`s`) and two bottom rows (`c`)
    /// shared by the determinant and the adjugate expansion.
    fn cofactor_pairs(&self) -> ([f64; 6], [f64; 6]) {
        let a = &self.0;

        let s = [
            a[0][0] * a[1][1] - a[1][0] * a[0][1],
            a[0][0] * a[1][2] - a[1][0] * a[0][2],
            a[0][0] * a[1][3] - a[1][0] * a[0][3],
            a[0][1] * a[1][2] - a[1][1] * a[0][2],
            a[0][1] * a[1][3] - a[1][1] * a[0][3],
            a[0][2] * a[1][3] - a[1][2] * a[0][3],
        ];

        let c = [
            a[2][0] * a[3][1] - a[3][0] * a[2][1],
            a[2][0] * a[3][2] - a[3][0] * a[2][2],
            a[2][0] * a[3][3] - a[3][0] * a[2][3],
            a[2][1] * a[3][2] - a[3][1] * a[2][2],
            a[2][1] * a[3][3] - a[3][1] * a[2][3],
            a[2][2] * a[3][3] - a[3][2] * a[2][3],
        ];

        (s, c)
    }

    #[inline]
    fn determinant_from(s: &[f64; 6], c: &[f64; 6]) -> f64 {
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }

    /// Closed-form inverse through the adjugate (Cramer's rule).
    ///
    /// Panics when the matrix is singular, see `SINGULAR_EPSILON`.
    pub fn inverse(&self) -> Self {
        let (s, c) = self.cofactor_pairs();
        let det = Self::determinant_from(&s, &c);
        assert!(det.abs() > SINGULAR_EPSILON, "matrix is singular (det = {}): {:?}", det, self);

        let inv_det = 1.0 / det;
        let a = &self.0;

        let mut m = [[0.0; 4]; 4];

        m[0][0] = ( a[1][1] * c[5] - a[1][2] * c[4] + a[1][3] * c[3]) * inv_det;
        m[0][1] = (-a[0][1] * c[5] + a[0][2] * c[4] - a[0][3] * c[3]) * inv_det;
        m[0][2] = ( a[3][1] * s[5] - a[3][2] * s[4] + a[3][3] * s[3]) * inv_det;
        m[0][3] = (-a[2][1] * s[5] + a[2][2] * s[4] - a[2][3] * s[3]) * inv_det;

        m[1][0] = (-a[1][0] * c[5] + a[1][2] * c[2] - a[1][3] * c[1]) * inv_det;
        m[1][1] = ( a[0][0] * c[5] - a[0][2] * c[2] + a[0][3] * c[1]) * inv_det;
        m[1][2] = (-a[3][0] * s[5] + a[3][2] * s[2] - a[3][3] * s[1]) * inv_det;
        m[1][3] = ( a[2][0] * s[5] - a[2][2] * s[2] + a[2][3] * s[1]) * inv_det;

        m[2][0] = ( a[1][0] * c[4] - a[1][1] * c[2] + a[1][3] * c[0]) * inv_det;
        m[2][1] = (-a[0][0] * c[4] + a[0][1] * c[2] - a[0][3] * c[0]) * inv_det;
        m[2][2] = ( a[3][0] * s[4] - a[3][1] * s[2] + a[3][3] * s[0]) * inv_det;
        m[2][3] = (-a[2][0] * s[4] + a[2][1] * s[2] - a[2][3] * s[0]) * inv_det;

        m[3][0] = (-a[1][0] * c[3] + a[1][1] * c[1] - a[1][2] * c[0]) * inv_det;
        m[3][1] = ( a[0][0] * c[3] - a[0][1] * c[1] + a[0][2] * c[0]) * inv_det;
        m[3][2] = (-a[3][0] * s[3] + a[3][1] * s[1] - a[3][2] * s[0]) * inv_det;
        m[3][3] = ( a[2][0] * s[3] - a[2][1] * s[1] + a[2][2] * s[0]) * inv_det;

        Matrix4x4::new(m)
    }
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Matrix4x4::identity()
    }
}

/// Row-major flat access, `0..16`.
impl Index<usize> for Matrix4x4 {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        assert!(index < 16, "matrix index out of range: {}", index);
        &self.0[index / 4][index % 4]
    }
}

impl<'a> Mul<Vec4<f64>> for &'a Matrix4x4 {
    type Output = Vec4<f64>;

    fn mul(self, vec: Vec4<f64>) -> Self::Output {
        Vec4::new(self.0[0].dot(&vec), self.0[1].dot(&vec), self.0[2].dot(&vec), self.0[3].dot(&vec))
    }
}

impl Mul<Matrix4x4> for Matrix4x4 {
    type Output = Matrix4x4;

    /// Row-by-column product; not commutative.
    fn mul(self, o: Matrix4x4) -> Self::Output {
        let mut out = [[0.0; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    out[i][j] += self.0[i][k] * o.0[k][j];
                }
            }
        }

        Matrix4x4::new(out)
    }
}

impl MulAssign<Matrix4x4> for Matrix4x4 {
    fn mul_assign(&mut self, o: Matrix4x4) {
        *self = *self * o;
    }
}
