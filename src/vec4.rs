use std::ops::{Add, Index, IndexMut, Mul};

use crate::vec3::{Point3, Vec3};

/// Homogeneous coordinates. Points carry `w = 1`, directions `w = 0`.
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Vec4<T>([T; 4]);

impl<T> Vec4<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T, w: T) -> Self {
        Vec4([x, y, z, w])
    }

    #[inline]
    pub fn x(&self) -> &T {
        self.index(0)
    }

    #[inline]
    pub fn y(&self) -> &T {
        self.index(1)
    }

    #[inline]
    pub fn z(&self) -> &T {
        self.index(2)
    }

    #[inline]
    pub fn w(&self) -> &T {
        self.index(3)
    }
}

impl<T: Copy + Add<Output = T> + Mul<Output = T>> Vec4<T> {
    #[inline]
    pub fn dot(&self, other: &Vec4<T>) -> T {
        self.0[0] * other.0[0] + self.0[1] * other.0[1] + self.0[2] * other.0[2] + self.0[3] * other.0[3]
    }
}

impl<T: Copy> From<[T; 4]> for Vec4<T> {
    #[inline]
    fn from(v: [T; 4]) -> Self {
        Vec4::new(v[0], v[1], v[2], v[3])
    }
}

impl From<Point3<f64>> for Vec4<f64> {
    #[inline]
    fn from(p: Point3<f64>) -> Self {
        Vec4::new(p.x, p.y, p.z, 1.0)
    }
}

impl From<Vec3<f64>> for Vec4<f64> {
    #[inline]
    fn from(v: Vec3<f64>) -> Self {
        Vec4::new(v.x, v.y, v.z, 0.0)
    }
}

impl<T> Index<usize> for Vec4<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T> IndexMut<usize> for Vec4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

#[test]
fn homogeneous_points_and_vectors() {
    let p = Vec4::from(Point3::new(1.0, 2.0, 3.0));
    let v = Vec4::from(Vec3::new(1.0, 2.0, 3.0));

    assert_eq!(1.0, *p.w());
    assert_eq!(0.0, *v.w());
    assert_eq!(14.0, p.dot(&v));
}

#[test]
fn accessors() {
    let mut v = Vec4::from([1, 2, 3, 4]);
    v[3] = 5;

    assert_eq!((1, 2, 3, 5), (*v.x(), *v.y(), *v.z(), *v.w()));
}
