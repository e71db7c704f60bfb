use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::scalar::Scalar;

#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Vec3i = Vec3<i32>;
pub type Vec3f = Vec3<f64>;

impl<T: Scalar> Vec3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let v = Self { x, y, z };
        assert!(!v.has_nans(), "Vec3 has NaN components: {:?}", v);
        v
    }

    #[inline]
    pub fn dot(&self, other: &Vec3<T>) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, evaluated in `f64` so that narrow component types do not
    /// lose the difference of two nearly equal products.
    pub fn cross(&self, other: &Vec3<T>) -> Vec3<T> {
        let (ax, ay, az) = (self.x.to_f64(), self.y.to_f64(), self.z.to_f64());
        let (bx, by, bz) = (other.x.to_f64(), other.y.to_f64(), other.z.to_f64());

        Vec3::new(
            T::from_f64(ay * bz - az * by),
            T::from_f64(az * bx - ax * bz),
            T::from_f64(ax * by - ay * bx),
        )
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().to_f64().sqrt()
    }

    /// Panics on a zero-length vector.
    #[inline]
    pub fn normalize(&self) -> Vec3<T> {
        *self / T::from_f64(self.length())
    }

    #[inline]
    pub fn abs(&self) -> Vec3<T> {
        Vec3::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    /// Index of the component with the largest value.
    pub fn max_dimension(&self) -> usize {
        if self.x > self.y {
            if self.x > self.z {
                0
            } else {
                2
            }
        } else if self.y > self.z {
            1
        } else {
            2
        }
    }

    #[inline]
    pub fn permute(&self, x: usize, y: usize, z: usize) -> Vec3<T> {
        Vec3::new(self[x], self[y], self[z])
    }

    /// Given `self` as a unit vector, returns two more unit vectors that complete
    /// an orthonormal basis with it.
    pub fn coordinate_system(&self) -> (Vec3<T>, Vec3<T>) {
        let v2 = if self.x.abs() > self.y.abs() {
            Vec3::new(-self.z, T::zero(), self.x).normalize()
        } else {
            Vec3::new(T::zero(), self.z, -self.y).normalize()
        };
        let v3 = self.cross(&v2);

        (v2, v3)
    }
}

impl_vector_ops!(Vec3 { x, y, z });
impl_index!(Vec3 { 0 => x, 1 => y, 2 => z });

impl<T: Scalar> From<Point3<T>> for Vec3<T> {
    #[inline]
    fn from(p: Point3<T>) -> Self {
        Vec3::new(p.x, p.y, p.z)
    }
}

impl<T: Scalar> From<Normal3<T>> for Vec3<T> {
    #[inline]
    fn from(n: Normal3<T>) -> Self {
        Vec3::new(n.x, n.y, n.z)
    }
}

#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Point3i = Point3<i32>;
pub type Point3f = Point3<f64>;

impl<T: Scalar> Point3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let p = Self { x, y, z };
        assert!(!p.has_nans(), "Point3 has NaN components: {:?}", p);
        p
    }

    #[inline]
    pub fn distance(&self, other: &Point3<T>) -> f64 {
        (*self - *other).length()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Point3<T>) -> T {
        (*self - *other).length_squared()
    }

    /// Linearly interpolates towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Point3<T>, t: f64) -> Point3<T> {
        assert!(t >= 0.0 && t <= 1.0, "lerp parameter outside [0, 1]: {}", t);
        let t_inv = 1.0 - t;
        Point3::new(
            T::from_f64(self.x.to_f64() * t_inv + other.x.to_f64() * t),
            T::from_f64(self.y.to_f64() * t_inv + other.y.to_f64() * t),
            T::from_f64(self.z.to_f64() * t_inv + other.z.to_f64() * t),
        )
    }

    #[inline]
    pub fn permute(&self, x: usize, y: usize, z: usize) -> Point3<T> {
        Point3::new(self[x], self[y], self[z])
    }
}

impl_scalar_ops!(Point3 { x, y, z });
impl_index!(Point3 { 0 => x, 1 => y, 2 => z });

impl<T: Scalar> Add<Vec3<T>> for Point3<T> {
    type Output = Point3<T>;

    #[inline]
    fn add(self, v: Vec3<T>) -> Self::Output {
        Point3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T: Scalar> AddAssign<Vec3<T>> for Point3<T> {
    #[inline]
    fn add_assign(&mut self, v: Vec3<T>) {
        *self = *self + v;
    }
}

impl<T: Scalar> Sub<Vec3<T>> for Point3<T> {
    type Output = Point3<T>;

    #[inline]
    fn sub(self, v: Vec3<T>) -> Self::Output {
        Point3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T: Scalar> SubAssign<Vec3<T>> for Point3<T> {
    #[inline]
    fn sub_assign(&mut self, v: Vec3<T>) {
        *self = *self - v;
    }
}

impl<T: Scalar> Sub for Point3<T> {
    type Output = Vec3<T>;

    #[inline]
    fn sub(self, other: Point3<T>) -> Self::Output {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// A surface normal. Same layout as `Vec3` but a different type, because it
/// changes differently under a transform (see `Transform::apply`).
#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Normal3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

pub type Normal3f = Normal3<f64>;

impl<T: Scalar> Normal3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let n = Self { x, y, z };
        assert!(!n.has_nans(), "Normal3 has NaN components: {:?}", n);
        n
    }

    #[inline]
    pub fn dot(&self, v: &Vec3<T>) -> T {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    #[inline]
    pub fn length(&self) -> f64 {
        Vec3::from(*self).length()
    }

    #[inline]
    pub fn normalize(&self) -> Normal3<T> {
        *self / T::from_f64(self.length())
    }

    /// Flips the normal, if needed, to lie in the same hemisphere as `v`.
    #[inline]
    pub fn face_forward(&self, v: &Vec3<T>) -> Normal3<T> {
        if self.dot(v) < T::zero() {
            -*self
        } else {
            *self
        }
    }
}

impl_vector_ops!(Normal3 { x, y, z });
impl_index!(Normal3 { 0 => x, 1 => y, 2 => z });

impl<T: Scalar> From<Vec3<T>> for Normal3<T> {
    #[inline]
    fn from(v: Vec3<T>) -> Self {
        Normal3::new(v.x, v.y, v.z)
    }
}
