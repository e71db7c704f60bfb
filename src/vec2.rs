use std::ops::{Add, AddAssign, Sub, SubAssign};

use crate::scalar::Scalar;

#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

pub type Vec2i = Vec2<i32>;
pub type Vec2f = Vec2<f64>;

impl<T: Scalar> Vec2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        let v = Self { x, y };
        assert!(!v.has_nans(), "Vec2 has NaN components: {:?}", v);
        v
    }

    #[inline]
    pub fn dot(&self, other: &Vec2<T>) -> T {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(&self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().to_f64().sqrt()
    }

    #[inline]
    pub fn normalize(&self) -> Vec2<T> {
        *self / T::from_f64(self.length())
    }

    #[inline]
    pub fn abs(&self) -> Vec2<T> {
        Vec2::new(self.x.abs(), self.y.abs())
    }
}

impl_vector_ops!(Vec2 { x, y });
impl_index!(Vec2 { 0 => x, 1 => y });

#[derive(Copy, Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

pub type Point2i = Point2<i32>;
pub type Point2f = Point2<f64>;

impl<T: Scalar> Point2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        let p = Self { x, y };
        assert!(!p.has_nans(), "Point2 has NaN components: {:?}", p);
        p
    }

    #[inline]
    pub fn distance(&self, other: &Point2<T>) -> f64 {
        (*self - *other).length()
    }

    #[inline]
    pub fn distance_squared(&self, other: &Point2<T>) -> T {
        (*self - *other).length_squared()
    }

    /// Linearly interpolates towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Point2<T>, t: f64) -> Point2<T> {
        assert!(t >= 0.0 && t <= 1.0, "lerp parameter outside [0, 1]: {}", t);
        let t_inv = 1.0 - t;
        Point2::new(
            T::from_f64(self.x.to_f64() * t_inv + other.x.to_f64() * t),
            T::from_f64(self.y.to_f64() * t_inv + other.y.to_f64() * t),
        )
    }
}

impl_scalar_ops!(Point2 { x, y });
impl_index!(Point2 { 0 => x, 1 => y });

impl<T: Scalar> Add<Vec2<T>> for Point2<T> {
    type Output = Point2<T>;

    #[inline]
    fn add(self, v: Vec2<T>) -> Self::Output {
        Point2::new(self.x + v.x, self.y + v.y)
    }
}

impl<T: Scalar> AddAssign<Vec2<T>> for Point2<T> {
    #[inline]
    fn add_assign(&mut self, v: Vec2<T>) {
        *self = *self + v;
    }
}

impl<T: Scalar> Sub<Vec2<T>> for Point2<T> {
    type Output = Point2<T>;

    #[inline]
    fn sub(self, v: Vec2<T>) -> Self::Output {
        Point2::new(self.x - v.x, self.y - v.y)
    }
}

impl<T: Scalar> SubAssign<Vec2<T>> for Point2<T> {
    #[inline]
    fn sub_assign(&mut self, v: Vec2<T>) {
        *self = *self - v;
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Vec2<T>;

    #[inline]
    fn sub(self, other: Point2<T>) -> Self::Output {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_float_eq;

    #[test]
    fn vec2_arithmetic() {
        let mut v = Vec2::new(1, 2) + Vec2::new(3, 5);
        assert_eq!(Vec2::new(4, 7), v);
        v -= Vec2::new(1, 1);
        assert_eq!(Vec2::new(3, 6), v);
        assert_eq!(Vec2::new(6, 12), v * 2);
        assert_eq!(Vec2::new(1, 2), v / 3);
        assert_eq!(Vec2::new(-3, -6), -v);
    }

    #[test]
    fn vec2_length_and_normalize() {
        let v = Vec2f::new(3.0, -4.0);
        assert_float_eq(25.0, v.length_squared());
        assert_float_eq(5.0, v.length());
        let n = v.normalize();
        assert_float_eq(0.6, n.x);
        assert_float_eq(-0.8, n.y);
        assert_eq!(Vec2f::new(3.0, 4.0), v.abs());
        assert_float_eq(-5.0, v.dot(&Vec2f::new(1.0, 2.0)));
    }

    #[test]
    #[should_panic]
    fn vec2_rejects_nan() {
        Vec2f::new(std::f64::NAN, 0.0);
    }

    #[test]
    #[should_panic]
    fn vec2_division_by_zero() {
        let _ = Vec2f::new(1.0, 1.0) / 0.0;
    }

    #[test]
    #[should_panic]
    fn point2_set_nan() {
        let mut p = Point2f::new(0.0, 0.0);
        p.set(1, std::f64::NAN);
    }

    #[test]
    #[should_panic]
    fn vec2_index_out_of_range() {
        let v = Vec2i::new(1, 2);
        let _ = v[2];
    }

    #[test]
    fn point2_offsets_and_distance() {
        let mut p = Point2f::new(1.0, 1.0) + Vec2f::new(2.0, 3.0);
        assert_eq!(Point2f::new(3.0, 4.0), p);
        assert_float_eq(5.0, p.distance(&Point2f::new(0.0, 0.0)));
        assert_float_eq(25.0, p.distance_squared(&Point2f::new(0.0, 0.0)));
        p -= Vec2f::new(3.0, 4.0);
        assert_eq!(Point2f::new(0.0, 0.0), p);
        assert_eq!(Vec2f::new(-1.0, -2.0), p - Point2f::new(1.0, 2.0));
    }

    #[test]
    fn point2_lerp() {
        let a = Point2f::new(0.0, 10.0);
        let b = Point2f::new(10.0, 20.0);
        assert_eq!(a, a.lerp(&b, 0.0));
        assert_eq!(b, a.lerp(&b, 1.0));
        let mid = a.lerp(&b, 0.25);
        assert_float_eq(2.5, mid.x);
        assert_float_eq(12.5, mid.y);
    }

    #[test]
    #[should_panic]
    fn point2_lerp_out_of_range() {
        Point2f::new(0.0, 0.0).lerp(&Point2f::new(1.0, 1.0), 1.5);
    }
}
