use std::fmt::Debug;

use num_traits::Signed;

/// A numeric component of the vector, point and bounding box types.
///
/// Besides plain arithmetic, a component knows whether it holds a NaN and how
/// to widen itself to `f64`, which `Vec3::cross` uses to limit cancellation.
pub trait Scalar: Copy + Debug + PartialOrd + Signed {
    fn is_nan(self) -> bool;

    fn to_f64(self) -> f64;

    fn from_f64(v: f64) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),+) => {
        $(
            impl Scalar for $t {
                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn from_f64(v: f64) -> Self {
                    v as $t
                }
            }
        )+
    };
}

impl_float_scalar!(f32, f64);

impl Scalar for i32 {
    #[inline]
    fn is_nan(self) -> bool {
        false
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as i32
    }
}

#[inline]
pub(crate) fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a {
        b
    } else {
        a
    }
}

#[inline]
pub(crate) fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a {
        b
    } else {
        a
    }
}
