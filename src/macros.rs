//! Operator boilerplate shared by the vector-like types.

/// Scalar `*` and `/` (plus their assign forms) for a component-wise type.
macro_rules! impl_scalar_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl<T: Scalar> $name<T> {
            #[inline]
            fn has_nans(&self) -> bool {
                false $(|| self.$field.is_nan())+
            }
        }

        impl<T: Scalar> std::ops::Mul<T> for $name<T> {
            type Output = $name<T>;

            #[inline]
            fn mul(self, scalar: T) -> Self::Output {
                $name::new($(self.$field * scalar),+)
            }
        }

        impl<T: Scalar> std::ops::MulAssign<T> for $name<T> {
            #[inline]
            fn mul_assign(&mut self, scalar: T) {
                $(self.$field = self.$field * scalar;)+
                assert!(!self.has_nans(), "{} has NaN components: {:?}", stringify!($name), self);
            }
        }

        impl<T: Scalar> std::ops::Div<T> for $name<T> {
            type Output = $name<T>;

            #[inline]
            fn div(self, scalar: T) -> Self::Output {
                assert!(scalar != T::zero(), "{} divided by zero", stringify!($name));
                $name::new($(self.$field / scalar),+)
            }
        }

        impl<T: Scalar> std::ops::DivAssign<T> for $name<T> {
            #[inline]
            fn div_assign(&mut self, scalar: T) {
                assert!(scalar != T::zero(), "{} divided by zero", stringify!($name));
                $(self.$field = self.$field / scalar;)+
                assert!(!self.has_nans(), "{} has NaN components: {:?}", stringify!($name), self);
            }
        }
    };
}

/// Same-type `+`, `-` and unary `-` for vectors and normals.
macro_rules! impl_vector_ops {
    ($name:ident { $($field:ident),+ }) => {
        impl_scalar_ops!($name { $($field),+ });

        impl<T: Scalar> std::ops::Add for $name<T> {
            type Output = $name<T>;

            #[inline]
            fn add(self, other: $name<T>) -> Self::Output {
                $name::new($(self.$field + other.$field),+)
            }
        }

        impl<T: Scalar> std::ops::AddAssign for $name<T> {
            #[inline]
            fn add_assign(&mut self, other: $name<T>) {
                $(self.$field = self.$field + other.$field;)+
                assert!(!self.has_nans(), "{} has NaN components: {:?}", stringify!($name), self);
            }
        }

        impl<T: Scalar> std::ops::Sub for $name<T> {
            type Output = $name<T>;

            #[inline]
            fn sub(self, other: $name<T>) -> Self::Output {
                $name::new($(self.$field - other.$field),+)
            }
        }

        impl<T: Scalar> std::ops::SubAssign for $name<T> {
            #[inline]
            fn sub_assign(&mut self, other: $name<T>) {
                $(self.$field = self.$field - other.$field;)+
                assert!(!self.has_nans(), "{} has NaN components: {:?}", stringify!($name), self);
            }
        }

        impl<T: Scalar> std::ops::Neg for $name<T> {
            type Output = $name<T>;

            #[inline]
            fn neg(self) -> Self::Output {
                $name::new($(-self.$field),+)
            }
        }
    };
}

/// Component access by position; anything past the last component panics.
/// There is no `IndexMut`, writes go through the NaN-checked `set`.
macro_rules! impl_index {
    ($name:ident { $($idx:literal => $field:ident),+ }) => {
        impl<T> std::ops::Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &Self::Output {
                match index {
                    $($idx => &self.$field,)+
                    _ => panic!("{} index out of range: {}", stringify!($name), index),
                }
            }
        }

        impl<T: Scalar> $name<T> {
            /// Overwrites one component. Writing a NaN panics like every
            /// other mutation does.
            #[inline]
            pub fn set(&mut self, index: usize, value: T) {
                assert!(!value.is_nan(), "{} component {} set to NaN", stringify!($name), index);
                match index {
                    $($idx => self.$field = value,)+
                    _ => panic!("{} index out of range: {}", stringify!($name), index),
                }
            }
        }
    };
}
