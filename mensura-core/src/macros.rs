//! Macros that wire derived-quantity relations into operator impls.
//!
//! Each relation checks at compile time that the dimensions of its operands multiply (or add) to the dimension of
//! its result, so a wrong relation fails to build.

/// `A * B = C` between scalar kinds.
///
/// Generates `A * B`, `B * A`, `C / B -> A` and `C / A -> B`. The `checked` form makes both divisions return
/// [`Result`](crate::Result), failing with [`Error::DivisionByZero`](crate::Error::DivisionByZero) when the divisor
/// is zero.
macro_rules! scalar_product {
    (@dimension $a:ty, $b:ty, $c:ty) => {
        const _: () = assert!(<$c>::DIMENSION.equals(<$a>::DIMENSION.product(<$b>::DIMENSION)));
    };

    (@multiply $a:ty, $b:ty, $c:ty) => {
        impl ::core::ops::Mul<$b> for $a {
            type Output = $c;
            #[inline]
            fn mul(self, rhs: $b) -> $c {
                <$c>::from_standard(self.value() * rhs.value())
            }
        }

        impl ::core::ops::Mul<$a> for $b {
            type Output = $c;
            #[inline]
            fn mul(self, rhs: $a) -> $c {
                <$c>::from_standard(self.value() * rhs.value())
            }
        }
    };

    ($a:ident * $b:ident = $c:ident) => {
        $crate::macros::scalar_product!(@dimension $a, $b, $c);
        $crate::macros::scalar_product!(@multiply $a, $b, $c);

        impl ::core::ops::Div<$b> for $c {
            type Output = $a;
            #[inline]
            fn div(self, rhs: $b) -> $a {
                <$a>::from_standard(self.value() / rhs.value())
            }
        }

        impl ::core::ops::Div<$a> for $c {
            type Output = $b;
            #[inline]
            fn div(self, rhs: $a) -> $b {
                <$b>::from_standard(self.value() / rhs.value())
            }
        }
    };

    (checked $a:ident * $b:ident = $c:ident) => {
        $crate::macros::scalar_product!(@dimension $a, $b, $c);
        $crate::macros::scalar_product!(@multiply $a, $b, $c);

        impl ::core::ops::Div<$b> for $c {
            type Output = $crate::Result<$a>;
            fn div(self, rhs: $b) -> $crate::Result<$a> {
                if rhs.is_zero() {
                    return Err($crate::Error::DivisionByZero {
                        dividend: self.to_string(),
                        divisor: rhs.to_string(),
                    });
                }
                Ok(<$a>::from_standard(self.value() / rhs.value()))
            }
        }

        impl ::core::ops::Div<$a> for $c {
            type Output = $crate::Result<$b>;
            fn div(self, rhs: $a) -> $crate::Result<$b> {
                if rhs.is_zero() {
                    return Err($crate::Error::DivisionByZero {
                        dividend: self.to_string(),
                        divisor: rhs.to_string(),
                    });
                }
                Ok(<$b>::from_standard(self.value() / rhs.value()))
            }
        }
    };
}
pub(crate) use scalar_product;

/// `A + B = C` between scalar kinds of the same dimension.
///
/// Generates `A + B`, `B + A`, `C - B -> A` and `C - A -> B`.
macro_rules! scalar_sum {
    ($a:ident + $b:ident = $c:ident) => {
        const _: () = assert!(<$c>::DIMENSION.equals(<$a>::DIMENSION) && <$c>::DIMENSION.equals(<$b>::DIMENSION));

        impl ::core::ops::Add<$b> for $a {
            type Output = $c;
            #[inline]
            fn add(self, rhs: $b) -> $c {
                <$c>::from_standard(self.value() + rhs.value())
            }
        }

        impl ::core::ops::Add<$a> for $b {
            type Output = $c;
            #[inline]
            fn add(self, rhs: $a) -> $c {
                <$c>::from_standard(self.value() + rhs.value())
            }
        }

        impl ::core::ops::Sub<$b> for $c {
            type Output = $a;
            #[inline]
            fn sub(self, rhs: $b) -> $a {
                <$a>::from_standard(self.value() - rhs.value())
            }
        }

        impl ::core::ops::Sub<$a> for $c {
            type Output = $b;
            #[inline]
            fn sub(self, rhs: $a) -> $b {
                <$b>::from_standard(self.value() - rhs.value())
            }
        }
    };
}
pub(crate) use scalar_sum;

/// `VA * B = VC` where `VA` and `VC` are vector kinds and `B` a scalar kind.
///
/// Generates `VA * B`, `B * VA` and `VC / B -> VA`.
macro_rules! vector_product {
    ($a:ident * $b:ident = $c:ident) => {
        const _: () = assert!(<$c>::DIMENSION.equals(<$a>::DIMENSION.product(<$b>::DIMENSION)));

        impl ::core::ops::Mul<$b> for $a {
            type Output = $c;
            #[inline]
            fn mul(self, rhs: $b) -> $c {
                <$c>::from_standard(self.value() * rhs.value())
            }
        }

        impl ::core::ops::Mul<$a> for $b {
            type Output = $c;
            #[inline]
            fn mul(self, rhs: $a) -> $c {
                <$c>::from_standard(rhs.value() * self.value())
            }
        }

        impl ::core::ops::Div<$b> for $c {
            type Output = $a;
            #[inline]
            fn div(self, rhs: $b) -> $a {
                <$a>::from_standard(self.value() / rhs.value())
            }
        }
    };
}
pub(crate) use vector_product;
