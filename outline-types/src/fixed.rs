//! fixed-point numerical types

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Number of fractional bits in the 16.16 format.
const FIXED_FRACT_BITS: u32 = 16;
/// Number of fractional bits in the 26.6 format.
const F26DOT6_FRACT_BITS: u32 = 6;

/// Converts a raw 26.6 value to a float.
#[inline]
pub fn from_26dot6(v: i64) -> f64 {
    v as f64 / (1 << F26DOT6_FRACT_BITS) as f64
}

/// Converts a float to a raw 26.6 value, truncating toward zero.
///
/// Overflow is not checked.
#[inline]
pub fn to_26dot6(v: f64) -> i64 {
    (v * (1 << F26DOT6_FRACT_BITS) as f64) as i64
}

/// Converts a raw 16.16 value to a float.
#[inline]
pub fn from_16dot16(v: i64) -> f64 {
    v as f64 / (1 << FIXED_FRACT_BITS) as f64
}

/// Converts a float to a raw 16.16 value, truncating toward zero.
///
/// Overflow is not checked.
#[inline]
pub fn to_16dot16(v: f64) -> i64 {
    (v * (1 << FIXED_FRACT_BITS) as f64) as i64
}

/// Converts a raw 16.16 value to 26.6 by dropping the low ten bits.
///
/// This is an arithmetic shift so negative values round toward negative
/// infinity.
#[inline]
pub fn fixed_to_26dot6(v: i64) -> i64 {
    v >> (FIXED_FRACT_BITS - F26DOT6_FRACT_BITS)
}

/// Converts a raw 26.6 value to 16.16.
#[inline]
pub fn f26dot6_to_fixed(v: i64) -> i64 {
    v << (FIXED_FRACT_BITS - F26DOT6_FRACT_BITS)
}

macro_rules! fixed_impl {
    ($name:ident, $bits:literal, $fract_bits:literal, $ty:ty) => {
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
        #[cfg_attr(
            feature = "bytemuck",
            derive(bytemuck::AnyBitPattern, bytemuck::NoUninit)
        )]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(transparent)]
        #[doc = concat!(stringify!($bits), "-bit signed fixed point number with ", stringify!($fract_bits), " bits of fraction." )]
        pub struct $name($ty);

        impl $name {
            /// Minimum value.
            pub const MIN: Self = Self(<$ty>::MIN);

            /// Maximum value.
            pub const MAX: Self = Self(<$ty>::MAX);

            /// This type's smallest representable value
            pub const EPSILON: Self = Self(1);

            /// Representation of 0.0.
            pub const ZERO: Self = Self(0);

            /// Representation of 1.0.
            pub const ONE: Self = Self(1 << $fract_bits);

            const INT_MASK: $ty = !0 << $fract_bits;
            const FRACT_BITS: u32 = $fract_bits;

            /// Creates a new fixed point value from the underlying bit
            /// representation.
            #[inline(always)]
            pub const fn from_bits(bits: $ty) -> Self {
                Self(bits)
            }

            /// Returns the underlying bit representation of the value.
            #[inline(always)]
            pub const fn to_bits(self) -> $ty {
                self.0
            }

            /// Creates a fixed point value from an integer.
            #[inline(always)]
            pub const fn from_i32(i: i32) -> Self {
                Self((i as $ty) << $fract_bits)
            }

            /// Creates a fixed point value from a float.
            ///
            /// This operation is lossy; the float will be rounded to the
            /// nearest representable value, away from zero on ties.
            #[cfg(feature = "std")]
            pub fn from_f64(x: f64) -> Self {
                Self((x * Self::ONE.0 as f64).round() as $ty)
            }

            /// Creates a fixed point value from a float.
            ///
            /// This operation is lossy; the float will be rounded to the
            /// nearest representable value, away from zero on ties.
            #[cfg(not(feature = "std"))]
            pub fn from_f64(x: f64) -> Self {
                let scaled = x * Self::ONE.0 as f64;
                let half = if scaled.is_sign_negative() { -0.5 } else { 0.5 };
                Self((scaled + half) as $ty)
            }

            /// Returns the value as an f64.
            ///
            /// This operation is lossless: all representable values can be
            /// round-tripped.
            pub fn to_f64(self) -> f64 {
                let int = ((self.0 & Self::INT_MASK) >> Self::FRACT_BITS) as f64;
                let fract = (self.0 & !Self::INT_MASK) as f64 / Self::ONE.0 as f64;
                int + fract
            }

            /// Returns the largest integer less than or equal to the number.
            pub fn floor(self) -> Self {
                Self(self.0 & Self::INT_MASK)
            }

            /// Returns the fractional part of the number.
            pub fn fract(self) -> Self {
                Self(self.0 - self.floor().0)
            }
        }

        impl Add for $name {
            type Output = Self;
            #[inline(always)]
            fn add(self, other: Self) -> Self {
                // same overflow semantics as std: panic in debug, wrap in release
                Self(self.0 + other.0)
            }
        }

        impl AddAssign for $name {
            fn add_assign(&mut self, other: Self) {
                *self = *self + other;
            }
        }

        impl Sub for $name {
            type Output = Self;
            #[inline(always)]
            fn sub(self, other: Self) -> Self {
                Self(self.0 - other.0)
            }
        }

        impl SubAssign for $name {
            fn sub_assign(&mut self, other: Self) {
                *self = *self - other;
            }
        }

        impl Neg for $name {
            type Output = Self;
            #[inline(always)]
            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        //hack: we can losslessly go to float, so use those fmt impls
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.to_f64().fmt(f)
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                self.to_f64().fmt(f)
            }
        }
    };
}

fixed_impl!(F26Dot6, 32, 6, i32);
fixed_impl!(Fixed, 32, 16, i32);

impl F26Dot6 {
    /// Converts to 16.16 by shifting in ten fractional bits.
    pub fn to_fixed(self) -> Fixed {
        Fixed(self.0 << 10)
    }
}

impl Fixed {
    /// Converts to 26.6, dropping the low ten fractional bits.
    pub fn to_f26dot6(self) -> F26Dot6 {
        F26Dot6(self.0 >> 10)
    }
}
