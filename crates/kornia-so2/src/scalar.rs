//! Scalar precision selection.
//!
//! Every rotation type is generic over a [`Scalar`], implemented for `f32` and
//! `f64`. The trait ties a precision to its `glam`-backed vector and matrix
//! types and to the tolerance used by the precondition checks.

use crate::{Mat2F32, Mat2F64, Vec2F32, Vec2F64};
use num_traits::Float;
use std::fmt::{Debug, Display};

mod private {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating point precision of a rotation.
///
/// Sealed: implemented for `f32` and `f64` only.
pub trait Scalar:
    Float + Debug + Display + Send + Sync + 'static + private::Sealed
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// One half.
    const HALF: Self;

    /// Full turn in radians.
    const TAU: Self;

    /// Smallest magnitude accepted where a non-zero value is required.
    const EPSILON: Self;

    /// 2D vector of this precision.
    type Vec2: Copy + Debug + PartialEq;

    /// 2x2 matrix of this precision.
    type Mat2: Copy + Debug + PartialEq;

    /// Build a vector from its components.
    fn vec2(x: Self, y: Self) -> Self::Vec2;

    /// Components `[x, y]` of a vector.
    fn vec2_to_array(v: Self::Vec2) -> [Self; 2];

    /// Build a matrix from a column-major array.
    fn mat2_from_cols_array(cols: [Self; 4]) -> Self::Mat2;

    /// Column-major array `[m00, m10, m01, m11]` of a matrix.
    fn mat2_to_cols_array(m: &Self::Mat2) -> [Self; 4];

    /// Convert from `f64`, rounding to the nearest representable value.
    fn from_f64_cast(v: f64) -> Self;

    /// Convert to `f64`. Exact for both precisions.
    fn to_f64_cast(self) -> f64;
}

macro_rules! impl_scalar {
    ($scalar:ident, $vec:ty, $mat:ty, $epsilon:expr) => {
        impl Scalar for $scalar {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const HALF: Self = 0.5;
            const TAU: Self = std::$scalar::consts::TAU;
            const EPSILON: Self = $epsilon;

            type Vec2 = $vec;
            type Mat2 = $mat;

            #[inline]
            fn vec2(x: Self, y: Self) -> Self::Vec2 {
                <$vec>::new(x, y)
            }

            #[inline]
            fn vec2_to_array(v: Self::Vec2) -> [Self; 2] {
                v.to_array()
            }

            #[inline]
            fn mat2_from_cols_array(cols: [Self; 4]) -> Self::Mat2 {
                <$mat>::from_cols_array(&cols)
            }

            #[inline]
            fn mat2_to_cols_array(m: &Self::Mat2) -> [Self; 4] {
                m.0.to_cols_array()
            }

            #[inline]
            fn from_f64_cast(v: f64) -> Self {
                v as $scalar
            }

            #[inline]
            fn to_f64_cast(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_scalar!(f32, Vec2F32, Mat2F32, 1e-5);
impl_scalar!(f64, Vec2F64, Mat2F64, 1e-10);
