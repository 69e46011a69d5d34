//! # SO(2) — The Special Orthogonal Group in 2D
//!
//! SO(2) is the group of planar rotations: 2×2 orthogonal matrices with
//! determinant +1. It has 1 degree of freedom and is topologically the circle S¹.
//!
//! ## Internal representation: unit complex numbers
//!
//! [`SO2Group`] stores a rotation by θ as the unit complex number
//! `z = cos(θ) + i·sin(θ)`, kept as the pair `[real, imag]`. Composition is
//! complex multiplication and the inverse is the complex conjugate. Unlike the
//! quaternion double cover of SO(3), this representation is one-to-one.
//!
//! The pair has unit length whenever it is observed. Every constructor and
//! mutator restores that, with one exception: [`SO2Group::fast_multiply`]
//! skips the renormalization so a chain of compositions pays for it once, at
//! the end, through [`SO2Group::normalize`].
//!
//! ## The exp/log maps
//!
//! The Lie algebra **so(2)** is the space of 2×2 skew-symmetric matrices,
//! isomorphic to R through the hat operator. A tangent element is simply the
//! rotation angle θ in radians.
//!
//! - `exp(θ)`: angle → `(cos θ, sin θ)`. Total over R.
//! - `log()`: rotation → `atan2(imag, real)`, in (−π, π].
//!
//! SO(2) is abelian: composition commutes, the Lie bracket is identically
//! zero, the adjoint is the scalar 1 and both Jacobians of exp are 1.
//!
//! ## Storage
//!
//! The storage parameter `S` selects where the pair lives:
//!
//! | alias               | storage        | use                                   |
//! |---------------------|----------------|---------------------------------------|
//! | [`SO2<T>`]          | `[T; 2]`       | owned value                           |
//! | [`SO2Map<'a, T>`]   | `&'a mut [T; 2]` | mutable view into external memory   |
//! | [`SO2MapRef<'a, T>`]| `&'a [T; 2]`   | read-only view into external memory   |
//!
//! Views never renormalize on their own: after writing to the borrowed memory
//! behind their back, call [`SO2Group::normalize`] on a mutable view.

use crate::{error::SO2Error, scalar::Scalar, Vec2F32, Vec2F64};
use rand::Rng;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Mul, MulAssign};

mod map;
pub mod storage;

pub use storage::{Storage, StorageMut};

/// A 2D rotation, stored as a unit complex number `[real, imag]`.
///
/// See the [module-level documentation](self) for the storage variants.
#[derive(Clone, Copy)]
pub struct SO2Group<T, S = [T; 2]> {
    z: S,
    _scalar: PhantomData<T>,
}

/// Owned 2D rotation.
pub type SO2<T> = SO2Group<T, [T; 2]>;

/// Owned 2D rotation (single precision).
pub type SO2F32 = SO2<f32>;

/// Owned 2D rotation (double precision).
pub type SO2F64 = SO2<f64>;

/// Mutable view of a 2D rotation stored in external memory.
pub type SO2Map<'a, T> = SO2Group<T, &'a mut [T; 2]>;

/// Read-only view of a 2D rotation stored in external memory.
pub type SO2MapRef<'a, T> = SO2Group<T, &'a [T; 2]>;

impl<T: Scalar> SO2Group<T> {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        z: [T::ONE, T::ZERO],
        _scalar: PhantomData,
    };

    #[inline]
    fn from_unit_unchecked(real: T, imag: T) -> Self {
        Self {
            z: [real, imag],
            _scalar: PhantomData,
        }
    }

    /// The identity rotation.
    #[inline]
    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Create a rotation from a complex number, normalized to unit length.
    ///
    /// # Preconditions
    ///
    /// Both parts must be finite and `real² + imag²` must exceed
    /// [`Scalar::EPSILON`]. Checked in debug builds only; see
    /// [`SO2Group::try_new`] for the checked version.
    pub fn new(real: T, imag: T) -> Self {
        debug_assert!(
            real.is_finite() && imag.is_finite() && real * real + imag * imag > T::EPSILON,
            "SO2 requires a finite non-zero complex number, got ({real}, {imag})"
        );
        let mut so2 = Self::from_unit_unchecked(real, imag);
        so2.rescale();
        so2
    }

    /// Create a rotation from a complex number, normalized to unit length.
    ///
    /// Returns [`SO2Error::NonFinite`] if either part is infinite or NaN and
    /// [`SO2Error::ZeroComplex`] if the pair is too close to zero.
    pub fn try_new(real: T, imag: T) -> Result<Self, SO2Error> {
        if !real.is_finite() || !imag.is_finite() {
            return Err(SO2Error::NonFinite {
                real: real.to_f64_cast(),
                imag: imag.to_f64_cast(),
            });
        }
        // may overflow to inf for huge inputs, which is still a valid pair
        let norm_squared = real * real + imag * imag;
        if norm_squared <= T::EPSILON {
            return Err(SO2Error::ZeroComplex {
                norm_squared: norm_squared.to_f64_cast(),
            });
        }
        Ok(Self::new(real, imag))
    }

    /// Create a rotation from a 2-vector `(real, imag)`, normalized to unit length.
    ///
    /// Same precondition as [`SO2Group::new`].
    #[inline]
    pub fn from_vec2(z: T::Vec2) -> Self {
        let [real, imag] = T::vec2_to_array(z);
        Self::new(real, imag)
    }

    /// Checked version of [`SO2Group::from_vec2`].
    #[inline]
    pub fn try_from_vec2(z: T::Vec2) -> Result<Self, SO2Error> {
        let [real, imag] = T::vec2_to_array(z);
        Self::try_new(real, imag)
    }

    /// Create a rotation from an array `[real, imag]`, normalized to unit length.
    ///
    /// Same precondition as [`SO2Group::new`].
    #[inline]
    pub fn from_array(arr: [T; 2]) -> Self {
        Self::new(arr[0], arr[1])
    }

    /// Create a rotation by `theta` radians.
    #[inline]
    pub fn from_angle(theta: T) -> Self {
        Self::exp(theta)
    }

    /// Create a rotation from a 2×2 rotation matrix.
    ///
    /// The pair is read from the trace and the off-diagonal difference,
    /// `real = ½(R₀₀ + R₁₁)`, `imag = ½(R₁₀ − R₀₁)`, and renormalized.
    ///
    /// # Preconditions
    ///
    /// `mat` must be orthogonal with determinant 1. This is not checked; a
    /// matrix that is close to a rotation is projected onto the nearest one.
    pub fn from_matrix(mat: &T::Mat2) -> Self {
        let [m00, m10, m01, m11] = T::mat2_to_cols_array(mat);
        Self::new(T::HALF * (m00 + m11), T::HALF * (m10 - m01))
    }

    /// Create a rotation with a uniformly sampled angle in `[0, 2π)`.
    pub fn from_random() -> Self {
        let mut rng = rand::rng();
        let theta: f64 = rng.random_range(0.0..std::f64::consts::TAU);
        Self::exp(T::from_f64_cast(theta))
    }

    /// Lie algebra -> Lie group.
    #[inline]
    pub fn exp(theta: T) -> Self {
        Self::from_unit_unchecked(theta.cos(), theta.sin())
    }

    /// Matrix representation `[[0, −θ], [θ, 0]]` of a Lie algebra element.
    #[inline]
    pub fn hat(theta: T) -> T::Mat2 {
        T::mat2_from_cols_array([T::ZERO, theta, -theta, T::ZERO])
    }

    /// Inverse of [`SO2Group::hat`]: returns `M(1,0)`.
    ///
    /// # Preconditions
    ///
    /// `|M(0,1) + M(1,0)|` must be below [`Scalar::EPSILON`]. Checked in debug
    /// builds only; see [`SO2Group::try_vee`].
    pub fn vee(omega: &T::Mat2) -> T {
        let [_, m10, m01, _] = T::mat2_to_cols_array(omega);
        debug_assert!(
            (m10 + m01).abs() < T::EPSILON,
            "so2 element must be skew-symmetric, got M(0,1) = {m01}, M(1,0) = {m10}"
        );
        m10
    }

    /// Checked version of [`SO2Group::vee`].
    pub fn try_vee(omega: &T::Mat2) -> Result<T, SO2Error> {
        let [_, m10, m01, _] = T::mat2_to_cols_array(omega);
        let residual = (m10 + m01).abs();
        if residual.is_nan() || residual >= T::EPSILON {
            return Err(SO2Error::NotSkewSymmetric {
                residual: residual.to_f64_cast(),
            });
        }
        Ok(m10)
    }

    /// Infinitesimal generator of SO(2), `hat(1)`.
    #[inline]
    pub fn generator() -> T::Mat2 {
        Self::hat(T::ONE)
    }

    /// Lie bracket of so(2). Always zero: SO(2) is commutative.
    #[inline]
    pub fn lie_bracket(_theta1: T, _theta2: T) -> T {
        T::ZERO
    }

    /// Left plus: `exp(τ) · X`.
    #[inline]
    pub fn lplus<S: Storage<T>>(tau: T, x: &SO2Group<T, S>) -> Self {
        Self::exp(tau).compose(x)
    }

    /// Left minus: `log(Y · X⁻¹)`.
    #[inline]
    pub fn lminus<S1: Storage<T>, S2: Storage<T>>(y: &SO2Group<T, S1>, x: &SO2Group<T, S2>) -> T {
        y.compose(&x.inverse()).log()
    }

    /// Left Jacobian of exp. For SO(2), J_l(θ) = 1.
    #[inline]
    pub fn left_jacobian() -> T {
        T::ONE
    }

    /// Right Jacobian of exp. For SO(2), J_r(θ) = 1.
    #[inline]
    pub fn right_jacobian() -> T {
        T::ONE
    }
}

impl<T: Scalar> Default for SO2Group<T> {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl<T: Scalar, S: Storage<T>> SO2Group<T, S> {
    /// Real part, `cos(θ)`.
    #[inline]
    pub fn real(&self) -> T {
        self.z.coeffs()[0]
    }

    /// Imaginary part, `sin(θ)`.
    #[inline]
    pub fn imag(&self) -> T {
        self.z.coeffs()[1]
    }

    /// The unit complex number as a 2-vector `(real, imag)`.
    #[inline]
    pub fn unit_complex(&self) -> T::Vec2 {
        T::vec2(self.real(), self.imag())
    }

    /// Read-only access to the raw `[real, imag]` pair.
    #[inline]
    pub fn as_array(&self) -> &[T; 2] {
        self.z.coeffs()
    }

    /// Copy of the `[real, imag]` pair.
    #[inline]
    pub fn to_array(&self) -> [T; 2] {
        *self.z.coeffs()
    }

    /// Copy into an owned rotation.
    #[inline]
    pub fn to_so2(&self) -> SO2<T> {
        SO2::<T>::from_unit_unchecked(self.real(), self.imag())
    }

    /// Copy into an owned rotation of another precision.
    #[inline]
    pub fn cast<U: Scalar>(&self) -> SO2<U> {
        SO2::<U>::from_unit_unchecked(
            U::from_f64_cast(self.real().to_f64_cast()),
            U::from_f64_cast(self.imag().to_f64_cast()),
        )
    }

    /// Whether the pair has unit length, up to `sqrt(EPSILON)`.
    pub fn is_normalized(&self) -> bool {
        (self.real().hypot(self.imag()) - T::ONE).abs() < T::EPSILON.sqrt()
    }

    /// Group inverse: the complex conjugate `(real, −imag)`.
    #[inline]
    pub fn inverse(&self) -> SO2<T> {
        SO2::<T>::from_unit_unchecked(self.real(), -self.imag())
    }

    /// Group composition `self · other`, renormalized.
    ///
    /// Composition is commutative for SO(2), so `a.compose(&b) == b.compose(&a)`
    /// up to rounding.
    #[inline]
    pub fn compose<S2: Storage<T>>(&self, other: &SO2Group<T, S2>) -> SO2<T> {
        let mut result = self.to_so2();
        result.compose_assign(other);
        result
    }

    /// Rotate the point `p`.
    #[inline]
    pub fn act(&self, p: T::Vec2) -> T::Vec2 {
        let [x, y] = T::vec2_to_array(p);
        let (real, imag) = (self.real(), self.imag());
        T::vec2(real * x - imag * y, imag * x + real * y)
    }

    /// The 2×2 rotation matrix `[[real, −imag], [imag, real]]`.
    #[inline]
    pub fn matrix(&self) -> T::Mat2 {
        let (real, imag) = (self.real(), self.imag());
        T::mat2_from_cols_array([real, imag, -imag, real])
    }

    /// Lie group -> Lie algebra. The angle in (−π, π].
    #[inline]
    pub fn log(&self) -> T {
        // + 0 folds -0.0 so (-1, -0) maps to π instead of −π
        (self.imag() + T::ZERO).atan2(self.real())
    }

    /// Adjoint representation. Always 1 for SO(2).
    #[inline]
    pub fn adjoint(&self) -> T {
        T::ONE
    }

    /// Right plus: `X · exp(τ)`.
    #[inline]
    pub fn rplus(&self, tau: T) -> SO2<T> {
        self.compose(&SO2::<T>::exp(tau))
    }

    /// Right minus: `log(X⁻¹ · Y)` with `X = self`, `Y = other`.
    #[inline]
    pub fn rminus<S2: Storage<T>>(&self, other: &SO2Group<T, S2>) -> T {
        self.inverse().compose(other).log()
    }
}

impl<T: Scalar, S: StorageMut<T>> SO2Group<T, S> {
    fn rescale(&mut self) -> T {
        let [real, imag] = *self.z.coeffs();
        let length = real.hypot(imag);
        debug_assert!(
            length > T::EPSILON,
            "cannot normalize a complex number of length {length}"
        );
        let z = self.z.coeffs_mut();
        z[0] = real / length;
        z[1] = imag / length;
        length
    }

    /// Rescale the pair to unit length.
    ///
    /// Only needed after [`SO2Group::fast_multiply`], after [`SO2Group::edit_raw`]
    /// or after the memory behind a view was written externally.
    ///
    /// # Preconditions
    ///
    /// The length must exceed [`Scalar::EPSILON`]. Checked in debug builds only.
    pub fn normalize(&mut self) {
        let length = self.rescale();
        if (length - T::ONE).abs() > T::EPSILON.sqrt() {
            log::debug!("renormalized SO2 that drifted to length {}", length);
        }
    }

    /// In-place composition `self = self · other` without renormalization.
    ///
    /// The result is off the unit circle by the accumulated rounding error;
    /// call [`SO2Group::normalize`] once the chain of products is done.
    #[inline]
    pub fn fast_multiply<S2: Storage<T>>(&mut self, other: &SO2Group<T, S2>) {
        let [lhs_real, lhs_imag] = *self.z.coeffs();
        let [rhs_real, rhs_imag] = *other.z.coeffs();
        let z = self.z.coeffs_mut();
        z[0] = lhs_real * rhs_real - lhs_imag * rhs_imag;
        z[1] = lhs_real * rhs_imag + lhs_imag * rhs_real;
    }

    /// In-place composition `self = self · other`, renormalized.
    #[inline]
    pub fn compose_assign<S2: Storage<T>>(&mut self, other: &SO2Group<T, S2>) {
        self.fast_multiply(other);
        self.normalize();
    }

    /// Install a new complex number, normalized to unit length.
    ///
    /// # Preconditions
    ///
    /// The complex number must not be zero. Checked in debug builds only.
    pub fn set_complex(&mut self, complex: T::Vec2) {
        let [real, imag] = T::vec2_to_array(complex);
        debug_assert!(
            real.is_finite() && imag.is_finite() && real * real + imag * imag > T::EPSILON,
            "SO2 requires a finite non-zero complex number, got ({real}, {imag})"
        );
        *self.z.coeffs_mut() = [real, imag];
        self.rescale();
    }

    /// Copy the pair of another rotation, of any storage, into this one.
    #[inline]
    pub fn set_from<S2: Storage<T>>(&mut self, other: &SO2Group<T, S2>) {
        *self.z.coeffs_mut() = *other.z.coeffs();
    }

    /// Edit the raw `[real, imag]` pair; the pair is renormalized when `f` returns.
    ///
    /// `f` must leave a pair that is not zero.
    pub fn edit_raw<R>(&mut self, f: impl FnOnce(&mut [T; 2]) -> R) -> R {
        let out = f(self.z.coeffs_mut());
        self.normalize();
        out
    }
}

impl<T: Scalar, S: Storage<T>> fmt::Debug for SO2Group<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SO2")
            .field("real", &self.real())
            .field("imag", &self.imag())
            .finish()
    }
}

impl<T: Scalar, S: Storage<T>> fmt::Display for SO2Group<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SO2(angle: {:.4})", self.log())
    }
}

impl<T: Scalar, S: Storage<T>, S2: Storage<T>> PartialEq<SO2Group<T, S2>> for SO2Group<T, S> {
    fn eq(&self, other: &SO2Group<T, S2>) -> bool {
        self.z.coeffs() == other.z.coeffs()
    }
}

impl<T: Scalar, S: Storage<T>, S2: Storage<T>> Mul<SO2Group<T, S2>> for SO2Group<T, S> {
    type Output = SO2<T>;

    #[inline]
    fn mul(self, rhs: SO2Group<T, S2>) -> Self::Output {
        self.compose(&rhs)
    }
}

impl<T: Scalar, S: StorageMut<T>, S2: Storage<T>> MulAssign<SO2Group<T, S2>> for SO2Group<T, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: SO2Group<T, S2>) {
        self.compose_assign(&rhs);
    }
}

macro_rules! impl_mul_vec2 {
    ($scalar:ty, $vec:ty) => {
        impl<S: Storage<$scalar>> Mul<$vec> for SO2Group<$scalar, S> {
            type Output = $vec;

            #[inline]
            fn mul(self, p: $vec) -> Self::Output {
                self.act(p)
            }
        }
    };
}

impl_mul_vec2!(f32, Vec2F32);
impl_mul_vec2!(f64, Vec2F64);
