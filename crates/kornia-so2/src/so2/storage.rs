//! Storage strategies for the unit complex number of an [`SO2Group`](super::SO2Group).
//!
//! An owned value stores `[T; 2]` inline. The views borrow the two scalars
//! from memory owned elsewhere (an optimizer state vector, a pose buffer, ...)
//! and run the exact same group code on them.

/// Read access to the `[real, imag]` pair.
pub trait Storage<T> {
    /// The stored `[real, imag]` pair.
    fn coeffs(&self) -> &[T; 2];
}

/// Write access to the `[real, imag]` pair.
///
/// Only reachable through the invariant preserving mutators of
/// [`SO2Group`](super::SO2Group).
pub trait StorageMut<T>: Storage<T> {
    /// The stored `[real, imag]` pair, mutably.
    fn coeffs_mut(&mut self) -> &mut [T; 2];
}

impl<T> Storage<T> for [T; 2] {
    #[inline]
    fn coeffs(&self) -> &[T; 2] {
        self
    }
}

impl<T> StorageMut<T> for [T; 2] {
    #[inline]
    fn coeffs_mut(&mut self) -> &mut [T; 2] {
        self
    }
}

impl<T> Storage<T> for &[T; 2] {
    #[inline]
    fn coeffs(&self) -> &[T; 2] {
        *self
    }
}

impl<T> Storage<T> for &mut [T; 2] {
    #[inline]
    fn coeffs(&self) -> &[T; 2] {
        &**self
    }
}

impl<T> StorageMut<T> for &mut [T; 2] {
    #[inline]
    fn coeffs_mut(&mut self) -> &mut [T; 2] {
        &mut **self
    }
}
