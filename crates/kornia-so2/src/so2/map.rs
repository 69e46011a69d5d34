//! Views of a rotation stored in memory owned elsewhere.

use super::{SO2Group, SO2Map, SO2MapRef};
use crate::{error::SO2Error, scalar::Scalar};
use std::marker::PhantomData;

impl<'a, T: Scalar> SO2Group<T, &'a mut [T; 2]> {
    /// Wrap a `[real, imag]` pair owned elsewhere.
    ///
    /// The pair is used as is. If it may not have unit length, call
    /// [`SO2Group::normalize`] before any other operation.
    #[inline]
    pub fn from_coeffs(coeffs: &'a mut [T; 2]) -> Self {
        Self {
            z: coeffs,
            _scalar: PhantomData,
        }
    }

    /// Wrap a buffer holding exactly one `[real, imag]` pair.
    pub fn try_from_slice(data: &'a mut [T]) -> Result<Self, SO2Error> {
        let got = data.len();
        let coeffs: &'a mut [T; 2] = data
            .try_into()
            .map_err(|_| SO2Error::WrongBufferSize { expected: 2, got })?;
        Ok(Self::from_coeffs(coeffs))
    }

    /// Reborrow as a read-only view.
    #[inline]
    pub fn as_map_ref(&self) -> SO2MapRef<'_, T> {
        SO2MapRef::from_coeffs(&*self.z)
    }
}

impl<'a, T: Scalar> SO2Group<T, &'a [T; 2]> {
    /// Wrap a `[real, imag]` pair owned elsewhere, presumed to have unit length.
    #[inline]
    pub fn from_coeffs(coeffs: &'a [T; 2]) -> Self {
        Self {
            z: coeffs,
            _scalar: PhantomData,
        }
    }

    /// Wrap a buffer holding exactly one `[real, imag]` pair.
    pub fn try_from_slice(data: &'a [T]) -> Result<Self, SO2Error> {
        let got = data.len();
        let coeffs: &'a [T; 2] = data
            .try_into()
            .map_err(|_| SO2Error::WrongBufferSize { expected: 2, got })?;
        Ok(Self::from_coeffs(coeffs))
    }
}

impl<T: Scalar> SO2Group<T> {
    /// Borrow this rotation as a mutable view.
    #[inline]
    pub fn as_map(&mut self) -> SO2Map<'_, T> {
        SO2Map::from_coeffs(&mut self.z)
    }
}
