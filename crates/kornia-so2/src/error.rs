//! Errors returned by the checked constructors.

/// Error type for the fallible SO(2) constructors and views.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SO2Error {
    /// The complex number is too close to zero to be normalized.
    #[error("complex number cannot be normalized: squared norm {norm_squared} is below epsilon")]
    ZeroComplex {
        /// Squared norm of the rejected pair.
        norm_squared: f64,
    },

    /// The complex number has an infinite or NaN component.
    #[error("complex number has a non-finite component: ({real}, {imag})")]
    NonFinite {
        /// Real part of the rejected pair.
        real: f64,
        /// Imaginary part of the rejected pair.
        imag: f64,
    },

    /// The matrix is not an element of so(2).
    #[error("matrix is not skew-symmetric: |M(0,1) + M(1,0)| = {residual}")]
    NotSkewSymmetric {
        /// Absolute value of `M(0,1) + M(1,0)`.
        residual: f64,
    },

    /// The external buffer does not hold exactly one complex number.
    #[error("buffer has wrong size: expected {expected}, got {got}")]
    WrongBufferSize {
        /// Number of scalars required.
        expected: usize,
        /// Number of scalars provided.
        got: usize,
    },
}
