//! Matrix types module.
//!
//! - Mat2F32: 2x2 matrix (single precision)
//! - Mat2F64: 2x2 matrix (double precision)

#[macro_use]
mod mat;

mod mat2;

pub use mat2::{Mat2F32, Mat2F64};
