#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Kornia SO(2)
//!
//! This crate implements the Lie group SO(2) of planar rotations, stored as a
//! unit complex number, together with its Lie algebra so(2) and the exp, log,
//! hat and vee maps between them.
//!
//! The rotation type is generic over the scalar precision ([`SO2F32`],
//! [`SO2F64`]) and over where the complex number is stored: inline
//! ([`SO2`]) or borrowed from external memory ([`SO2Map`], [`SO2MapRef`]).
//!
//! ## Example
//!
//! ```rust
//! use kornia_so2::{SO2F32, Vec2F32};
//!
//! // Create a rotation of 90 degrees
//! let rotation = SO2F32::exp(std::f32::consts::FRAC_PI_2);
//!
//! // Apply the rotation to a point
//! let rotated = rotation * Vec2F32::new(1.0, 0.0);
//! assert!((rotated.y - 1.0).abs() < 1e-6);
//!
//! // Compose and go back to the tangent space
//! let half_turn = rotation * rotation;
//! assert!((half_turn.log().abs() - std::f32::consts::PI).abs() < 1e-6);
//! ```

/// Errors returned by the checked constructors.
pub mod error;

/// Scalar precision selection.
pub mod scalar;

/// Special Orthogonal group SO(2) for 2D rotations.
pub mod so2;

mod matrix;
mod vector;

pub use error::SO2Error;
pub use matrix::{Mat2F32, Mat2F64};
pub use scalar::Scalar;
pub use so2::{SO2Group, SO2Map, SO2MapRef, Storage, StorageMut, SO2, SO2F32, SO2F64};
pub use vector::{Vec2F32, Vec2F64};
