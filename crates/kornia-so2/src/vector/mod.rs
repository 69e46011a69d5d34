//! Vector types module.
//!
//! - Vec2F32: 2D vector (single precision)
//! - Vec2F64: 2D vector (double precision)

#[macro_use]
mod vec;

mod vec2;

pub use vec2::{Vec2F32, Vec2F64};
