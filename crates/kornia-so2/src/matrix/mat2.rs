//! 2x2 matrix types (single and double precision).

use crate::{Vec2F32, Vec2F64};

define_matrix_type!(
    /// 2x2 matrix (single precision).
    Mat2F32,
    glam::Mat2,
    f32,
    Vec2F32,
    glam::Vec2
);

define_matrix_type!(
    /// 2x2 matrix (double precision).
    Mat2F64,
    glam::DMat2,
    f64,
    Vec2F64,
    glam::DVec2
);
