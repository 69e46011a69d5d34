//! 2D vector types (single and double precision).

define_vector_type!(
    /// 2D vector (single precision), a point or direction in the plane.
    Vec2F32,
    glam::Vec2,
    f32,
    [x, y]
);

define_vector_type!(
    /// 2D vector (double precision), a point or direction in the plane.
    Vec2F64,
    glam::DVec2,
    f64,
    [x, y]
);
