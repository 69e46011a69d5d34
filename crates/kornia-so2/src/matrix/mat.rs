//! Macro to define a 2x2 matrix type.
//!
//! The generated types are thin `#[repr(transparent)]` newtypes over the
//! corresponding `glam` matrix type and delegate arithmetic to `glam`.
//!
//! # Arguments
//!
//! * `name`        - The name of the matrix type.
//! * `glam_type`   - The underlying `glam` matrix type.
//! * `scalar`      - The scalar type.
//! * `vec_type`    - The public vector type used for mat-vec mul.
//! * `glam_vec`    - The underlying `glam` vector type.
//!
macro_rules! define_matrix_type {
    (
        $(#[$meta:meta])*
        $name:ident,
        $glam_type:ty,
        $scalar:ty,
        $vec_type:ty,
        $glam_vec:ty
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub $glam_type);

        impl $name {
            /// Identity matrix.
            pub const IDENTITY: Self = Self(<$glam_type>::IDENTITY);

            /// Create a new matrix from a column-major array.
            #[inline]
            pub fn from_cols_array(arr: &[$scalar; 4]) -> Self {
                Self(<$glam_type>::from_cols_array(arr))
            }

            /// Create a new matrix from a row-major array `[m00, m01, m10, m11]`.
            #[inline]
            pub fn from_rows_array(arr: &[$scalar; 4]) -> Self {
                Self(<$glam_type>::from_cols_array(&[arr[0], arr[2], arr[1], arr[3]]))
            }

            /// Element at `row`, `col`.
            ///
            /// # Panics
            ///
            /// Panics if `row` or `col` is greater than 1.
            #[inline]
            pub fn get(&self, row: usize, col: usize) -> $scalar {
                self.0.col(col)[row]
            }
        }

        impl std::ops::Deref for $name {
            type Target = $glam_type;

            #[inline]
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        // Matrix-vector multiplication.
        impl std::ops::Mul<$vec_type> for $name {
            type Output = $vec_type;

            #[inline]
            fn mul(self, rhs: $vec_type) -> Self::Output {
                <$vec_type>::from(self.0 * <$glam_vec>::from(rhs))
            }
        }
    };
}
