use num_traits::ToPrimitive;
use thiserror::Error;

/// Geometric degeneracy detected by one of the fallible math operations.
///
/// Most of the crate never surfaces these: [Matrix3::inverse](crate::core::math::Matrix3::inverse)
/// recovers with the identity matrix and the boolean pipeline drops what it cannot stitch. The
/// `try_*` variants return this error for callers that want to handle the case themselves.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeometryError {
    /// A vector was divided by a scalar whose magnitude is below the fuzzy epsilon.
    #[error("vector divided by near-zero scalar {divisor}")]
    DivisionByZero {
        /// The rejected divisor.
        divisor: f64,
    },
    /// An affine matrix with a zero (or non-finite) determinant was inverted.
    #[error("matrix is singular (determinant = {determinant})")]
    SingularMatrix {
        /// The determinant of the matrix.
        determinant: f64,
    },
}

impl GeometryError {
    pub(crate) fn division_by_zero<T: ToPrimitive>(divisor: T) -> Self {
        GeometryError::DivisionByZero {
            divisor: divisor.to_f64().unwrap_or(f64::NAN),
        }
    }

    pub(crate) fn singular_matrix<T: ToPrimitive>(determinant: T) -> Self {
        GeometryError::SingularMatrix {
            determinant: determinant.to_f64().unwrap_or(f64::NAN),
        }
    }
}
