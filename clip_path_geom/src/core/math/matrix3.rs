use super::{base_math::to_radians, vec2, Vector2};
use crate::core::{errors::GeometryError, traits::Real};
use std::{fmt, ops};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 3x3 matrix used for 2D affine transforms.
///
/// Coefficients are stored row-major:
///
/// ```text
/// [ m[0], m[1], m[2] ]
/// [ m[3], m[4], m[5] ]
/// [ m[6], m[7], m[8] ]
/// ```
///
/// Points are treated as column vectors with an implicit `w = 1`, so `m[2]` and `m[5]` hold the
/// translation. `a * b` applies `b` first and then `a`.
///
/// # Examples
///
/// ```
/// # use clip_path_geom::core::math::*;
/// # use clip_path_geom::core::traits::*;
/// let m = Matrix3::translate(10.0, 20.0) * Matrix3::scale(2.0, 2.0);
/// let p = m.transform_point(Vector2::new(5.0, 5.0));
/// assert!(p.fuzzy_eq(Vector2::new(20.0, 30.0)));
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix3<T = f64> {
    pub m: [T; 9],
}

impl<T> Default for Matrix3<T>
where
    T: Real,
{
    #[inline]
    fn default() -> Self {
        Self::identity()
    }
}

impl<T> Matrix3<T>
where
    T: Real,
{
    /// Create a matrix from its nine coefficients given row by row.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T, m20: T, m21: T, m22: T) -> Self {
        Matrix3 {
            m: [m00, m01, m02, m10, m11, m12, m20, m21, m22],
        }
    }

    #[inline]
    pub fn from_array(m: [T; 9]) -> Self {
        Matrix3 { m }
    }

    #[inline]
    pub fn to_array(&self) -> [T; 9] {
        self.m
    }

    #[inline]
    pub fn identity() -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(o, z, z, z, o, z, z, z, o)
    }

    #[inline]
    pub fn translate(tx: T, ty: T) -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(o, z, tx, z, o, ty, z, z, o)
    }

    #[inline]
    pub fn scale(sx: T, sy: T) -> Self {
        let (o, z) = (T::one(), T::zero());
        Self::new(sx, z, z, z, sy, z, z, z, o)
    }

    /// Counter clockwise rotation about the origin by `angle` radians.
    #[inline]
    pub fn rotate(angle: T) -> Self {
        let (o, z) = (T::one(), T::zero());
        let (s, c) = angle.sin_cos();
        Self::new(c, -s, z, s, c, z, z, z, o)
    }

    /// Same as [Matrix3::rotate] with the angle given in degrees.
    #[inline]
    pub fn rotate_degrees(degrees: T) -> Self {
        Self::rotate(to_radians(degrees))
    }

    /// Matrix product `self * other` (the transform `other` followed by `self`).
    pub fn multiply(&self, other: &Self) -> Self {
        let a = &self.m;
        let b = &other.m;
        let mut out = [T::zero(); 9];
        for row in 0..3 {
            for col in 0..3 {
                out[row * 3 + col] = a[row * 3] * b[col]
                    + a[row * 3 + 1] * b[3 + col]
                    + a[row * 3 + 2] * b[6 + col];
            }
        }

        Matrix3 { m: out }
    }

    /// Apply the affine part of the transform to `point` (bottom row is ignored).
    #[inline]
    pub fn transform_point(&self, point: Vector2<T>) -> Vector2<T> {
        let m = &self.m;
        vec2(
            m[0] * point.x + m[1] * point.y + m[2],
            m[3] * point.x + m[4] * point.y + m[5],
        )
    }

    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0] * (m[4] * m[8] - m[5] * m[7]) - m[1] * (m[3] * m[8] - m[5] * m[6])
            + m[2] * (m[3] * m[7] - m[4] * m[6])
    }

    /// Inverse of the matrix, or [GeometryError::SingularMatrix] if the determinant is zero or not
    /// finite.
    pub fn try_inverse(&self) -> Result<Self, GeometryError> {
        let det = self.determinant();
        let det_is_finite = det.to_f64().is_some_and(f64::is_finite);
        if det == T::zero() || !det_is_finite {
            return Err(GeometryError::singular_matrix(det));
        }

        let m = &self.m;
        // transposed cofactor matrix (adjugate)
        let adj = [
            m[4] * m[8] - m[5] * m[7],
            m[2] * m[7] - m[1] * m[8],
            m[1] * m[5] - m[2] * m[4],
            m[5] * m[6] - m[3] * m[8],
            m[0] * m[8] - m[2] * m[6],
            m[2] * m[3] - m[0] * m[5],
            m[3] * m[7] - m[4] * m[6],
            m[1] * m[6] - m[0] * m[7],
            m[0] * m[4] - m[1] * m[3],
        ];

        let det_inv = T::one() / det;
        Ok(Matrix3 {
            m: adj.map(|c| c * det_inv),
        })
    }

    /// Inverse of the matrix.
    ///
    /// A singular matrix has no inverse, in that case a warning is logged and the identity matrix
    /// is returned. Use [Matrix3::try_inverse] to detect the case.
    pub fn inverse(&self) -> Self {
        match self.try_inverse() {
            Ok(inv) => inv,
            Err(e) => {
                log::warn!("{e}, using identity as inverse");
                Self::identity()
            }
        }
    }

    /// Fuzzy compare all coefficients using `fuzzy_epsilon`.
    pub fn fuzzy_eq_eps(&self, other: &Self, fuzzy_epsilon: T) -> bool {
        self.m
            .iter()
            .zip(other.m.iter())
            .all(|(a, b)| a.fuzzy_eq_eps(*b, fuzzy_epsilon))
    }

    #[inline]
    pub fn fuzzy_eq(&self, other: &Self) -> bool {
        self.fuzzy_eq_eps(other, T::fuzzy_epsilon())
    }
}

impl<T> fmt::Display for Matrix3<T>
where
    T: Real,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix3[")?;
        for (i, c) in self.m.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, "]")
    }
}

impl<T: Real> ops::Mul<Matrix3<T>> for Matrix3<T> {
    type Output = Matrix3<T>;
    fn mul(self, rhs: Matrix3<T>) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl<T: Real> ops::Mul<&Matrix3<T>> for &Matrix3<T> {
    type Output = Matrix3<T>;
    fn mul(self, rhs: &Matrix3<T>) -> Self::Output {
        self.multiply(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::FuzzyEq;

    #[test]
    fn identity_leaves_point() {
        let p = Matrix3::identity().transform_point(vec2(10.0, 20.0));
        assert_eq!(p, vec2(10.0, 20.0));
        assert_eq!(Matrix3::<f64>::default(), Matrix3::identity());
    }

    #[test]
    fn basic_transforms() {
        let p = vec2(10.0, 10.0);
        assert!(Matrix3::translate(10.0, 5.0)
            .transform_point(p)
            .fuzzy_eq(vec2(20.0, 15.0)));
        assert!(Matrix3::scale(2.0, 3.0)
            .transform_point(p)
            .fuzzy_eq(vec2(20.0, 30.0)));
        assert!(Matrix3::rotate(std::f64::consts::FRAC_PI_2)
            .transform_point(vec2(10.0, 0.0))
            .fuzzy_eq(vec2(0.0, 10.0)));
    }

    #[test]
    fn multiply_applies_right_first() {
        let t = Matrix3::translate(10.0, 20.0);
        let s = Matrix3::scale(2.0, 2.0);
        assert!((t * s)
            .transform_point(vec2(5.0, 5.0))
            .fuzzy_eq(vec2(20.0, 30.0)));
        assert!((&s * &t)
            .transform_point(vec2(5.0, 5.0))
            .fuzzy_eq(vec2(30.0, 50.0)));
    }

    #[test]
    fn inverse_round_trip() {
        let m = Matrix3::translate(3.0, -4.0) * Matrix3::rotate(0.7) * Matrix3::scale(2.0, 0.5);
        let inv = m.inverse();
        assert!((m * inv).fuzzy_eq(&Matrix3::identity()));
        assert!(Matrix3::translate(10.0, 20.0)
            .inverse()
            .transform_point(vec2(20.0, 30.0))
            .fuzzy_eq(vec2(10.0, 10.0)));
        assert!(m.determinant().fuzzy_eq(1.0));
    }

    #[test]
    fn singular_inverse() {
        let m = Matrix3::scale(0.0, 1.0);
        assert!(matches!(
            m.try_inverse(),
            Err(GeometryError::SingularMatrix { .. })
        ));
        assert_eq!(m.inverse(), Matrix3::identity());
    }

    #[test]
    fn display() {
        assert_eq!(
            Matrix3::<f64>::identity().to_string(),
            "Matrix3[1, 0, 0, 0, 1, 0, 0, 0, 1]"
        );
    }
}
