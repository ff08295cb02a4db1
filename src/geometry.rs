//! Small geometric helpers built on the matrix routines.

use crate::linalg::LinalgError;
use crate::matrix::dot;
use crate::settings::Tolerances;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Upper arm length (cm) of the reference two-link arm.
pub const ARM_L1: f64 = 20.0;
/// Forearm length (cm) of the reference two-link arm.
pub const ARM_L2: f64 = 15.0;

/// Cross product `u × v` of two 3-vectors.
///
/// ```
/// use denselab::geometry::cross;
/// assert_eq!(cross(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), [0.0, 0.0, 1.0]);
/// ```
pub fn cross<T: FloatScalar>(u: &[T; 3], v: &[T; 3]) -> [T; 3] {
    [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ]
}

/// Volume of the tetrahedron spanned by three edge vectors from a common
/// vertex, `√det(G) / 6` with `G` the Gram matrix `Gᵢⱼ = vᵢ·vⱼ`.
///
/// The vectors may live in any dimension ≥ 3. A Gram determinant that
/// rounds below zero is clamped according to `tol.max_negative`.
///
/// # Errors
///
/// [`LinalgError::Shape`] (`1 x len`) if the lengths differ or are below 3;
/// [`LinalgError::NegativeRounding`] under the strict profile.
///
/// ```
/// use denselab::Tolerances;
/// use denselab::geometry::tetrahedron_volume;
///
/// let v = tetrahedron_volume(
///     &[1.0_f64, 0.0, 0.0],
///     &[0.0, 1.0, 0.0],
///     &[0.0, 0.0, 1.0],
///     &Tolerances::default(),
/// )
/// .unwrap();
/// assert!((v - 1.0 / 6.0).abs() < 1e-15);
/// ```
pub fn tetrahedron_volume<T: FloatScalar>(
    v1: &[T],
    v2: &[T],
    v3: &[T],
    tol: &Tolerances<T>,
) -> Result<T, LinalgError> {
    let len = v1.len();
    if len < 3 || v2.len() != len || v3.len() != len {
        let bad = if len < 3 { len } else { v2.len().max(v3.len()) };
        return Err(LinalgError::Shape { nrows: 1, ncols: bad });
    }

    let vs = [v1, v2, v3];
    let gram = Matrix::from_fn(3, 3, |i, j| dot(vs[i], vs[j]));
    let det = tol.clamp_non_negative(det3(&gram), "Gram determinant")?;

    let six = T::from(6.0).unwrap_or_else(T::one);
    Ok(det.sqrt() / six)
}

/// Cofactor expansion along the first row. Stays finite for singular input,
/// where pivoted elimination would divide by a zero pivot.
fn det3<T: FloatScalar>(m: &Matrix<T>) -> T {
    m[(0, 0)] * (m[(1, 1)] * m[(2, 2)] - m[(1, 2)] * m[(2, 1)])
        - m[(0, 1)] * (m[(1, 0)] * m[(2, 2)] - m[(1, 2)] * m[(2, 0)])
        + m[(0, 2)] * (m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)])
}

/// End-effector position `(x, y)` of a planar two-link arm.
///
/// `x = l1·cos θ1 + l2·cos(θ1 + θ2)` and `y = l1·sin θ1 + l2·sin(θ1 + θ2)`,
/// with both joint angles in degrees. [`ARM_L1`] and [`ARM_L2`] are the
/// reference link lengths.
///
/// # Errors
///
/// [`LinalgError::OutOfRange`] if either angle is outside `[0, 360]` or NaN.
///
/// ```
/// use denselab::geometry::{end_effector, ARM_L1, ARM_L2};
///
/// let (x, y) = end_effector(90.0, 0.0, ARM_L1, ARM_L2).unwrap();
/// assert!(x.abs() < 1e-12);
/// assert!((y - 35.0).abs() < 1e-12);
/// ```
pub fn end_effector<T: FloatScalar>(
    theta1_deg: T,
    theta2_deg: T,
    l1: T,
    l2: T,
) -> Result<(T, T), LinalgError> {
    let full_turn = T::from(360.0).unwrap_or_else(T::infinity);
    let in_range = |deg: T| deg >= T::zero() && deg <= full_turn;
    if !in_range(theta1_deg) {
        return Err(LinalgError::OutOfRange { name: "theta1" });
    }
    if !in_range(theta2_deg) {
        return Err(LinalgError::OutOfRange { name: "theta2" });
    }

    let t1 = theta1_deg.to_radians();
    let t12 = t1 + theta2_deg.to_radians();
    Ok((l1 * t1.cos() + l2 * t12.cos(), l1 * t1.sin() + l2 * t12.sin()))
}
