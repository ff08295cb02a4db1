//! Condition numbers and the Wilkinson bidiagonal test matrix.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::linalg::{invert_with, LinalgError};
use crate::settings::Tolerances;
use crate::traits::{FloatScalar, LinalgScalar};
use crate::Matrix;

/// Wilkinson's upper bidiagonal matrix of order `n`: diagonal
/// `n, n-1, …, 1` and every superdiagonal entry equal to `n`.
///
/// Its eigenvalues are the diagonal entries, yet they are extremely
/// sensitive to perturbation, and its condition number grows
/// factorially with `n`.
///
/// ```
/// use denselab::conditioning::wilkinson_bidiagonal;
///
/// let w = wilkinson_bidiagonal::<f64>(3);
/// assert_eq!(w.row(0), &[3.0, 3.0, 0.0]);
/// assert_eq!(w.row(2), &[0.0, 0.0, 1.0]);
/// ```
pub fn wilkinson_bidiagonal<T: FloatScalar>(n: usize) -> Matrix<T> {
    let order = T::from(n).unwrap_or_else(T::zero);
    Matrix::from_fn(n, n, |i, j| {
        if i == j {
            order - T::from(i).unwrap_or_else(T::zero)
        } else if j == i + 1 {
            order
        } else {
            T::zero()
        }
    })
}

/// Condition number `‖A‖₁·‖A⁻¹‖₁`, inverting with Gauss-Jordan.
///
/// # Errors
///
/// [`LinalgError::Shape`] if `a` is not square, [`LinalgError::Singular`] if
/// it cannot be inverted.
///
/// ```
/// use denselab::Matrix;
/// use denselab::conditioning::condition_number_one;
///
/// let a = Matrix::new([[2.0_f64, 2.0], [0.0, 1.0]]);
/// assert!((condition_number_one(&a).unwrap() - 6.0).abs() < 1e-12);
/// ```
pub fn condition_number_one<T>(a: &Matrix<T>) -> Result<T::Real, LinalgError>
where
    T: LinalgScalar,
    Tolerances<T::Real>: Default,
{
    let inv = invert_with(a, &Tolerances::default())?;
    Ok(a.norm_one() * inv.norm_one())
}

/// Condition number `‖A‖∞·‖A⁻¹‖∞`, inverting with Gauss-Jordan.
pub fn condition_number_inf<T>(a: &Matrix<T>) -> Result<T::Real, LinalgError>
where
    T: LinalgScalar,
    Tolerances<T::Real>: Default,
{
    let inv = invert_with(a, &Tolerances::default())?;
    Ok(a.norm_inf() * inv.norm_inf())
}

/// `A + scale·E` with `E` filled from a standard normal distribution.
///
/// Shows how sensitive a matrix's eigenvalues or inverse are to
/// small entrywise noise.
///
/// ```
/// use denselab::conditioning::{perturbed, wilkinson_bidiagonal};
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let w = wilkinson_bidiagonal::<f64>(5);
/// let p = perturbed(&w, 1e-10, &mut rng);
/// assert!(p.approx_eq(&w, 1e-8));
/// assert_ne!(p, w);
/// ```
pub fn perturbed<T, R>(a: &Matrix<T>, scale: T, rng: &mut R) -> Matrix<T>
where
    T: FloatScalar,
    R: Rng + ?Sized,
    StandardNormal: Distribution<T>,
{
    let (m, n) = a.shape();
    let mut out = a.clone();
    for i in 0..m {
        for j in 0..n {
            let e: T = rng.sample(StandardNormal);
            out[(i, j)] = out[(i, j)] + scale * e;
        }
    }
    out
}
