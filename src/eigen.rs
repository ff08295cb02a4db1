//! Rank-k eigen truncation.
//!
//! `A' = P·D'·P⁻¹`, where `P` holds the eigenvectors of `A` and `D'` keeps
//! only the k eigenvalues of largest modulus. The eigen-decomposition itself
//! comes from an [`EigenSolver`]; with the `eigen` feature (on by default)
//! [`FaerEigen`] delegates to `faer`.
//!
//! Real input can have complex eigenpairs, so the reconstruction is done in
//! complex arithmetic. [`truncate`] returns the real part and
//! [`truncate_complex`] the full result.

use alloc::vec::Vec;
use core::cmp::Ordering;

use num_complex::Complex;

use crate::linalg::{invert_with, LinalgError};
use crate::settings::Tolerances;
use crate::traits::{FloatScalar, LinalgScalar};
use crate::Matrix;

/// Eigenvalues and eigenvectors of a square real matrix.
///
/// Column `i` of `vectors` is the eigenvector for `values[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenDecomposition<T> {
    pub values: Vec<Complex<T>>,
    pub vectors: Matrix<Complex<T>>,
}

/// Source of eigen-decompositions for [`truncate_with`].
///
/// Implementations must return `n` eigenvalues and an `n x n` eigenvector
/// matrix for an `n x n` input, or [`LinalgError::ConvergenceFailure`].
pub trait EigenSolver<T: FloatScalar> {
    fn decompose(&self, a: &Matrix<T>) -> Result<EigenDecomposition<T>, LinalgError>;
}

/// Dense real eigen-decomposition from `faer`.
#[cfg(feature = "eigen")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FaerEigen;

#[cfg(feature = "eigen")]
macro_rules! impl_faer_eigen {
    ($($t:ty),*) => {
        $(
            impl EigenSolver<$t> for FaerEigen {
                fn decompose(&self, a: &Matrix<$t>) -> Result<EigenDecomposition<$t>, LinalgError> {
                    let n = a.require_square()?;
                    let mat = faer::Mat::<$t>::from_fn(n, n, |i, j| a[(i, j)]);
                    let evd = mat.eigen().map_err(|_| LinalgError::ConvergenceFailure)?;

                    let values = evd
                        .S()
                        .column_vector()
                        .iter()
                        .map(|z| Complex::new(z.re, z.im))
                        .collect();
                    let u = evd.U();
                    let vectors = Matrix::from_fn(n, n, |i, j| {
                        let z = &u[(i, j)];
                        Complex::new(z.re, z.im)
                    });
                    Ok(EigenDecomposition { values, vectors })
                }
            }
        )*
    };
}

#[cfg(feature = "eigen")]
impl_faer_eigen!(f32, f64);

/// Keep the k eigenvalues of largest modulus and rebuild the matrix.
///
/// Uses [`FaerEigen`] and default [`Tolerances`]. `k = n` reproduces `A` up to
/// rounding; `k = 0` gives the zero matrix.
///
/// # Errors
///
/// - [`LinalgError::Shape`] if `a` is not square.
/// - [`LinalgError::OutOfRange`] if `k > n`.
/// - [`LinalgError::ConvergenceFailure`] if the eigen solver fails.
/// - [`LinalgError::Singular`] if the eigenvector matrix cannot be inverted
///   (`A` is not diagonalizable).
///
/// # Example
///
/// ```
/// use denselab::Matrix;
/// use denselab::eigen::truncate;
///
/// let a = Matrix::new([[4.0_f64, 1.0], [2.0, 3.0]]); // eigenvalues 5 and 2
/// let a1 = truncate(&a, 1).unwrap();
///
/// // Rank one, and only the eigenvalue 5 survives
/// let tr = a1[(0, 0)] + a1[(1, 1)];
/// assert!((tr - 5.0).abs() < 1e-10);
/// let det = a1[(0, 0)] * a1[(1, 1)] - a1[(0, 1)] * a1[(1, 0)];
/// assert!(det.abs() < 1e-10);
/// ```
#[cfg(feature = "eigen")]
pub fn truncate<T>(a: &Matrix<T>, k: usize) -> Result<Matrix<T>, LinalgError>
where
    T: FloatScalar,
    FaerEigen: EigenSolver<T>,
    Tolerances<T>: Default,
{
    truncate_with(a, k, &FaerEigen, &Tolerances::default())
}

/// [`truncate`] with an explicit solver and tolerances, returning the real part.
pub fn truncate_with<T, S>(
    a: &Matrix<T>,
    k: usize,
    solver: &S,
    tol: &Tolerances<T>,
) -> Result<Matrix<T>, LinalgError>
where
    T: FloatScalar,
    S: EigenSolver<T> + ?Sized,
{
    let full = truncate_complex(a, k, solver, tol)?;

    let discarded = full
        .as_slice()
        .iter()
        .fold(T::zero(), |m, z| m.max(z.im.abs()));
    log::debug!(
        target: "denselab",
        "eigen truncation to rank {}: largest discarded imaginary part {:?}",
        k,
        discarded
    );

    Ok(full.re())
}

/// Complex reconstruction `P·D'·P⁻¹` before the real part is taken.
///
/// For real input whose kept eigenvalues are closed under conjugation the
/// imaginary part is rounding noise. Splitting a conjugate pair leaves a
/// genuinely complex result.
pub fn truncate_complex<T, S>(
    a: &Matrix<T>,
    k: usize,
    solver: &S,
    tol: &Tolerances<T>,
) -> Result<Matrix<Complex<T>>, LinalgError>
where
    T: FloatScalar,
    S: EigenSolver<T> + ?Sized,
{
    let n = a.require_square()?;
    if k > n {
        return Err(LinalgError::OutOfRange { name: "k" });
    }

    let EigenDecomposition { values, vectors } = solver.decompose(a)?;
    if values.len() != n {
        return Err(LinalgError::ConvergenceFailure);
    }
    vectors.require_shape(n, n)?;

    let mut d = Matrix::<Complex<T>>::zeros(n, n);
    for i in kept_indices(&values, k) {
        d[(i, i)] = values[i];
    }

    let p_inv = invert_with(&vectors, tol)?;
    vectors.checked_mul(&d)?.checked_mul(&p_inv)
}

/// Indices of the `k` eigenvalues of largest modulus.
///
/// Stable ascending sort by modulus, then the last `k`; equal moduli keep the
/// solver's order, so among ties the later ones are kept.
fn kept_indices<T: FloatScalar>(values: &[Complex<T>], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&i, &j| {
        values[i]
            .modulus()
            .partial_cmp(&values[j].modulus())
            .unwrap_or(Ordering::Equal)
    });
    order.split_off(values.len() - k)
}
