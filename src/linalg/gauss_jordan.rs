use num_traits::Float;

use crate::linalg::LinalgError;
use crate::settings::Tolerances;
use crate::traits::{LinalgScalar, MatrixMut};
use crate::Matrix;

/// Gauss-Jordan elimination with partial pivoting, in place.
///
/// `a` is an `n x m` matrix with `m >= n` (typically the augmented `[A | I]`).
/// For each pivot column `i < n` the row with the largest modulus among rows
/// `>= i` is swapped into position `i`, the pivot row is scaled so the pivot
/// becomes one, and column `i` is eliminated from every other row. On return
/// the left `n x n` block is the identity.
///
/// Returns [`LinalgError::Shape`] if `a` has fewer columns than rows and
/// [`LinalgError::Singular`] if a pivot modulus is below `pivot_tol`.
pub fn gauss_jordan_in_place<T: LinalgScalar>(
    a: &mut impl MatrixMut<T>,
    pivot_tol: T::Real,
) -> Result<(), LinalgError> {
    let n = a.nrows();
    let m = a.ncols();
    if m < n {
        return Err(LinalgError::Shape { nrows: n, ncols: m });
    }

    for i in 0..n {
        // Partial pivoting: largest modulus in column i among rows i..n
        let mut max_row = i;
        let mut max_val = a.get(i, i).modulus();
        for row in (i + 1)..n {
            let val = a.get(row, i).modulus();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }
        a.swap_rows(i, max_row);

        if max_val < pivot_tol {
            return Err(LinalgError::Singular);
        }

        let inv_pivot = T::one() / *a.get(i, i);
        for j in 0..m {
            *a.get_mut(i, j) = *a.get(i, j) * inv_pivot;
        }

        for row in 0..n {
            if row == i {
                continue;
            }
            let factor = *a.get(row, i);
            if factor == T::zero() {
                continue;
            }
            for j in 0..m {
                *a.get_mut(row, j) = *a.get(row, j) - factor * *a.get(i, j);
            }
        }
    }

    Ok(())
}

/// Inverse of a square matrix by Gauss-Jordan elimination on `[A | I]`.
///
/// Uses the default pivot tolerance (`1e-10` for `f64`). Works for real and
/// complex elements. The input is not modified.
///
/// # Errors
///
/// [`LinalgError::Shape`] if `a` is not square, [`LinalgError::Singular`] if
/// no usable pivot is found.
///
/// # Example
///
/// ```
/// use denselab::Matrix;
/// use denselab::linalg::invert;
///
/// let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
/// let a_inv = invert(&a).unwrap();
/// assert!((a_inv[(0, 0)] - 0.6).abs() < 1e-12);
/// assert!((a_inv[(0, 1)] + 0.7).abs() < 1e-12);
///
/// let id = &a * &a_inv;
/// assert!(id.approx_eq(&Matrix::eye(2), 1e-12));
/// ```
pub fn invert<T>(a: &Matrix<T>) -> Result<Matrix<T>, LinalgError>
where
    T: LinalgScalar,
    Tolerances<T::Real>: Default,
{
    invert_with(a, &Tolerances::default())
}

/// [`invert`] with an explicit pivot tolerance.
pub fn invert_with<T: LinalgScalar>(
    a: &Matrix<T>,
    tol: &Tolerances<T::Real>,
) -> Result<Matrix<T>, LinalgError> {
    let n = a.require_square()?;

    let mut aug = Matrix::from_fn(n, 2 * n, |i, j| {
        if j < n {
            a[(i, j)]
        } else if j - n == i {
            T::one()
        } else {
            T::zero()
        }
    });

    gauss_jordan_in_place(&mut aug, tol.pivot)?;

    Ok(Matrix::from_fn(n, n, |i, j| aug[(i, j + n)]))
}

/// Numerical rank: the number of pivots with modulus above `tol` found by
/// partial-pivoting row reduction.
///
/// ```
/// use denselab::matrix::outer;
/// use denselab::linalg::rank;
///
/// let a = outer(&[1.0_f64, 2.0, 3.0], &[4.0, 5.0, 6.0]);
/// assert_eq!(rank(&a, 1e-10), 1);
/// ```
pub fn rank<T: LinalgScalar>(a: &Matrix<T>, tol: T::Real) -> usize {
    let mut work = a.clone();
    let (m, n) = work.shape();
    let mut rank = 0;

    for col in 0..n {
        if rank == m {
            break;
        }
        let mut max_row = rank;
        let mut max_val = work[(rank, col)].modulus();
        for row in (rank + 1)..m {
            let val = work[(row, col)].modulus();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }
        if max_val <= tol || max_val.is_nan() {
            continue;
        }
        work.swap_rows(rank, max_row);

        let pivot = work[(rank, col)];
        for row in (rank + 1)..m {
            let factor = work[(row, col)] / pivot;
            for j in col..n {
                work[(row, j)] = work[(row, j)] - factor * work[(rank, j)];
            }
        }
        rank += 1;
    }

    rank
}

impl<T> Matrix<T>
where
    T: LinalgScalar,
    Tolerances<T::Real>: Default,
{
    /// Matrix inverse; see [`invert`].
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        invert(self)
    }
}
