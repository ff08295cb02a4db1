use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::traits::LinalgScalar;
use crate::Matrix;

/// Solve `U·x = b` for upper triangular `U` by back-substitution.
///
/// The structure is validated before solving: every entry below the diagonal
/// must be exactly zero and no diagonal entry may be zero.
///
/// # Errors
///
/// - [`LinalgError::Shape`] if `u` is not square or `b.len() != n`
///   (reported with the shape of `u`).
/// - [`LinalgError::NotUpperTriangular`] if a sub-diagonal entry is non-zero.
/// - [`LinalgError::Singular`] if a diagonal entry is zero.
///
/// # Example
///
/// ```
/// use denselab::Matrix;
/// use denselab::linalg::back_substitute;
///
/// let u = Matrix::new([[2.0_f64, 1.0], [0.0, 4.0]]);
/// let x = back_substitute(&u, &[5.0, 8.0]).unwrap();
/// assert_eq!(x, vec![1.5, 2.0]);
/// ```
pub fn back_substitute<T: LinalgScalar>(u: &Matrix<T>, b: &[T]) -> Result<Vec<T>, LinalgError> {
    let n = u.require_square()?;
    if b.len() != n {
        return Err(LinalgError::Shape {
            nrows: u.nrows(),
            ncols: u.ncols(),
        });
    }
    if !u.is_upper_triangular() {
        return Err(LinalgError::NotUpperTriangular);
    }
    if (0..n).any(|i| u[(i, i)] == T::zero()) {
        return Err(LinalgError::Singular);
    }

    let mut x = vec![T::zero(); n];
    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum = sum + u[(i, j)] * x[j];
        }
        x[i] = (b[i] - sum) / u[(i, i)];
    }
    Ok(x)
}
