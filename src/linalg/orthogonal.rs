use crate::traits::FloatScalar;
use crate::Matrix;

/// Orthogonality by definition: `AᵀA ≈ I` entrywise within `tol`.
///
/// Only square matrices can be orthogonal; any other shape returns `false`.
///
/// ```
/// use denselab::Matrix;
/// use denselab::linalg::is_orthogonal;
///
/// let rot = Matrix::new([[0.0_f64, -1.0], [1.0, 0.0]]);
/// assert!(is_orthogonal(&rot, 1e-12));
/// assert!(!is_orthogonal(&Matrix::new([[1.0_f64, 1.0], [0.0, 1.0]]), 1e-5));
/// ```
pub fn is_orthogonal<T: FloatScalar>(a: &Matrix<T>, tol: T) -> bool {
    if !a.is_square() {
        return false;
    }
    let ata = &a.transpose() * a;
    ata.approx_eq(&Matrix::eye(a.ncols()), tol)
}

/// Column-by-column check: every column has unit Euclidean norm and every
/// pair of distinct columns has a dot product of zero, both within `tol`.
///
/// Accepts rectangular input (e.g. the `Q` of a thin QR decomposition).
pub fn has_orthonormal_columns<T: FloatScalar>(a: &Matrix<T>, tol: T) -> bool {
    let n = a.ncols();
    let cols: alloc::vec::Vec<_> = (0..n).map(|j| a.col(j)).collect();
    for i in 0..n {
        let norm = crate::matrix::dot(&cols[i], &cols[i]).sqrt();
        if (norm - T::one()).abs() > tol {
            return false;
        }
        for j in (i + 1)..n {
            if crate::matrix::dot(&cols[i], &cols[j]).abs() > tol {
                return false;
            }
        }
    }
    true
}
