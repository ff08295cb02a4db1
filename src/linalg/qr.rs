use crate::traits::FloatScalar;
use crate::Matrix;

/// Thin QR decomposition `A = Q·R` by modified Gram-Schmidt.
///
/// For an `m x n` input, `Q` is `m x n` with orthonormal columns and `R` is
/// `n x n` upper triangular with a non-negative diagonal.
///
/// Linearly dependent columns give `R[i,i] = 0`; the normalisation then
/// divides by zero and the NaN/∞ entries are left in `Q`. Check
/// [`QrDecomposition::is_finite`] when the input rank is unknown.
///
/// # Example
///
/// ```
/// use denselab::Matrix;
/// use denselab::linalg::qr_decompose;
///
/// let a = Matrix::new([[1.0_f64, 1.0], [1.0, 0.0], [0.0, 1.0]]);
/// let qr = qr_decompose(&a);
/// assert_eq!(qr.q().shape(), (3, 2));
/// assert_eq!(qr.r().shape(), (2, 2));
/// assert!((qr.q() * qr.r()).approx_eq(&a, 1e-12));
/// ```
#[derive(Debug, Clone)]
pub struct QrDecomposition<T> {
    q: Matrix<T>,
    r: Matrix<T>,
}

/// Modified Gram-Schmidt QR decomposition of an `m x n` matrix.
///
/// Column `i` of `Q` starts as column `i` of `A`; each earlier column `q_j`
/// is projected out of the *current* `q_i` (`R[j,i] = ⟨q_j, q_i⟩`,
/// `q_i -= R[j,i]·q_j`), then `R[i,i] = ‖q_i‖` and `q_i` is normalised.
pub fn qr_decompose<T: FloatScalar>(a: &Matrix<T>) -> QrDecomposition<T> {
    let (m, n) = a.shape();
    let mut q = Matrix::<T>::zeros(m, n);
    let mut r = Matrix::<T>::zeros(n, n);

    for i in 0..n {
        for row in 0..m {
            q[(row, i)] = a[(row, i)];
        }

        for j in 0..i {
            let mut proj = T::zero();
            for row in 0..m {
                proj = proj + q[(row, j)] * q[(row, i)];
            }
            r[(j, i)] = proj;
            for row in 0..m {
                q[(row, i)] = q[(row, i)] - proj * q[(row, j)];
            }
        }

        let mut norm_sq = T::zero();
        for row in 0..m {
            norm_sq = norm_sq + q[(row, i)] * q[(row, i)];
        }
        let norm = norm_sq.sqrt();
        if norm == T::zero() {
            log::warn!(
                target: "denselab",
                "QR: column {} is linearly dependent on the previous columns",
                i
            );
        }
        r[(i, i)] = norm;
        for row in 0..m {
            q[(row, i)] = q[(row, i)] / norm;
        }
    }

    QrDecomposition { q, r }
}

impl<T: FloatScalar> QrDecomposition<T> {
    /// `m x n` factor with orthonormal columns.
    pub fn q(&self) -> &Matrix<T> {
        &self.q
    }

    /// `n x n` upper triangular factor.
    pub fn r(&self) -> &Matrix<T> {
        &self.r
    }

    /// Whether both factors are free of NaN/∞ (false for rank-deficient input).
    pub fn is_finite(&self) -> bool {
        self.q.is_finite() && self.r.is_finite()
    }

    /// Consume the decomposition, returning `(Q, R)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>) {
        (self.q, self.r)
    }
}

/// Convenience method on matrices.
impl<T: FloatScalar> Matrix<T> {
    /// Modified Gram-Schmidt QR decomposition; see [`qr_decompose`].
    pub fn qr(&self) -> QrDecomposition<T> {
        qr_decompose(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linalg::has_orthonormal_columns;

    fn check_factorization(a: &Matrix<f64>, tol: f64) {
        let qr = qr_decompose(a);
        let (q, r) = (qr.q(), qr.r());
        let n = a.ncols();

        let qtq = &q.transpose() * q;
        assert!(qtq.approx_eq(&Matrix::eye(n), tol), "QᵀQ = {:?}", qtq);
        assert!(r.is_upper_triangular());
        for i in 0..n {
            assert!(r[(i, i)] >= 0.0);
        }
        assert!((q * r).approx_eq(a, tol));
    }

    #[test]
    fn qr_square_3x3() {
        let a = Matrix::new([[12.0_f64, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]]);
        check_factorization(&a, 1e-10);

        // Classic example: R = [[14, 21, -14], [0, 175, -70], [0, 0, 35]]
        let r = qr_decompose(&a).into_parts().1;
        assert!((r[(0, 0)] - 14.0).abs() < 1e-10);
        assert!((r[(0, 1)] - 21.0).abs() < 1e-10);
        assert!((r[(1, 1)] - 175.0).abs() < 1e-10);
        assert!((r[(2, 2)] - 35.0).abs() < 1e-10);
    }

    #[test]
    fn qr_6x6_example() {
        let a = Matrix::new([
            [1.0_f64, 9.0, 0.0, 5.0, 3.0, 2.0],
            [-6.0, 3.0, 8.0, 2.0, -8.0, 0.0],
            [3.0, 15.0, 23.0, 2.0, 1.0, 7.0],
            [3.0, 57.0, 35.0, 1.0, 7.0, 9.0],
            [3.0, 5.0, 6.0, 15.0, 55.0, 2.0],
            [33.0, 7.0, 5.0, 3.0, 5.0, 7.0],
        ]);
        check_factorization(&a, 1e-6);
    }

    #[test]
    fn qr_tall() {
        let a = Matrix::from_rows(4, 2, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 9.0]);
        check_factorization(&a, 1e-10);
        assert!(has_orthonormal_columns(qr_decompose(&a).q(), 1e-10));
    }

    #[test]
    fn qr_dependent_columns_are_not_finite() {
        // Second column is exactly twice the first, so its residual is exactly zero
        let a = Matrix::new([[1.0_f64, 2.0], [0.0, 0.0], [0.0, 0.0]]);
        let qr = a.qr();
        assert!(!qr.is_finite());
        assert_eq!(qr.r()[(1, 1)], 0.0);
        assert!(qr.q()[(0, 1)].is_nan());
    }
}
