use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::traits::{LinalgScalar, MatrixMut};
use crate::Matrix;

/// LU decomposition with partial pivoting: `P·A = L·U`.
///
/// `L` is unit lower triangular, `U` upper triangular and `P` a row
/// permutation of the identity. The factors are stored explicitly.
///
/// No singularity check is made. If a pivot is exactly zero while rows
/// remain below it, the multipliers for those rows are `0/0` or `x/0` and the
/// resulting NaN/∞ entries propagate into `L` and `U`. Check
/// [`LuDecomposition::is_finite`] when the input may be singular.
///
/// # Example
///
/// ```
/// use denselab::Matrix;
/// use denselab::linalg::lu_decompose;
///
/// let a = Matrix::new([[2.0_f64, 3.0, 1.0], [4.0, 7.0, 2.0], [6.0, 18.0, -1.0]]);
/// let lu = lu_decompose(&a).unwrap();
///
/// let pa = &lu.p() * &a;
/// let lu_prod = lu.l() * lu.u();
/// assert!(pa.approx_eq(&lu_prod, 1e-12));
/// ```
#[derive(Debug, Clone)]
pub struct LuDecomposition<T> {
    l: Matrix<T>,
    u: Matrix<T>,
    perm: Vec<usize>,
    even: bool,
}

/// Partial-pivoting LU decomposition of a square matrix.
///
/// The input is copied; the caller's matrix is never modified.
///
/// # Errors
///
/// [`LinalgError::Shape`] if `a` is not square.
pub fn lu_decompose<T: LinalgScalar>(a: &Matrix<T>) -> Result<LuDecomposition<T>, LinalgError> {
    let n = a.require_square()?;
    let mut work = a.clone();
    let mut l = Matrix::<T>::eye(n);
    let mut perm: Vec<usize> = (0..n).collect();
    let mut even = true;

    for i in 0..n {
        // Partial pivoting: row with the largest modulus in column i
        let mut max_row = i;
        let mut max_val = work[(i, i)].modulus();
        for row in (i + 1)..n {
            let val = work[(row, i)].modulus();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if max_row != i {
            work.swap_rows(i, max_row);
            perm.swap(i, max_row);
            // Keep the already computed multipliers attached to their rows
            for j in 0..i {
                let tmp = l[(i, j)];
                l[(i, j)] = l[(max_row, j)];
                l[(max_row, j)] = tmp;
            }
            even = !even;
        }

        let pivot = work[(i, i)];
        if pivot == T::zero() && i + 1 < n {
            log::warn!(
                target: "denselab",
                "LU: zero pivot in column {}, multipliers below it will not be finite",
                i
            );
        }

        for j in (i + 1)..n {
            let factor = work[(j, i)] / pivot;
            l[(j, i)] = factor;
            for k in i..n {
                work[(j, k)] = work[(j, k)] - factor * work[(i, k)];
            }
        }
    }

    Ok(LuDecomposition {
        l,
        u: work.upper_triangle(),
        perm,
        even,
    })
}

impl<T: LinalgScalar> LuDecomposition<T> {
    /// Unit lower triangular factor `L`.
    pub fn l(&self) -> &Matrix<T> {
        &self.l
    }

    /// Upper triangular factor `U`.
    pub fn u(&self) -> &Matrix<T> {
        &self.u
    }

    /// Permutation matrix `P` (row `i` has its one in column `perm()[i]`).
    pub fn p(&self) -> Matrix<T> {
        let n = self.perm.len();
        let mut p = Matrix::zeros(n, n);
        for (i, &src) in self.perm.iter().enumerate() {
            *p.get_mut(i, src) = T::one();
        }
        p
    }

    /// Row order: row `i` of `P·A` is row `perm()[i]` of `A`.
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Determinant of `A`: the product of `U`'s diagonal times the
    /// permutation sign.
    pub fn det(&self) -> T {
        let mut d = if self.even { T::one() } else { T::zero() - T::one() };
        for i in 0..self.u.nrows() {
            d = d * self.u[(i, i)];
        }
        d
    }

    /// Whether both factors are free of NaN/∞ (false after a zero pivot).
    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.u.is_finite()
    }

    /// Consume the decomposition, returning `(L, U, P)`.
    pub fn into_parts(self) -> (Matrix<T>, Matrix<T>, Matrix<T>) {
        let p = self.p();
        (self.l, self.u, p)
    }
}

/// Convenience method on square matrices.
impl<T: LinalgScalar> Matrix<T> {
    /// LU decomposition with partial pivoting; see [`lu_decompose`].
    pub fn lu(&self) -> Result<LuDecomposition<T>, LinalgError> {
        lu_decompose(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn assert_valid_permutation(p: &Matrix<f64>) {
        let n = p.nrows();
        for i in 0..n {
            let row_ones = (0..n).filter(|&j| p[(i, j)] == 1.0).count();
            let col_ones = (0..n).filter(|&j| p[(j, i)] == 1.0).count();
            let row_zeros = (0..n).filter(|&j| p[(i, j)] == 0.0).count();
            assert_eq!(row_ones, 1, "row {} of P", i);
            assert_eq!(col_ones, 1, "col {} of P", i);
            assert_eq!(row_zeros, n - 1, "row {} of P", i);
        }
    }

    fn check_factorization(a: &Matrix<f64>) {
        let lu = lu_decompose(a).unwrap();
        let (l, u, p) = (lu.l(), lu.u(), lu.p());

        assert!(l.is_lower_triangular());
        for i in 0..l.nrows() {
            assert_eq!(l[(i, i)], 1.0, "L diagonal");
        }
        assert!(u.is_upper_triangular());
        assert_valid_permutation(&p);

        let pa = &p * a;
        let prod = l * u;
        assert!(pa.approx_eq(&prod, 1e-6), "PA = {:?}\nLU = {:?}", pa, prod);
    }

    #[test]
    fn lu_3x3_example() {
        let a = Matrix::new([[2.0_f64, 3.0, 1.0], [4.0, 7.0, 2.0], [6.0, 18.0, -1.0]]);
        check_factorization(&a);

        let lu = lu_decompose(&a).unwrap();
        // First pivot is the 6 in row 2
        assert_eq!(lu.perm()[0], 2);
        assert!((lu.u()[(0, 0)] - 6.0).abs() < TOL);
    }

    #[test]
    fn lu_4x4_example() {
        let a = Matrix::new([
            [14.0_f64, 4.0, 5.0, 3.0],
            [4.0, 13.0, 8.0, 3.0],
            [2.0, 1.0, 2.0, 11.0],
            [1.0, 13.0, 6.0, 3.0],
        ]);
        check_factorization(&a);
    }

    #[test]
    fn lu_multipliers_bounded_by_one() {
        let a = Matrix::new([[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]]);
        let lu = lu_decompose(&a).unwrap();
        for i in 0..3 {
            for j in 0..i {
                assert!(lu.l()[(i, j)].abs() <= 1.0 + TOL);
            }
        }
        check_factorization(&a);
    }

    #[test]
    fn lu_det() {
        let a = Matrix::new([[6.0_f64, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        let lu = a.lu().unwrap();
        assert!((lu.det() - (-306.0)).abs() < TOL);
    }

    #[test]
    fn lu_leaves_input_untouched() {
        let a = Matrix::new([[0.0_f64, 1.0], [1.0, 1.0]]);
        let before = a.clone();
        let _ = lu_decompose(&a).unwrap();
        assert_eq!(a, before);
    }

    #[test]
    fn lu_zero_pivot_propagates_non_finite() {
        // After the first step the remaining 2x2 block has a zero column
        let a = Matrix::new([[0.0_f64, 0.0, 1.0], [0.0, 0.0, 2.0], [1.0, 1.0, 1.0]]);
        let lu = lu_decompose(&a).unwrap();
        assert!(!lu.is_finite());
        assert!(lu.l()[(2, 1)].is_nan());
    }

    #[test]
    fn lu_singular_last_pivot_is_fine() {
        // A zero in the final pivot position divides nothing
        let a = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        let lu = lu_decompose(&a).unwrap();
        assert!(lu.is_finite());
        assert!(lu.det().abs() < TOL);
        check_factorization(&a);
    }

    #[test]
    fn lu_rejects_rectangular() {
        let a = Matrix::<f64>::zeros(2, 3);
        assert_eq!(
            lu_decompose(&a).unwrap_err(),
            LinalgError::Shape { nrows: 2, ncols: 3 }
        );
    }

    #[test]
    fn lu_into_parts() {
        let a = Matrix::new([[4.0_f64, 3.0], [6.0, 3.0]]);
        let (l, u, p) = lu_decompose(&a).unwrap().into_parts();
        assert!((&p * &a).approx_eq(&(&l * &u), TOL));
        assert_eq!(p, Matrix::new([[0.0_f64, 1.0], [1.0, 0.0]]));
    }
}
