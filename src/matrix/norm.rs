use num_traits::{Float, Zero};

use crate::traits::LinalgScalar;

use super::Matrix;

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: LinalgScalar> Matrix<T> {
    /// Frobenius norm (square root of the sum of squared moduli).
    pub fn frobenius_norm(&self) -> T::Real {
        let mut sum = T::Real::zero();
        for &x in self.data.iter() {
            let m = x.modulus();
            sum = sum + m * m;
        }
        sum.sqrt()
    }

    /// Infinity norm (maximum absolute row sum).
    ///
    /// ```
    /// use denselab::Matrix;
    /// let m = Matrix::new([[1.0_f64, -2.0], [3.0, 4.0]]);
    /// assert_eq!(m.norm_inf(), 7.0);
    /// ```
    pub fn norm_inf(&self) -> T::Real {
        let mut max = T::Real::zero();
        for i in 0..self.nrows {
            let mut row_sum = T::Real::zero();
            for j in 0..self.ncols {
                row_sum = row_sum + self[(i, j)].modulus();
            }
            if row_sum > max {
                max = row_sum;
            }
        }
        max
    }

    /// One norm (maximum absolute column sum).
    ///
    /// ```
    /// use denselab::Matrix;
    /// let m = Matrix::new([[1.0_f64, -2.0], [3.0, 4.0]]);
    /// assert_eq!(m.norm_one(), 6.0);
    /// ```
    pub fn norm_one(&self) -> T::Real {
        let mut max = T::Real::zero();
        for j in 0..self.ncols {
            let mut col_sum = T::Real::zero();
            for i in 0..self.nrows {
                col_sum = col_sum + self[(i, j)].modulus();
            }
            if col_sum > max {
                max = col_sum;
            }
        }
        max
    }
}
