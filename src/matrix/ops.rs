use alloc::vec;
use core::ops::{Add, Mul, Neg, Sub};

use crate::linalg::LinalgError;
use crate::traits::Scalar;

use super::Matrix;

// ── Element-wise addition / subtraction ─────────────────────────────

impl<T: Scalar> Add<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn add(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "dimension mismatch: {}x{} + {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a + b)
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        &self + &rhs
    }
}

impl<T: Scalar> Sub<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn sub(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.shape(),
            rhs.shape(),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let data = self
            .data
            .iter()
            .zip(rhs.data.iter())
            .map(|(&a, &b)| a - b)
            .collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        &self - &rhs
    }
}

impl<T: Scalar + Neg<Output = T>> Neg for &Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        self.map(|x| -x)
    }
}

// ── Matrix multiplication ───────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Matrix product `self * rhs`, reporting a dimension mismatch as an error.
    ///
    /// ```
    /// use denselab::Matrix;
    /// use denselab::linalg::LinalgError;
    ///
    /// let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::new([[5.0_f64], [6.0]]);
    /// let c = a.checked_mul(&b).unwrap();
    /// assert_eq!(c[(0, 0)], 17.0);
    /// assert_eq!(c[(1, 0)], 39.0);
    ///
    /// assert!(matches!(
    ///     b.checked_mul(&b),
    ///     Err(LinalgError::IncompatibleDimensions { .. })
    /// ));
    /// ```
    pub fn checked_mul(&self, rhs: &Matrix<T>) -> Result<Matrix<T>, LinalgError> {
        if self.ncols != rhs.nrows {
            return Err(LinalgError::IncompatibleDimensions {
                lhs: self.shape(),
                rhs: rhs.shape(),
            });
        }
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        for i in 0..m {
            for k in 0..n {
                let a_ik = self.data[i * n + k];
                for j in 0..p {
                    data[i * p + j] = data[i * p + j] + a_ik * rhs.data[k * p + j];
                }
            }
        }
        Ok(Matrix {
            data,
            nrows: m,
            ncols: p,
        })
    }

    /// Matrix-vector product `self * x`.
    ///
    /// Panics if `x.len() != self.ncols()`.
    pub fn mul_vec(&self, x: &[T]) -> alloc::vec::Vec<T> {
        assert_eq!(x.len(), self.ncols, "vector length mismatch");
        (0..self.nrows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(x.iter())
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect()
    }
}

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    /// Panics on a dimension mismatch; see [`Matrix::checked_mul`].
    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        match self.checked_mul(rhs) {
            Ok(c) => c,
            Err(_) => panic!(
                "dimension mismatch: {}x{} * {}x{}",
                self.nrows, self.ncols, rhs.nrows, rhs.ncols,
            ),
        }
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        &self * &rhs
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar> Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.map(|x| x * rhs)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        &self * rhs
    }
}
