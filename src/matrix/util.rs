use alloc::vec::Vec;
use num_complex::Complex;
use num_traits::Float;

use crate::traits::{FloatScalar, LinalgScalar, Scalar};

use super::Matrix;

// ── Map ─────────────────────────────────────────────────────────────

impl<T> Matrix<T> {
    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use denselab::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(0, 0)], 1.0);
    /// assert_eq!(r[(1, 1)], 4.0);
    /// ```
    pub fn map<U>(&self, f: impl Fn(T) -> U) -> Matrix<U>
    where
        T: Copy,
    {
        let data: Vec<U> = self.data.iter().map(|&x| f(x)).collect();
        Matrix {
            data,
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

// ── Triangular structure ────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Upper triangle (including the diagonal); everything below is zero.
    pub fn upper_triangle(&self) -> Self {
        Self::from_fn(self.nrows, self.ncols, |i, j| {
            if i <= j {
                self[(i, j)]
            } else {
                T::zero()
            }
        })
    }

    /// Whether every entry below the diagonal is exactly zero.
    pub fn is_upper_triangular(&self) -> bool {
        (0..self.nrows).all(|i| (0..i.min(self.ncols)).all(|j| self[(i, j)] == T::zero()))
    }

    /// Whether every entry above the diagonal is exactly zero.
    pub fn is_lower_triangular(&self) -> bool {
        (0..self.nrows).all(|i| ((i + 1)..self.ncols).all(|j| self[(i, j)] == T::zero()))
    }

    /// Promote a real matrix into complex form.
    pub fn to_complex(&self) -> Matrix<Complex<T>> {
        self.map(|x| Complex::new(x, T::zero()))
    }
}

// ── Approximate comparison ──────────────────────────────────────────

impl<T: LinalgScalar> Matrix<T> {
    /// Largest entrywise modulus of `self - other`. A NaN difference
    /// dominates, so non-finite results never compare as close.
    ///
    /// Panics on a shape mismatch.
    pub fn max_abs_diff(&self, other: &Self) -> T::Real {
        assert_eq!(self.shape(), other.shape(), "dimension mismatch");
        self.data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| (a - b).modulus())
            .fold(<T::Real as num_traits::Zero>::zero(), |m, d| {
                if d > m || d.is_nan() {
                    d
                } else {
                    m
                }
            })
    }

    /// Entrywise comparison within an absolute tolerance.
    ///
    /// ```
    /// use denselab::Matrix;
    /// let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
    /// let b = Matrix::new([[1.0_f64, 2.0 + 1e-9], [3.0, 4.0]]);
    /// assert!(a.approx_eq(&b, 1e-6));
    /// assert!(!a.approx_eq(&b, 1e-12));
    /// ```
    pub fn approx_eq(&self, other: &Self, tol: T::Real) -> bool {
        self.shape() == other.shape() && self.max_abs_diff(other) <= tol
    }

    /// Whether every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|&x| x.is_finite_value())
    }
}

impl<T: FloatScalar> Matrix<Complex<T>> {
    /// Real part of every entry.
    pub fn re(&self) -> Matrix<T> {
        self.map(|z| z.re)
    }

    /// Imaginary part of every entry.
    pub fn im(&self) -> Matrix<T> {
        self.map(|z| z.im)
    }
}
