mod norm;
mod ops;
mod util;
pub mod vector;

pub use vector::{dot, outer, vector_p_norm};

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::linalg::LinalgError;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Dense heap-allocated matrix with runtime dimensions.
///
/// Row-major `Vec<T>` storage. Dimensions are fixed at creation; every
/// algorithm in this crate reads a `&Matrix<T>` and returns new matrices.
///
/// # Examples
///
/// ```
/// use denselab::Matrix;
///
/// let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b = Matrix::<f64>::eye(3);
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

// ── Constructors ────────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Create a matrix from a row-major nested array.
    ///
    /// ```
    /// use denselab::Matrix;
    /// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
    /// assert_eq!(m.nrows(), 2);
    /// assert_eq!(m[(1, 0)], 4);
    /// ```
    pub fn new<const M: usize, const N: usize>(rows: [[T; N]; M]) -> Self {
        let mut data = Vec::with_capacity(M * N);
        for row in rows.iter() {
            data.extend_from_slice(row);
        }
        Self {
            data,
            nrows: M,
            ncols: N,
        }
    }

    /// Create an `nrows x ncols` matrix of zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Create a square matrix with `diag` on the diagonal.
    ///
    /// ```
    /// use denselab::Matrix;
    /// let d = Matrix::from_diag(&[1.0_f64, 2.0, 3.0]);
    /// assert_eq!(d[(1, 1)], 2.0);
    /// assert_eq!(d[(1, 2)], 0.0);
    /// ```
    pub fn from_diag(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        for (i, &d) in diag.iter().enumerate() {
            m[(i, i)] = d;
        }
        m
    }

    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Panics if `row_major.len() != nrows * ncols`.
    ///
    /// ```
    /// use denselab::Matrix;
    /// let m = Matrix::from_rows(2, 3, &[1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0]);
    /// assert_eq!(m[(0, 2)], 3.0);
    /// assert_eq!(m[(1, 0)], 4.0);
    /// ```
    pub fn from_rows(nrows: usize, ncols: usize, row_major: &[T]) -> Self {
        assert_eq!(
            row_major.len(),
            nrows * ncols,
            "slice length {} does not match {}x{} matrix",
            row_major.len(),
            nrows,
            ncols,
        );
        Self {
            data: row_major.to_vec(),
            nrows,
            ncols,
        }
    }

    /// Create a matrix whose columns are the given slices.
    ///
    /// Panics if the columns differ in length.
    pub fn from_columns(columns: &[&[T]]) -> Self {
        let ncols = columns.len();
        let nrows = columns.first().map_or(0, |c| c.len());
        let mut m = Self::zeros(nrows, ncols);
        for (j, col) in columns.iter().enumerate() {
            assert_eq!(col.len(), nrows, "column {} has length {}, expected {}", j, col.len(), nrows);
            for (i, &x) in col.iter().enumerate() {
                m[(i, j)] = x;
            }
        }
        m
    }
}

impl<T> Matrix<T> {
    /// Number of rows.
    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Whether the matrix is square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use denselab::Matrix;
    /// let m = Matrix::from_fn(3, 3, |i, j| if i == j { 1.0_f64 } else { 0.0 });
    /// assert_eq!(m[(0, 0)], 1.0);
    /// assert_eq!(m[(0, 1)], 0.0);
    /// ```
    pub fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Row `i` as a slice.
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Row `i` as a mutable slice.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        &mut self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Underlying row-major storage.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Fails with [`LinalgError::Shape`] unless the matrix is square.
    pub(crate) fn require_square(&self) -> Result<usize, LinalgError> {
        if self.is_square() {
            Ok(self.nrows)
        } else {
            Err(LinalgError::Shape {
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }

    /// Fails with [`LinalgError::Shape`] unless the matrix is `nrows x ncols`.
    pub(crate) fn require_shape(&self, nrows: usize, ncols: usize) -> Result<(), LinalgError> {
        if self.shape() == (nrows, ncols) {
            Ok(())
        } else {
            Err(LinalgError::Shape {
                nrows: self.nrows,
                ncols: self.ncols,
            })
        }
    }
}

impl<T: Copy> Matrix<T> {
    /// Column `j`, copied out.
    pub fn col(&self, j: usize) -> Vec<T> {
        (0..self.nrows).map(|i| self[(i, j)]).collect()
    }

    /// Transpose: (M×N) → (N×M).
    ///
    /// ```
    /// use denselab::Matrix;
    /// let a = Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]);
    /// let t = a.transpose();
    /// assert_eq!(t.shape(), (3, 2));
    /// assert_eq!(t[(2, 1)], 6);
    /// ```
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }
}

// ── MatrixRef / MatrixMut ───────────────────────────────────────────

impl<T> MatrixRef<T> for Matrix<T> {
    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> MatrixMut<T> for Matrix<T> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }

    fn swap_rows(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        if a != b {
            let n = self.ncols;
            for j in 0..n {
                self.data.swap(a * n + j, b * n + j);
            }
        }
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[row * self.ncols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[row * self.ncols + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_eye() {
        let z = Matrix::<f64>::zeros(3, 3);
        assert_eq!(z[(0, 0)], 0.0);
        assert_eq!(z[(2, 2)], 0.0);

        let id = Matrix::<f64>::eye(3);
        assert_eq!(id[(0, 0)], 1.0);
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
    }

    #[test]
    fn new_is_row_major() {
        let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(1, 1)], 4.0);
        assert_eq!(m.row(1), &[3.0, 4.0]);
        assert_eq!(m.col(1), vec![2.0, 4.0]);
    }

    #[test]
    fn from_columns_matches_transpose() {
        let m = Matrix::from_columns(&[&[1, 2, 3], &[4, 5, 6]]);
        assert_eq!(m.shape(), (3, 2));
        assert_eq!(m, Matrix::from_rows(2, 3, &[1, 2, 3, 4, 5, 6]).transpose());
    }

    #[test]
    fn swap_rows_via_trait() {
        fn swap_generic<T: Copy>(m: &mut impl MatrixMut<T>) {
            m.swap_rows(0, 2);
        }
        let mut m = Matrix::from_rows(3, 2, &[1, 2, 3, 4, 5, 6]);
        swap_generic(&mut m);
        assert_eq!(m.row(0), &[5, 6]);
        assert_eq!(m.row(2), &[1, 2]);
    }

    #[test]
    fn shape_checks() {
        let m = Matrix::<f64>::zeros(2, 3);
        assert_eq!(
            m.require_square().unwrap_err(),
            LinalgError::Shape { nrows: 2, ncols: 3 }
        );
        assert!(m.require_shape(2, 3).is_ok());
        assert!(m.require_shape(2, 2).is_err());
    }
}
