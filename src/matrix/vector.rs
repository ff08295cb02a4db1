//! Free functions over plain slices.

use crate::traits::{FloatScalar, Scalar};

use super::Matrix;

/// Dot product of two equal-length slices.
///
/// Panics if the lengths differ.
///
/// ```
/// use denselab::matrix::dot;
/// assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]), 32.0);
/// ```
pub fn dot<T: Scalar>(a: &[T], b: &[T]) -> T {
    assert_eq!(a.len(), b.len(), "vector length mismatch");
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&x, &y)| acc + x * y)
}

/// Outer product `u * vᵀ` (`u.len() x v.len()`).
///
/// ```
/// use denselab::matrix::outer;
/// let a = outer(&[1.0, 2.0], &[3.0, 4.0, 5.0]);
/// assert_eq!(a.shape(), (2, 3));
/// assert_eq!(a[(1, 2)], 10.0);
/// ```
pub fn outer<T: Scalar>(u: &[T], v: &[T]) -> Matrix<T> {
    Matrix::from_fn(u.len(), v.len(), |i, j| u[i] * v[j])
}

/// Vector p-norm `(Σ|vᵢ|^p)^(1/p)`; `p = ∞` gives `max |vᵢ|`.
///
/// `p = 1` and `p = 2` take direct paths instead of `powf`. Other orders
/// scale by `max |vᵢ|` first so large `p` does not overflow.
///
/// ```
/// use denselab::matrix::vector_p_norm;
/// assert!((vector_p_norm(&[3.0_f64, -4.0], 2.0) - 5.0).abs() < 1e-12);
/// assert_eq!(vector_p_norm(&[3.0_f64, -4.0], 1.0), 7.0);
/// assert_eq!(vector_p_norm(&[3.0_f64, -4.0], f64::INFINITY), 4.0);
/// ```
pub fn vector_p_norm<T: FloatScalar>(v: &[T], p: T) -> T {
    if p.is_infinite() {
        return v.iter().fold(T::zero(), |m, &x| m.max(x.abs()));
    }
    if p == T::one() {
        return v.iter().fold(T::zero(), |s, &x| s + x.abs());
    }
    if p == T::one() + T::one() {
        return v.iter().fold(T::zero(), |s, &x| s + x * x).sqrt();
    }
    let scale = v.iter().fold(T::zero(), |m, &x| m.max(x.abs()));
    if scale == T::zero() || !scale.is_finite() {
        return scale;
    }
    scale
        * v.iter()
            .fold(T::zero(), |s, &x| s + (x.abs() / scale).powf(p))
            .powf(T::one() / p)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn p_norm_general() {
        // (1 + 8)^(1/3)
        let n = vector_p_norm(&[1.0_f64, -2.0], 3.0);
        assert!((n - 9.0_f64.cbrt()).abs() < 1e-12);
    }

    #[test]
    fn p_norm_large_order_does_not_overflow() {
        for &p in [50.0_f64, 400.0, 2000.0].iter() {
            let n = vector_p_norm(&[10.0_f64, -10.0], p);
            let expected = 10.0 * 2.0_f64.powf(1.0 / p);
            assert!((n - expected).abs() < 1e-12, "p = {}: {}", p, n);
        }
        assert_eq!(vector_p_norm(&[0.0_f64, 0.0], 7.0), 0.0);
        assert_eq!(vector_p_norm(&[1e300_f64, 0.0], 400.0), 1e300);
    }

    #[test]
    fn p_norm_is_monotone_in_p() {
        let v = [0.3_f64, -1.7, 0.9];
        let n1 = vector_p_norm(&v, 1.0);
        let n2 = vector_p_norm(&v, 2.0);
        let n3 = vector_p_norm(&v, 3.5);
        let ninf = vector_p_norm(&v, f64::INFINITY);
        assert!(n1 >= n2 && n2 >= n3 && n3 >= ninf);
    }

    #[test]
    fn outer_rows_are_scaled_v() {
        let a = outer(&[2, -1], &[1, 2, 3]);
        assert_eq!(a.row(0), &[2, 4, 6]);
        assert_eq!(a.row(1), &[-1, -2, -3]);
    }

    #[test]
    #[should_panic(expected = "vector length mismatch")]
    fn dot_length_mismatch() {
        dot(&[1.0], &[1.0, 2.0]);
    }
}
