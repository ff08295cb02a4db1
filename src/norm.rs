//! Induced p-norms of 2×2 matrices.
//!
//! `‖A‖_p = max_{x≠0} ‖Ax‖_p / ‖x‖_p`. The cases p = 1, 2 and ∞ have closed
//! forms and are computed exactly. Any other p is estimated by sampling
//! random directions, which only ever approaches the true norm from below.
//!
//! The random source is always passed in by the caller, so a seeded
//! generator gives reproducible estimates.

use num_traits::Float;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::linalg::LinalgError;
use crate::matrix::vector_p_norm;
use crate::settings::Tolerances;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Number of random directions drawn by the sampling estimator.
pub const DEFAULT_SAMPLES: usize = 20_000;

/// Settings for [`induced_norm_with`] and [`sampled_norm`].
#[derive(Debug, Clone, Copy)]
pub struct NormSettings<T> {
    /// Number of standard-normal directions drawn for general p.
    pub samples: usize,
    /// Rounding guards for the closed-form and sampled branches.
    pub tol: Tolerances<T>,
}

impl Default for NormSettings<f64> {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            tol: Tolerances::default(),
        }
    }
}

impl Default for NormSettings<f32> {
    fn default() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
            tol: Tolerances::default(),
        }
    }
}

/// Induced p-norm of a 2×2 matrix with default settings.
///
/// - p = 1: maximum absolute column sum (exact)
/// - p = ∞: maximum absolute row sum (exact)
/// - p = 2: largest singular value, from the eigenvalues of `AᵀA` (exact)
/// - any other p ≥ 1: Monte-Carlo lower estimate over 20 000 directions
///
/// `rng` is only drawn from in the sampling case.
///
/// # Errors
///
/// [`LinalgError::Shape`] unless `a` is 2×2; [`LinalgError::OutOfRange`] if
/// `p < 1` or `p` is NaN.
///
/// # Example
///
/// ```
/// use denselab::Matrix;
/// use denselab::norm::induced_norm;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let a = Matrix::new([[1.0_f64, -2.0], [3.0, 4.0]]);
///
/// assert_eq!(induced_norm(&a, 1.0, &mut rng).unwrap(), 6.0);
/// assert_eq!(induced_norm(&a, f64::INFINITY, &mut rng).unwrap(), 7.0);
///
/// let two = induced_norm(&a, 2.0, &mut rng).unwrap();
/// let three = induced_norm(&a, 3.0, &mut rng).unwrap();
/// assert!(three > 0.0 && three <= two * 1.5);
/// ```
pub fn induced_norm<T, R>(a: &Matrix<T>, p: T, rng: &mut R) -> Result<T, LinalgError>
where
    T: FloatScalar,
    R: Rng + ?Sized,
    StandardNormal: Distribution<T>,
    NormSettings<T>: Default,
{
    induced_norm_with(a, p, &NormSettings::default(), rng)
}

/// [`induced_norm`] with explicit sample count and tolerances.
pub fn induced_norm_with<T, R>(
    a: &Matrix<T>,
    p: T,
    settings: &NormSettings<T>,
    rng: &mut R,
) -> Result<T, LinalgError>
where
    T: FloatScalar,
    R: Rng + ?Sized,
    StandardNormal: Distribution<T>,
{
    a.require_shape(2, 2)?;
    check_order(p)?;

    if p == T::one() {
        return Ok(a.norm_one());
    }
    if p.is_infinite() {
        return Ok(a.norm_inf());
    }
    if p == T::one() + T::one() {
        return spectral_norm_2x2(a, &settings.tol);
    }
    sampled_norm(a, p, settings, rng)
}

/// Spectral norm of a 2×2 matrix in closed form.
///
/// With `M = AᵀA`, the largest eigenvalue is
/// `λ = (tr M + √(tr² M − 4 det M)) / 2` and the norm is `√λ`. A discriminant
/// below `tol.discriminant` is replaced by zero and a negative `λ` by zero;
/// see [`Tolerances`] for the strict profile.
///
/// ```
/// use denselab::{Matrix, Tolerances};
/// use denselab::norm::spectral_norm_2x2;
///
/// let a = Matrix::new([[3.0_f64, 0.0], [0.0, -5.0]]);
/// let s = spectral_norm_2x2(&a, &Tolerances::default()).unwrap();
/// assert!((s - 5.0).abs() < 1e-12);
/// ```
pub fn spectral_norm_2x2<T: FloatScalar>(a: &Matrix<T>, tol: &Tolerances<T>) -> Result<T, LinalgError> {
    a.require_shape(2, 2)?;
    let (a00, a01, a10, a11) = (a[(0, 0)], a[(0, 1)], a[(1, 0)], a[(1, 1)]);

    let m11 = a00 * a00 + a10 * a10;
    let m12 = a00 * a01 + a10 * a11;
    let m22 = a01 * a01 + a11 * a11;

    let two = T::one() + T::one();
    let four = two * two;
    let tr = m11 + m22;
    let det = m11 * m22 - m12 * m12;

    let mut delta = tr * tr - four * det;
    if delta < tol.discriminant {
        tol.clamp_non_negative(delta, "discriminant")?;
        delta = T::zero();
    }

    let lambda_max = tol.clamp_non_negative((tr + delta.sqrt()) / two, "largest eigenvalue")?;
    Ok(lambda_max.sqrt())
}

/// Monte-Carlo estimate of the induced p-norm, whatever the value of p.
///
/// Draws `settings.samples` standard-normal 2-vectors `x`, skips those with
/// `‖x‖_p < settings.tol.sample_norm`, and returns the largest observed
/// `‖Ax‖_p / ‖x‖_p`. The estimate never exceeds the true norm; it approaches
/// it as the sample count grows.
pub fn sampled_norm<T, R>(
    a: &Matrix<T>,
    p: T,
    settings: &NormSettings<T>,
    rng: &mut R,
) -> Result<T, LinalgError>
where
    T: FloatScalar,
    R: Rng + ?Sized,
    StandardNormal: Distribution<T>,
{
    a.require_shape(2, 2)?;
    check_order(p)?;
    let (a00, a01, a10, a11) = (a[(0, 0)], a[(0, 1)], a[(1, 0)], a[(1, 1)]);

    let mut best = T::zero();
    let mut skipped = 0usize;
    for _ in 0..settings.samples {
        let x0: T = rng.sample(StandardNormal);
        let x1: T = rng.sample(StandardNormal);

        let norm_x = vector_p_norm(&[x0, x1], p);
        if norm_x < settings.tol.sample_norm {
            skipped += 1;
            continue;
        }

        let ax = [a00 * x0 + a01 * x1, a10 * x0 + a11 * x1];
        let ratio = vector_p_norm(&ax, p) / norm_x;
        if ratio > best {
            best = ratio;
        }
    }

    log::debug!(
        target: "denselab",
        "sampled p-norm: {} samples, {} skipped, estimate {:?}",
        settings.samples,
        skipped,
        best
    );
    Ok(best)
}

fn check_order<T: Float>(p: T) -> Result<(), LinalgError> {
    if p.is_nan() || p < T::one() {
        return Err(LinalgError::OutOfRange { name: "p" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOL: f64 = 1e-12;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!(
            (a - b).abs() < tol,
            "{}: {} vs {} (diff {})",
            msg,
            a,
            b,
            (a - b).abs()
        );
    }

    /// Largest singular value of a 2×2 matrix from the closed-form SVD
    /// `σ_max = (√((a+d)² + (c−b)²) + √((a−d)² + (b+c)²)) / 2`.
    fn sigma_max(a: &Matrix<f64>) -> f64 {
        let (p, q, r, s) = (a[(0, 0)], a[(0, 1)], a[(1, 0)], a[(1, 1)]);
        let e = (p + s).hypot(r - q);
        let f = (p - s).hypot(q + r);
        (e + f) / 2.0
    }

    fn samples() -> [Matrix<f64>; 5] {
        [
            Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]),
            Matrix::new([[-2.0_f64, 0.5], [0.0, 1.0]]),
            Matrix::new([[0.0_f64, 1.0], [-1.0, 0.0]]),
            Matrix::new([[1e-3_f64, 7.0], [2.0, -3.0]]),
            Matrix::new([[1.0_f64, 1.0], [1.0, 1.0]]),
        ]
    }

    #[test]
    fn one_and_inf_norms() {
        let mut r = rng();
        for a in samples().iter() {
            let col = (a[(0, 0)].abs() + a[(1, 0)].abs()).max(a[(0, 1)].abs() + a[(1, 1)].abs());
            let row = (a[(0, 0)].abs() + a[(0, 1)].abs()).max(a[(1, 0)].abs() + a[(1, 1)].abs());
            assert_near(induced_norm(a, 1.0, &mut r).unwrap(), col, TOL, "p = 1");
            assert_near(induced_norm(a, f64::INFINITY, &mut r).unwrap(), row, TOL, "p = inf");
        }
    }

    #[test]
    fn two_norm_matches_singular_value() {
        let mut r = rng();
        for a in samples().iter() {
            let got = induced_norm(a, 2.0, &mut r).unwrap();
            assert_near(got, sigma_max(a), 1e-6, "p = 2");
        }
    }

    #[test]
    fn two_norm_of_zero_and_rotation() {
        let tol = Tolerances::default();
        assert_eq!(spectral_norm_2x2(&Matrix::<f64>::zeros(2, 2), &tol).unwrap(), 0.0);
        let rot = Matrix::new([[0.6_f64, -0.8], [0.8, 0.6]]);
        assert_near(spectral_norm_2x2(&rot, &tol).unwrap(), 1.0, 1e-6, "rotation");
    }

    #[test]
    fn sampled_is_close_to_exact_cases() {
        let settings = NormSettings::default();
        for a in samples().iter() {
            for &p in [1.0, 2.0, f64::INFINITY].iter() {
                let exact = induced_norm_with(a, p, &settings, &mut rng()).unwrap();
                let est = sampled_norm(a, p, &settings, &mut rng()).unwrap();
                assert!(est <= exact * (1.0 + 1e-12), "estimate above exact for p = {}", p);
                assert!(
                    est >= 0.95 * exact,
                    "p = {}: estimate {} too far below {}",
                    p,
                    est,
                    exact
                );
            }
        }
    }

    #[test]
    fn sampled_is_monotone_in_sample_count() {
        // Same seed: the longer run sees a superset of the shorter run's samples
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let mut prev = 0.0;
        for &n in [10, 100, 1_000, 20_000].iter() {
            let settings = NormSettings {
                samples: n,
                ..NormSettings::default()
            };
            let est = sampled_norm(&a, 3.0, &settings, &mut rng()).unwrap();
            assert!(est >= prev, "{} samples gave {} < {}", n, est, prev);
            prev = est;
        }
    }

    #[test]
    fn sampled_is_reproducible() {
        let a = Matrix::new([[2.0_f64, -1.0], [0.5, 3.0]]);
        let x = induced_norm(&a, 1.5, &mut rng()).unwrap();
        let y = induced_norm(&a, 1.5, &mut rng()).unwrap();
        assert_eq!(x, y);
    }

    #[test]
    fn general_p_lies_between_neighbours() {
        // For 2-vectors the p-norms of A are bounded by the exact cases up to
        // the norm-equivalence factor 2^|1/p - 1/q|.
        let a = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let n2 = induced_norm(&a, 2.0, &mut rng()).unwrap();
        let n3 = induced_norm(&a, 3.0, &mut rng()).unwrap();
        let factor = 2f64.powf(1.0 / 2.0 - 1.0 / 3.0);
        assert!(n3 <= n2 * factor * factor + 1e-9);
        assert!(n3 >= n2 / (factor * factor) - 1e-9);
    }

    #[test]
    fn large_order_stays_finite() {
        // ‖10·x‖_p / ‖x‖_p = 10 for every x, but |10·x_i|^p overflows unscaled
        let a = Matrix::new([[10.0_f64, 0.0], [0.0, 10.0]]);
        for &p in [400.0, 2000.0].iter() {
            let est = induced_norm(&a, p, &mut rng()).unwrap();
            assert!(est.is_finite(), "p = {}: {}", p, est);
            assert_near(est, 10.0, 1e-9, "scaled identity");
        }
    }

    #[test]
    fn zero_sample_count_gives_zero() {
        let a = Matrix::new([[1.0_f64, 0.0], [0.0, 1.0]]);
        let settings = NormSettings {
            samples: 0,
            ..NormSettings::default()
        };
        assert_eq!(sampled_norm(&a, 3.0, &settings, &mut rng()).unwrap(), 0.0);
    }

    #[test]
    fn shape_and_order_errors() {
        let mut r = rng();
        let a = Matrix::<f64>::eye(3);
        assert_eq!(
            induced_norm(&a, 1.0, &mut r).unwrap_err(),
            LinalgError::Shape { nrows: 3, ncols: 3 }
        );
        let b = Matrix::<f64>::eye(2);
        assert_eq!(
            induced_norm(&b, 0.5, &mut r).unwrap_err(),
            LinalgError::OutOfRange { name: "p" }
        );
        assert!(induced_norm(&b, f64::NAN, &mut r).is_err());
    }

    #[test]
    fn f32_matches_f64() {
        let a32 = Matrix::new([[1.0_f32, 2.0], [3.0, 4.0]]);
        let a64 = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let mut r = rng();
        let s32 = induced_norm(&a32, 2.0, &mut r).unwrap();
        let s64 = induced_norm(&a64, 2.0, &mut r).unwrap();
        assert!((s32 as f64 - s64).abs() < 1e-4);
    }
}
