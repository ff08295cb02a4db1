//! Named tolerances shared by the routines in this crate.

use crate::linalg::LinalgError;
use crate::traits::FloatScalar;

/// Discriminant of the 2×2 eigenvalue quadratic below which it is treated as zero.
pub const DISCRIMINANT_TOL: f64 = 1e-12;
/// Gauss-Jordan pivot modulus below which a matrix is reported singular.
pub const PIVOT_TOL: f64 = 1e-10;
/// Samples whose p-norm is below this are skipped by the norm estimator.
pub const SAMPLE_NORM_TOL: f64 = 1e-9;

/// Tolerances for rounding guards and singularity checks.
///
/// The default profile matches the behaviour the routines document: values
/// that should be non-negative but came out slightly negative are clamped to
/// zero. [`Tolerances::strict`] instead rejects values that are negative by
/// more than `max_negative`, so malformed input is not masked.
///
/// ```
/// use denselab::Tolerances;
///
/// let tol = Tolerances::<f64>::default();
/// assert_eq!(tol.pivot, 1e-10);
/// assert!(tol.max_negative.is_none());
///
/// let strict = Tolerances::<f64>::strict();
/// assert!(strict.max_negative.is_some());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tolerances<T> {
    /// Discriminant floor for the closed-form spectral norm.
    pub discriminant: T,
    /// Minimum pivot modulus accepted by Gauss-Jordan elimination.
    pub pivot: T,
    /// Minimum sample p-norm accepted by the Monte-Carlo estimator.
    pub sample_norm: T,
    /// `None` clamps any negative value to zero. `Some(tol)` clamps only
    /// values in `[-tol, 0)` and reports anything lower as an error.
    pub max_negative: Option<T>,
}

impl Default for Tolerances<f64> {
    fn default() -> Self {
        Self {
            discriminant: DISCRIMINANT_TOL,
            pivot: PIVOT_TOL,
            sample_norm: SAMPLE_NORM_TOL,
            max_negative: None,
        }
    }
}

impl Default for Tolerances<f32> {
    fn default() -> Self {
        Self {
            discriminant: 1e-6,
            pivot: 1e-5,
            sample_norm: 1e-5,
            max_negative: None,
        }
    }
}

impl<T: FloatScalar> Tolerances<T>
where
    Tolerances<T>: Default,
{
    /// Default tolerances with strict negative-value checking.
    ///
    /// The allowance is a few hundred machine epsilons, enough for the
    /// cancellation in a 3×3 determinant of well-scaled input.
    pub fn strict() -> Self {
        let eps = T::epsilon();
        let scale = T::from(256.0).unwrap_or_else(T::one);
        Self {
            max_negative: Some(eps * scale),
            ..Self::default()
        }
    }
}

impl<T: FloatScalar> Tolerances<T> {
    /// Clamp a quantity that is non-negative in exact arithmetic.
    ///
    /// Negative values become zero; under the strict profile a value below
    /// `-max_negative` is reported as [`LinalgError::NegativeRounding`].
    pub(crate) fn clamp_non_negative(&self, value: T, name: &'static str) -> Result<T, LinalgError> {
        if value >= T::zero() {
            return Ok(value);
        }
        match self.max_negative {
            Some(limit) if value < -limit => Err(LinalgError::NegativeRounding { name }),
            _ => {
                if value.is_nan() {
                    return Ok(value);
                }
                log::debug!(target: "denselab", "clamping `{}` = {:?} to zero", name, value);
                Ok(T::zero())
            }
        }
    }
}
