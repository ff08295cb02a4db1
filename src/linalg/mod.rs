pub(crate) mod gauss_jordan;
pub(crate) mod lu;
pub(crate) mod orthogonal;
pub(crate) mod qr;
pub(crate) mod triangular;

pub use gauss_jordan::{gauss_jordan_in_place, invert, invert_with, rank};
pub use lu::{lu_decompose, LuDecomposition};
pub use orthogonal::{has_orthonormal_columns, is_orthogonal};
pub use qr::{qr_decompose, QrDecomposition};
pub use triangular::back_substitute;

/// Errors from the routines in this crate.
///
/// Every fallible operation returns one of these synchronously; there are no
/// partial results.
///
/// ```
/// use denselab::Matrix;
/// use denselab::linalg::{invert, LinalgError};
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(invert(&singular).unwrap_err(), LinalgError::Singular);
///
/// let wide = Matrix::<f64>::zeros(2, 3);
/// assert_eq!(invert(&wide).unwrap_err(), LinalgError::Shape { nrows: 2, ncols: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Input has the wrong dimensions for the operation (non-square, not 2×2,
    /// mismatched vector lengths). Carries the offending shape.
    Shape { nrows: usize, ncols: usize },
    /// A parameter is outside its valid range.
    OutOfRange { name: &'static str },
    /// Matrix is singular or nearly singular (pivot below tolerance).
    Singular,
    /// Operands of a product have incompatible dimensions.
    IncompatibleDimensions {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    /// Back-substitution input has a non-zero entry below the diagonal.
    NotUpperTriangular,
    /// A quantity that should be non-negative fell below zero by more than
    /// the configured rounding allowance.
    NegativeRounding { name: &'static str },
    /// The eigen-decomposition backend failed to converge.
    ConvergenceFailure,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Shape { nrows, ncols } => {
                write!(f, "invalid shape {}x{} for this operation", nrows, ncols)
            }
            LinalgError::OutOfRange { name } => write!(f, "parameter `{}` is out of range", name),
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::IncompatibleDimensions { lhs, rhs } => write!(
                f,
                "incompatible dimensions: {}x{} * {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            LinalgError::NotUpperTriangular => write!(f, "matrix is not upper triangular"),
            LinalgError::NegativeRounding { name } => {
                write!(f, "`{}` is negative beyond rounding tolerance", name)
            }
            LinalgError::ConvergenceFailure => write!(f, "eigen-decomposition did not converge"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        assert_eq!(LinalgError::Singular.to_string(), "matrix is singular");
        assert_eq!(
            LinalgError::Shape { nrows: 3, ncols: 2 }.to_string(),
            "invalid shape 3x2 for this operation"
        );
        assert_eq!(
            LinalgError::IncompatibleDimensions {
                lhs: (2, 3),
                rhs: (2, 2)
            }
            .to_string(),
            "incompatible dimensions: 2x3 * 2x2"
        );
        assert_eq!(
            LinalgError::OutOfRange { name: "k" }.to_string(),
            "parameter `k` is out of range"
        );
    }
}
