//! # denselab
//!
//! Dense linear algebra toolkit: induced matrix norms, Gauss-Jordan
//! inversion, rank-k eigen truncation, and LU / QR factorizations.
//! Real (`f32`, `f64`) and complex (`Complex<f32>`, `Complex<f64>`)
//! elements share one elimination core.
//!
//! ## Quick start
//!
//! ```
//! use denselab::Matrix;
//! use denselab::linalg::{invert, lu_decompose, qr_decompose};
//!
//! let a = Matrix::new([
//!     [2.0_f64, 3.0, 1.0],
//!     [4.0, 7.0, 2.0],
//!     [6.0, 18.0, -1.0],
//! ]);
//!
//! let a_inv = invert(&a).unwrap();
//! assert!((&a * &a_inv).approx_eq(&Matrix::eye(3), 1e-12));
//!
//! let lu = lu_decompose(&a).unwrap();
//! assert!((&lu.p() * &a).approx_eq(&(lu.l() * lu.u()), 1e-12));
//!
//! let qr = qr_decompose(&a);
//! assert!((qr.q() * qr.r()).approx_eq(&a, 1e-10));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated `Matrix<T>` with runtime dimensions and
//!   `Vec<T>` row-major storage. Arithmetic, `(row, col)` indexing, the
//!   1- / ∞- / Frobenius norms, and slice helpers ([`matrix::dot`],
//!   [`matrix::outer`], [`matrix::vector_p_norm`]).
//!
//! - [`norm`] — Induced p-norm of a 2×2 matrix. Exact for p = 1, 2, ∞;
//!   Monte-Carlo estimate from a caller-supplied RNG otherwise.
//!
//! - [`linalg`] — Gauss-Jordan inversion and rank, LU with partial
//!   pivoting, modified Gram-Schmidt QR, back-substitution and
//!   orthogonality checks. Shared [`linalg::LinalgError`].
//!
//! - [`eigen`] — Keep the k eigenvalues of largest modulus and rebuild
//!   `P·D'·P⁻¹`. Eigenpairs come through the [`eigen::EigenSolver`] trait.
//!
//! - [`geometry`] — Cross product, Gram-determinant tetrahedron volume,
//!   two-link arm kinematics.
//!
//! - [`conditioning`] — 1- / ∞-norm condition numbers, Wilkinson's
//!   bidiagonal matrix, random perturbation.
//!
//! - [`settings`] — [`Tolerances`]: pivot, discriminant and sampling
//!   thresholds, plus the optional strict profile for negative clamps.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats, used by norms, QR and geometry
//!   - [`LinalgScalar`] — real floats and complex numbers, used by elimination
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade under the
//! `denselab` target: `warn` for zero LU pivots and dependent QR columns,
//! `debug` for sampling statistics, clamps and discarded imaginary parts.
//! No logger is installed by the library.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` |
//! | `eigen`   | yes      | `FaerEigen` solver and `eigen::truncate` via `faer` (implies `std`) |
//! | `libm`    | baseline | Pure-Rust software float fallback |
//! | `all`     | no       | All features: `std` + `eigen` |

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod conditioning;
pub mod eigen;
pub mod geometry;
pub mod linalg;
pub mod matrix;
pub mod norm;
pub mod settings;
pub mod traits;

pub use linalg::LinalgError;
pub use matrix::Matrix;
pub use settings::Tolerances;
pub use traits::{FloatScalar, LinalgScalar, MatrixMut, MatrixRef, Scalar};

pub use num_complex::Complex;
