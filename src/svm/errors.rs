//! Errors for online SVM estimation (input validation, options checks, and
//! simulation failures).
//!
//! This module defines a single estimation error type, [`SVMError`], used
//! across the Python-facing API and the internal Rust core. It implements
//! `Display`/`Error` and converts to `PyErr` for PyO3.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Observation matrices must be **fully finite**; the first offending
//!   entry is reported with its row/column position.
//! - Shape checks run **before any accumulator mutation**, so a rejected
//!   input leaves no partial state behind.
//! - A singular Gram matrix is **not** an error: the solve step falls back
//!   to the minimum-norm pseudo-inverse solution.
#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;
use statrs::distribution::NormalError;

/// Crate-wide result alias for estimation operations that may produce
/// [`SVMError`].
pub type SVMResult<T> = Result<T, SVMError>;

/// Unified error type for online SVM estimation.
///
/// Covers observation-matrix validation, fit-option checks, and failures in
/// the synthetic data generator. Implements `Display`/`Error` and converts
/// to a Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum SVMError {
    // ---- Input/data validation ----
    /// Observation row width does not match the declared dimension + 1.
    ShapeMismatch { expected: usize, actual: usize },

    /// Fewer than two observations (the recursion seeds on row 0 and
    /// evaluates its first weight against row 1).
    InsufficientData { n_obs: usize },

    /// Declared feature dimension must be at least 1.
    InvalidDim { dim: usize },

    /// An observation entry is NaN/±inf.
    NonFiniteData { row: usize, col: usize, value: f64 },

    // ---- Options validation ----
    /// Smoothing constant ε must be finite and > 0.
    InvalidEpsilon { value: f64 },

    /// Sensitivity factor ρ must be finite and > 0.
    InvalidRho { value: f64 },

    // ---- Simulation ----
    /// Simulated sample size must be at least 2.
    InvalidSampleSize { n_obs: usize },

    /// Cluster separation must be finite and > 0.
    InvalidSeparation { value: f64 },

    /// Wrapper for statrs::distribution::NormalError.
    InvalidNormalParam,

    // ---- Fallback ----
    /// Catch-all for statrs errors with no dedicated variant.
    UnknownError,
}

impl std::error::Error for SVMError {}

impl std::fmt::Display for SVMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            SVMError::ShapeMismatch { expected, actual } => {
                write!(f, "Observation width mismatch: expected {expected} columns, got {actual}")
            }
            SVMError::InsufficientData { n_obs } => {
                write!(f, "At least 2 observations are required; got {n_obs}")
            }
            SVMError::InvalidDim { dim } => {
                write!(f, "Feature dimension must be at least 1; got {dim}")
            }
            SVMError::NonFiniteData { row, col, value } => {
                write!(f, "Observation entry at ({row}, {col}) is non-finite: {value}")
            }
            // ---- Options validation ----
            SVMError::InvalidEpsilon { value } => {
                write!(f, "epsilon must be finite and > 0; got: {value}")
            }
            SVMError::InvalidRho { value } => {
                write!(f, "rho must be finite and > 0; got: {value}")
            }
            // ---- Simulation ----
            SVMError::InvalidSampleSize { n_obs } => {
                write!(f, "Simulated sample size must be at least 2; got {n_obs}")
            }
            SVMError::InvalidSeparation { value } => {
                write!(f, "Cluster separation must be finite and > 0; got: {value}")
            }
            SVMError::InvalidNormalParam => {
                write!(f, "Normal distribution requires a finite mean and std dev > 0.")
            }
            SVMError::UnknownError => {
                write!(f, "An unknown error occurred during estimation.")
            }
        }
    }
}

/// Convert an [`SVMError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<SVMError> for PyErr {
    fn from(err: SVMError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

impl From<NormalError> for SVMError {
    fn from(err: NormalError) -> SVMError {
        match err {
            NormalError::MeanInvalid | NormalError::StandardDeviationInvalid => {
                SVMError::InvalidNormalParam
            }
            // NormalError is #[non_exhaustive].
            _ => SVMError::UnknownError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Display formatting of representative SVMError variants.
    // - Conversion from statrs NormalError into SVMError.
    //
    // They intentionally DO NOT cover:
    // - The call sites that produce each variant (tested alongside the
    //   validating constructors).
    // - PyErr conversion, which is exercised by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // The Display impl carries the offending values so error messages are
    // actionable without a debugger.
    //
    // Given
    // -----
    // - A ShapeMismatch and a NonFiniteData variant with known payloads.
    //
    // Expect
    // ------
    // - The rendered messages mention the expected/actual widths and the
    //   row/column position respectively.
    fn display_includes_offending_values() {
        // Arrange
        let shape = SVMError::ShapeMismatch { expected: 4, actual: 3 };
        let data = SVMError::NonFiniteData { row: 7, col: 1, value: f64::NAN };

        // Act
        let shape_msg = shape.to_string();
        let data_msg = data.to_string();

        // Assert
        assert!(shape_msg.contains('4') && shape_msg.contains('3'), "got: {shape_msg}");
        assert!(data_msg.contains('7') && data_msg.contains('1'), "got: {data_msg}");
        assert!(data_msg.contains("NaN"), "got: {data_msg}");
    }

    #[test]
    // Purpose
    // -------
    // `From<NormalError>` normalizes statrs failures to InvalidNormalParam.
    //
    // Given
    // -----
    // - NormalErrors produced by an invalid standard deviation and by a
    //   NaN mean.
    //
    // Expect
    // ------
    // - Both map to InvalidNormalParam rather than the fallback variant.
    fn normal_error_converts_to_invalid_normal_param() {
        // Arrange
        let bad_std = statrs::distribution::Normal::new(0.0, -1.0)
            .expect_err("negative std dev must be rejected by statrs");
        let bad_mean = statrs::distribution::Normal::new(f64::NAN, 1.0)
            .expect_err("NaN mean must be rejected by statrs");

        // Act
        let from_std: SVMError = bad_std.into();
        let from_mean: SVMError = bad_mean.into();

        // Assert
        assert_eq!(from_std, SVMError::InvalidNormalParam);
        assert_eq!(from_mean, SVMError::InvalidNormalParam);
    }
}
