//! Validated observation matrices for streaming SVM estimation.
//!
//! Purpose
//! -------
//! Provide a thin, validated wrapper around the dense N×(d+1) observation
//! matrix consumed by the recursive estimator. This type centralizes shape
//! and finiteness checks so downstream code can assume clean, label-signed
//! rows.
//!
//! Key behaviors
//! -------------
//! - Stores observations as an `ndarray::Array2<f64>` with one row per
//!   labeled point.
//! - Enforces the width contract (columns == dim + 1), the minimum sample
//!   size (N ≥ 2), and full finiteness at construction time via
//!   [`SVMData::new`].
//! - Exposes cheap row views for the per-observation recursion.
//!
//! Invariants & assumptions
//! ------------------------
//! - Column 0 of each row is the class label ±1 standing in for the
//!   intercept; columns 1..=d carry feature coordinates already multiplied by
//!   the label, so ⟨θ, row⟩ is the signed margin.
//! - Validation rejects the input **before** any estimator state exists, so
//!   a failed construction has no side effects.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based and uses standard `ndarray` semantics for views.
//! - This module contains no I/O and no logging; it only inspects numeric
//!   values and array shapes.
//!
//! Downstream usage
//! ----------------
//! - Build an `SVMData` from raw rows (or from [`generate_sim`]) and hand it
//!   to [`fit`] or one of the per-loss wrappers; the estimator relies on the
//!   invariants established here and does not re-validate.
//!
//! [`generate_sim`]: crate::svm::simulate::generate_sim
//! [`fit`]: crate::svm::models::estimator::fit
//!
//! Testing notes
//! -------------
//! - Unit tests cover acceptance of well-formed matrices and each rejection
//!   path (width mismatch, short sample, bad dimension, non-finite entry)
//!   with first-offender reporting.
use crate::svm::errors::{SVMError, SVMResult};
use ndarray::{Array2, ArrayView1};

/// `SVMData` — validated N×(d+1) matrix of label-signed observations.
///
/// Purpose
/// -------
/// Carry the full observation stream in the row layout the recursion
/// expects: intercept-bearing column 0 and label-signed features in columns
/// 1..=d.
///
/// Fields
/// ------
/// - `ymat`: `Array2<f64>`
///   Observation matrix; every entry is finite.
/// - `dim`: `usize`
///   Declared feature dimension d (so `ymat.ncols() == dim + 1`).
///
/// Invariants
/// ----------
/// - `ymat.nrows() >= 2`.
/// - `ymat.ncols() == dim + 1` with `dim >= 1`.
/// - All entries of `ymat` are finite.
///
/// Performance
/// -----------
/// - Validation is a single O(N·d) scan; after construction this is a
///   lightweight container with no hidden allocations.
#[derive(Debug, Clone, PartialEq)]
pub struct SVMData {
    /// Label-signed observation rows (must be fully finite).
    pub ymat: Array2<f64>,
    /// Declared feature dimension d.
    pub dim: usize,
}

impl SVMData {
    /// Construct a validated [`SVMData`] from a raw observation matrix.
    ///
    /// Parameters
    /// ----------
    /// - `ymat`: `Array2<f64>`
    ///   Raw observation matrix, one labeled point per row. Must have
    ///   `dim + 1` columns, at least 2 rows, and only finite entries.
    /// - `dim`: `usize`
    ///   Declared feature dimension d; must be at least 1.
    ///
    /// Returns
    /// -------
    /// `SVMResult<SVMData>`
    ///   - `Ok(SVMData)` if all invariants are satisfied.
    ///   - `Err(SVMError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `SVMError::InvalidDim { dim }`
    ///   Returned when `dim == 0`.
    /// - `SVMError::ShapeMismatch { expected, actual }`
    ///   Returned when `ymat.ncols() != dim + 1`. Raised before any other
    ///   data inspection.
    /// - `SVMError::InsufficientData { n_obs }`
    ///   Returned when `ymat.nrows() < 2`.
    /// - `SVMError::NonFiniteData { row, col, value }`
    ///   Returned when any entry is NaN or ±∞; `(row, col)` points to the
    ///   first offending entry.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `SVMError`.
    ///
    /// Notes
    /// -----
    /// - This constructor does not inspect the sign structure of the rows;
    ///   label folding is the caller's contract (column 0 should be ±1 and
    ///   features pre-multiplied by the label).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use stream_svm::svm::core::data::SVMData;
    /// #
    /// let ymat = array![[1.0, 2.0], [-1.0, 1.5]];
    /// let data = SVMData::new(ymat, 1).unwrap();
    /// assert_eq!(data.n_obs(), 2);
    /// ```
    pub fn new(ymat: Array2<f64>, dim: usize) -> SVMResult<Self> {
        if dim == 0 {
            return Err(SVMError::InvalidDim { dim });
        }
        if ymat.ncols() != dim + 1 {
            return Err(SVMError::ShapeMismatch { expected: dim + 1, actual: ymat.ncols() });
        }
        if ymat.nrows() < 2 {
            return Err(SVMError::InsufficientData { n_obs: ymat.nrows() });
        }

        for ((row, col), &value) in ymat.indexed_iter() {
            if !value.is_finite() {
                return Err(SVMError::NonFiniteData { row, col, value });
            }
        }

        Ok(SVMData { ymat, dim })
    }

    /// Number of observations N.
    pub fn n_obs(&self) -> usize {
        self.ymat.nrows()
    }

    /// Width of the parameter vector, dim + 1.
    pub fn n_params(&self) -> usize {
        self.dim + 1
    }

    /// View of the i-th observation row.
    pub fn row(&self, i: usize) -> ArrayView1<'_, f64> {
        self.ymat.row(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance of well-formed observation matrices.
    // - Rejection paths: dimension, width, sample size, and finiteness, with
    //   correct first-offender reporting and check ordering.
    //
    // They intentionally DO NOT cover:
    // - Estimation behavior on valid data (tested in models::estimator).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `SVMData::new` accepts a finite N×(d+1) matrix with N ≥ 2 and reports
    // the derived sizes through its accessors.
    //
    // Given
    // -----
    // - A 3×3 matrix with dim = 2.
    //
    // Expect
    // ------
    // - Construction succeeds; `n_obs() == 3`, `n_params() == 3`.
    fn new_accepts_well_formed_matrix() {
        // Arrange
        let ymat = array![[1.0, 2.0, 0.5], [-1.0, -1.5, 0.25], [1.0, 3.0, -0.75]];

        // Act
        let data = SVMData::new(ymat, 2).expect("well-formed matrix must be accepted");

        // Assert
        assert_eq!(data.n_obs(), 3);
        assert_eq!(data.n_params(), 3);
        assert_eq!(data.row(1)[0], -1.0);
    }

    #[test]
    // Purpose
    // -------
    // A zero feature dimension is rejected with InvalidDim.
    //
    // Given
    // -----
    // - Any matrix and dim = 0.
    //
    // Expect
    // ------
    // - `Err(SVMError::InvalidDim { dim: 0 })`.
    fn new_rejects_zero_dimension() {
        // Arrange
        let ymat = array![[1.0], [-1.0]];

        // Act
        let result = SVMData::new(ymat, 0);

        // Assert
        assert_eq!(result, Err(SVMError::InvalidDim { dim: 0 }));
    }

    #[test]
    // Purpose
    // -------
    // A width mismatch is rejected with ShapeMismatch before any other data
    // inspection (a NaN in the same matrix is never reported).
    //
    // Given
    // -----
    // - A 2×2 matrix containing a NaN, declared with dim = 2 (expects 3
    //   columns).
    //
    // Expect
    // ------
    // - `Err(SVMError::ShapeMismatch { expected: 3, actual: 2 })`.
    fn new_rejects_width_mismatch_before_scanning_values() {
        // Arrange
        let ymat = array![[1.0, f64::NAN], [-1.0, 0.5]];

        // Act
        let result = SVMData::new(ymat, 2);

        // Assert
        assert_eq!(result, Err(SVMError::ShapeMismatch { expected: 3, actual: 2 }));
    }

    #[test]
    // Purpose
    // -------
    // Fewer than two rows are rejected with InsufficientData.
    //
    // Given
    // -----
    // - A 1×2 matrix with dim = 1.
    //
    // Expect
    // ------
    // - `Err(SVMError::InsufficientData { n_obs: 1 })`.
    fn new_rejects_single_observation() {
        // Arrange
        let ymat = array![[1.0, 2.0]];

        // Act
        let result = SVMData::new(ymat, 1);

        // Assert
        assert_eq!(result, Err(SVMError::InsufficientData { n_obs: 1 }));
    }

    #[test]
    // Purpose
    // -------
    // Non-finite entries are rejected with the first offender's position.
    //
    // Given
    // -----
    // - A 2×2 matrix with +∞ at (1, 0).
    //
    // Expect
    // ------
    // - `Err(SVMError::NonFiniteData { row: 1, col: 0, .. })`.
    fn new_rejects_non_finite_entry_with_position() {
        // Arrange
        let ymat = array![[1.0, 2.0], [f64::INFINITY, 0.5]];

        // Act
        let result = SVMData::new(ymat, 1);

        // Assert
        match result {
            Err(SVMError::NonFiniteData { row, col, value }) => {
                assert_eq!(row, 1);
                assert_eq!(col, 0);
                assert!(value.is_infinite());
            }
            other => panic!("expected NonFiniteData error, got: {other:?}"),
        }
    }
}
