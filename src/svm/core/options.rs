//! Estimation-time configuration for the recursive SVM fit.
//!
//! Purpose
//! -------
//! Bundle the scalar knobs of one estimation call — smoothing constant ε,
//! sensitivity factor ρ, and the trajectory-recording switch — behind a
//! validated constructor so the estimator never sees an out-of-domain
//! value.
//!
//! Key behaviors
//! -------------
//! - [`FitOptions::new`] validates ε and ρ (finite, strictly positive) and
//!   packages the recording flag.
//! - [`FitOptions::default`] carries the conventional defaults: ε = 1e-5,
//!   ρ = 1.0, recording off.
//!
//! Conventions
//! -----------
//! - Public APIs accept a `FitOptions` rather than loose scalars, mirroring
//!   how estimation configuration is passed elsewhere in the crate.
//! - No cross-field constraints exist; each field is validated on its own.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the default values and each rejection path for ε and
//!   ρ (zero, negative, NaN, ±∞).
use crate::svm::errors::{SVMError, SVMResult};

/// Default smoothing constant ε.
pub const DEFAULT_EPSILON: f64 = 1e-5;

/// Default sensitivity factor ρ.
pub const DEFAULT_RHO: f64 = 1.0;

/// FitOptions — validated per-call estimation configuration.
///
/// Fields
/// ------
/// - `epsilon`: `f64`
///   Smoothing constant ε inside the ε-shifted square roots of the hinge
///   family weights; finite and strictly positive.
/// - `rho`: `f64`
///   Sensitivity factor ρ governing how strongly a new observation perturbs
///   the fit (larger ρ damps the per-observation update); finite and
///   strictly positive.
/// - `record_all`: `bool`
///   When true, the trajectory matrix keeps θ after every observation
///   (O(N·d) extra memory); when false it holds only the final θ.
///
/// Invariants
/// ----------
/// - `epsilon` and `rho` are finite and > 0 whenever the value was built
///   through [`FitOptions::new`] or [`FitOptions::default`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitOptions {
    /// Smoothing constant ε (finite, > 0).
    pub epsilon: f64,
    /// Sensitivity factor ρ (finite, > 0).
    pub rho: f64,
    /// Record θ at every iteration instead of only the final value.
    pub record_all: bool,
}

impl FitOptions {
    /// Construct validated estimation options.
    ///
    /// Parameters
    /// ----------
    /// - `epsilon`: `f64`
    ///   Smoothing constant; must be finite and strictly positive.
    /// - `rho`: `f64`
    ///   Sensitivity factor; must be finite and strictly positive.
    /// - `record_all`: `bool`
    ///   Full-trajectory recording switch.
    ///
    /// Returns
    /// -------
    /// `SVMResult<FitOptions>`
    ///   - `Ok(FitOptions)` when both scalars are in domain.
    ///   - `Err(SVMError::InvalidEpsilon)` / `Err(SVMError::InvalidRho)`
    ///     otherwise, carrying the offending value.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(epsilon: f64, rho: f64, record_all: bool) -> SVMResult<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(SVMError::InvalidEpsilon { value: epsilon });
        }
        if !rho.is_finite() || rho <= 0.0 {
            return Err(SVMError::InvalidRho { value: rho });
        }
        Ok(FitOptions { epsilon, rho, record_all })
    }
}

impl Default for FitOptions {
    /// Conventional defaults: ε = 1e-5, ρ = 1.0, recording off.
    fn default() -> Self {
        FitOptions { epsilon: DEFAULT_EPSILON, rho: DEFAULT_RHO, record_all: false }
    }
}
