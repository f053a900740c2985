//! stream_svm — online SVM and logistic fitting with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the streaming majorize-minimize estimators to Python via the
//! `_stream_svm` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing functions and result
//! class used by the `stream_svm` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust namespace (`svm`) as the public crate
//!   surface.
//! - Define the `#[pyclass]` result wrapper [`SVMFitResult`], the
//!   per-loss `#[pyfunction]` entry points, the stream generator, and the
//!   `#[pymodule]` initializer for the `_stream_svm` extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in `svm::core` are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed defaults mirror the Rust defaults: `dim = 2`,
//!   `epsilon = 1e-5`, `return_all = False`, `rho = 1.0`.
//! - Errors from core Rust code are propagated as [`SVMError`] internally
//!   and converted to `ValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the `svm` namespace and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_stream_svm` module defined
//!   here and wraps it in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner
//!   modules and by `tests/integration_svm_pipeline.rs`; Python smoke
//!   tests verify that the binding functions accept arrays, sequences,
//!   and DataFrames and round-trip results correctly.
//!
//! [`SVMError`]: crate::svm::errors::SVMError

pub mod svm;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray2};

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    svm::{
        core::{loss::Loss, options::FitOptions},
        models::{self, SVMFit},
        simulate::{self, SimOptions},
    },
    utils::extract_svm_data,
};

/// SVMFitResult — Python-facing wrapper for a completed streaming fit.
///
/// Purpose
/// -------
/// Present the output bundle of one estimation run ([`SVMFit`]) to Python
/// code in a lightweight, read-only wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the final parameter vector, the recorded parameter path, the
///   per-observation weight sequence, and run metadata.
/// - Provide accessors that copy the underlying values into Python-owned
///   containers.
///
/// Parameters
/// ----------
/// Instances are constructed internally by the fitting functions and are
/// not created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`SVMFit`]
///   Full Rust-side fit result used by the accessors.
///
/// Notes
/// -----
/// - Native Rust code should prefer calling `svm::models::fit` directly;
///   this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "stream_svm")]
pub struct SVMFitResult {
    /// Underlying Rust fit bundle.
    inner: SVMFit,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl SVMFitResult {
    /// Final parameter vector `(intercept, slopes)` of length `dim + 1`.
    #[getter]
    pub fn theta(&self) -> Vec<f64> {
        self.inner.theta.to_vec()
    }

    /// Number of observations processed.
    #[getter]
    pub fn nn(&self) -> usize {
        self.inner.n_obs
    }

    /// Feature dimension (excluding the intercept).
    #[getter]
    pub fn dim(&self) -> usize {
        self.inner.dim
    }

    /// Parameter path: one row per observation when fitted with
    /// `return_all=True`, otherwise a single row equal to `theta`.
    #[getter]
    pub fn theta_list(&self) -> Vec<Vec<f64>> {
        let (n_rows, _) = self.inner.theta_path.dim();
        let mut out = Vec::with_capacity(n_rows);
        for i in 0..n_rows {
            out.push(self.inner.theta_path.row(i).to_vec());
        }
        out
    }

    /// Per-observation weight sequence (ψ, ω, or χ values depending on
    /// the loss).
    #[getter]
    pub fn weights(&self) -> Vec<f64> {
        self.inner.weights.to_vec()
    }

    /// Name of the surrogate loss the fit was run under.
    #[getter]
    pub fn loss(&self) -> String {
        self.inner.loss.to_string()
    }
}

#[cfg(feature = "python-bindings")]
fn run_fit<'py>(
    py: Python<'py>, ymat: &Bound<'py, PyAny>, loss: Loss, dim: usize, epsilon: f64,
    return_all: bool, rho: f64,
) -> PyResult<SVMFitResult> {
    let data = extract_svm_data(py, ymat, dim)?;
    let options = FitOptions::new(epsilon, rho, return_all)?;
    let fit = models::fit(&data, loss, &options)?;
    Ok(SVMFitResult { inner: fit })
}

/// Fit a linear classifier under the squared-hinge surrogate loss.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (ymat, dim = 2, epsilon = 1e-5, return_all = false, rho = 1.0),
    text_signature = "(ymat, /, dim=2, epsilon=1e-5, return_all=False, rho=1.0)"
)]
pub fn square_hinge<'py>(
    py: Python<'py>, ymat: &Bound<'py, PyAny>, dim: usize, epsilon: f64, return_all: bool,
    rho: f64,
) -> PyResult<SVMFitResult> {
    run_fit(py, ymat, Loss::SquareHinge, dim, epsilon, return_all, rho)
}

/// Fit a linear classifier under the hinge surrogate loss.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (ymat, dim = 2, epsilon = 1e-5, return_all = false, rho = 1.0),
    text_signature = "(ymat, /, dim=2, epsilon=1e-5, return_all=False, rho=1.0)"
)]
pub fn hinge<'py>(
    py: Python<'py>, ymat: &Bound<'py, PyAny>, dim: usize, epsilon: f64, return_all: bool,
    rho: f64,
) -> PyResult<SVMFitResult> {
    run_fit(py, ymat, Loss::Hinge, dim, epsilon, return_all, rho)
}

/// Fit a linear classifier under the logistic surrogate loss.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (ymat, dim = 2, epsilon = 1e-5, return_all = false, rho = 1.0),
    text_signature = "(ymat, /, dim=2, epsilon=1e-5, return_all=False, rho=1.0)"
)]
pub fn logistic<'py>(
    py: Python<'py>, ymat: &Bound<'py, PyAny>, dim: usize, epsilon: f64, return_all: bool,
    rho: f64,
) -> PyResult<SVMFitResult> {
    run_fit(py, ymat, Loss::Logistic, dim, epsilon, return_all, rho)
}

/// Generate a label-folded synthetic two-cluster stream as an
/// `n × (dim + 1)` numpy array.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (n, dim = 2, seed = None, separation = 2.0),
    text_signature = "(n, /, dim=2, seed=None, separation=2.0)"
)]
pub fn generate_sim<'py>(
    py: Python<'py>, n: usize, dim: usize, seed: Option<u64>, separation: f64,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let options = SimOptions::new(seed, separation)?;
    let data = simulate::generate_sim(n, dim, &options)?;
    Ok(data.ymat.into_pyarray(py))
}

/// _stream_svm — PyO3 module initializer for the Python extension.
///
/// Registers the fitting functions, the stream generator, and the result
/// class on the `_stream_svm` module. Invoked automatically by Python
/// when importing the compiled extension; not called directly by user
/// code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _stream_svm<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<SVMFitResult>()?;
    m.add_function(wrap_pyfunction!(square_hinge, m)?)?;
    m.add_function(wrap_pyfunction!(hinge, m)?)?;
    m.add_function(wrap_pyfunction!(logistic, m)?)?;
    m.add_function(wrap_pyfunction!(generate_sim, m)?)?;
    Ok(())
}
