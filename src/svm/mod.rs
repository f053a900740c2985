//! svm — online majorize-minimize fitting of linear binary classifiers.
//!
//! Purpose
//! -------
//! Provide single-pass estimation of a linear classifier
//! `(intercept, slopes)` from a stream of label-folded observations under
//! three surrogate losses (squared-hinge, hinge, logistic). Each new
//! observation updates running sufficient statistics and triggers one
//! regularized least-squares solve, so the estimate is available after
//! every row without revisiting past data.
//!
//! Key behaviors
//! -------------
//! - Validated data ingestion ([`SVMData`]): rows `yᵢ·(1, xᵢ)` of order
//!   `d + 1`, finite, with N ≥ 2.
//! - Loss catalog ([`Loss`]) pairing each surrogate with its weight
//!   function, accumulation policy, and ridge scaling.
//! - Full recursion in [`models::fit`] with per-loss wrappers; output
//!   bundled as [`SVMFit`] (final θ, path, weight sequence).
//! - Synthetic two-cluster streams via [`simulate::generate_sim`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Fits are fully deterministic given the row order of the data; all
//!   state is private to a single call.
//! - The intercept coordinate is never penalized by the ridge.
//! - Singular Gram systems are not errors: solves return minimum-norm
//!   solutions via a truncated eigendecomposition.
//!
//! Conventions
//! -----------
//! - Errors are reported as [`SVMResult`] with struct-style [`SVMError`]
//!   variants; panics indicate programming errors, not bad user data.
//! - No I/O and no logging anywhere in this namespace; everything
//!   operates on `ndarray` containers and scalar values.
//!
//! Downstream usage
//! ----------------
//! - Build an [`SVMData`] (directly or with [`simulate::generate_sim`]),
//!   choose a [`Loss`] and [`FitOptions`], and call [`models::fit`] or a
//!   per-loss wrapper.
//! - Python bindings at the crate root wrap these entry points; they are
//!   expected to depend on the items re-exported below or the
//!   [`prelude`].
//!
//! Testing notes
//! -------------
//! - Submodule unit tests cover validation, weight functions, statistics
//!   algebra, solves, path recording, and the fit driver's contract.
//! - `tests/integration_svm_pipeline.rs` exercises simulated-stream
//!   pipelines end to end for all three losses.

pub mod core;
pub mod errors;
pub mod models;
pub mod simulate;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::data::SVMData;
pub use self::core::loss::{AccumulationPolicy, Loss};
pub use self::core::options::{DEFAULT_EPSILON, DEFAULT_RHO, FitOptions};
pub use self::errors::{SVMError, SVMResult};
pub use self::models::{SVMFit, fit, hinge, logistic, square_hinge};
pub use self::simulate::{SimOptions, generate_sim};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use stream_svm::svm::prelude::*;
//
// to import the main fitting surface in a single line.

pub mod prelude {
    pub use super::core::data::SVMData;
    pub use super::core::loss::Loss;
    pub use super::core::options::FitOptions;
    pub use super::errors::{SVMError, SVMResult};
    pub use super::models::{SVMFit, fit, hinge, logistic, square_hinge};
    pub use super::simulate::{SimOptions, generate_sim};
}
