//! models — user-facing streaming SVM fitting APIs.
//!
//! Purpose
//! -------
//! Expose the single-pass majorize-minimize fit driver and its per-loss
//! entry points, together with the [`SVMFit`] output bundle. This layer
//! sits on top of `svm::core`, wiring weights, sufficient statistics, and
//! solves into the full per-observation recursion.
//!
//! Key behaviors
//! -------------
//! - Provide the generic [`fit`] driver plus the thin wrappers
//!   [`square_hinge`], [`hinge`], and [`logistic`].
//! - Bundle the final parameter vector with the recorded path and the
//!   per-observation weight sequence in [`SVMFit`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs arrive as validated [`SVMData`] and [`FitOptions`]; the
//!   recursion itself is total and deterministic on such inputs.
//! - All recursion state lives inside a single `fit` call; fits on the
//!   same inputs never interfere.
//!
//! Downstream usage
//! ----------------
//! - Construct an [`SVMData`] (directly or via `svm::simulate`), pick a
//!   [`Loss`], and call [`fit`] or a per-loss wrapper with validated
//!   [`FitOptions`].
//! - Front-ends (Python bindings) are expected to depend mainly on the
//!   items re-exported below or via the [`prelude`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`estimator`] cover determinism, path/estimate
//!   consistency, minimal inputs, separable streams, and ρ damping.
//! - Integration tests exercise the full pipeline on simulated streams.
//!
//! [`SVMData`]: crate::svm::core::data::SVMData
//! [`FitOptions`]: crate::svm::core::options::FitOptions
//! [`Loss`]: crate::svm::core::loss::Loss

pub mod estimator;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::estimator::{SVMFit, fit, hinge, logistic, square_hinge};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use stream_svm::svm::models::prelude::*;
//
// to import the main fitting surface in a single line.

pub mod prelude {
    pub use super::estimator::{SVMFit, fit, hinge, logistic, square_hinge};
}
