//! core — shared data, losses, statistics, and solves for streaming SVMs.
//!
//! Purpose
//! -------
//! Collect the core building blocks for online majorize-minimize fitting
//! of linear binary classifiers: the label-folded data container, the
//! surrogate-loss catalog and its weight functions, running
//! sufficient-statistics accumulators, the regularized least-squares
//! solve, fitting options, and parameter-path recording. The model layer
//! builds the full recursion on top of these primitives.
//!
//! Key behaviors
//! -------------
//! - Define the validated observation container ([`SVMData`]) holding
//!   label-folded rows `yᵢ·(1, xᵢ)` of order `d + 1`.
//! - Catalog the supported surrogate losses ([`Loss`]) together with their
//!   weight functions, accumulation policies, bias scales, and ridge
//!   strengths.
//! - Implement the two sufficient-statistics patterns
//!   ([`AdditiveBiasStats`], [`ReciprocalWeightStats`]) and the truncated
//!   eigendecomposition solve ([`pinv_solve`]) with its intercept-sparing
//!   ridge mask ([`ridge_mask`]).
//! - Carry fitting configuration ([`FitOptions`]) and the parameter-path
//!   recorder ([`TrajectoryRecorder`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - Data stored in [`SVMData`] is finite and shape-checked at
//!   construction; core routines assume well-formed inputs.
//! - Loss weights are finite and strictly positive for all finite margins
//!   under positive ε, which keeps every accumulator update and solve
//!   total.
//! - The ridge never touches the intercept coordinate: the mask is the
//!   identity with its (0, 0) entry cleared.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; the intercept occupies coordinate 0
//!   of every row and parameter vector.
//! - This module avoids I/O and logging; it operates purely on `ndarray`
//!   containers and scalar values, with `nalgebra` confined to the solve.
//!   Error conditions are reported via `SVMResult`.
//!
//! Downstream usage
//! ----------------
//! - `svm::models` drives the full per-observation recursion over these
//!   primitives; `svm::simulate` produces [`SVMData`] for experiments.
//! - Callers are expected to depend on the re-exports below or the
//!   [`prelude`] rather than reaching into submodules directly.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover data validation and check ordering,
//!   weight-function values and totality, accumulator algebra, solve
//!   behavior on singular systems, and path-recording modes.
//! - Integration tests at the model layer exercise the full pipeline
//!   (data → weights → statistics → solve → path) for all three losses.

pub mod accumulator;
pub mod data;
pub mod loss;
pub mod options;
pub mod solve;
pub mod trajectory;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::accumulator::{AdditiveBiasStats, ReciprocalWeightStats};
pub use self::data::SVMData;
pub use self::loss::{AccumulationPolicy, Loss};
pub use self::options::{DEFAULT_EPSILON, DEFAULT_RHO, FitOptions};
pub use self::solve::{EIGEN_EPS, pinv_solve, ridge_mask};
pub use self::trajectory::TrajectoryRecorder;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use stream_svm::svm::core::prelude::*;
//
// to import the main core surface in a single line.

pub mod prelude {
    pub use super::accumulator::{AdditiveBiasStats, ReciprocalWeightStats};
    pub use super::data::SVMData;
    pub use super::loss::{AccumulationPolicy, Loss};
    pub use super::options::{DEFAULT_EPSILON, DEFAULT_RHO, FitOptions};
    pub use super::solve::{pinv_solve, ridge_mask};
    pub use super::trajectory::TrajectoryRecorder;
}
