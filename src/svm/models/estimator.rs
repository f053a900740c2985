//! Online majorize-minimize fitting of linear binary classifiers.
//!
//! This module wires the core primitives into the full per-observation
//! recursion: row 0 seeds the sufficient statistics, and each later row
//! triggers one weight evaluation, one statistics update, and one
//! regularized least-squares solve. The loop body is generic over the
//! loss's accumulation policy, so all three surrogate losses share one
//! driver.
//!
//! Key ideas:
//! - θ starts at the zero vector; no solve happens at the seed step.
//! - Additive-bias losses solve `θ = pinv(S + k·Ī)·(C + B)` with the lagged
//!   C vector composed from the θ in force at each absorption.
//! - The hinge loss folds its ridge into the Gram seed once and solves
//!   `θ = pinv(S)·B` thereafter.
//! - The pseudo-inverse system is rebuilt and redecomposed at every step;
//!   each solve is an O(d³) truncated eigendecomposition on a (d+1)-order
//!   symmetric matrix.
use crate::svm::{
    core::{
        accumulator::{AdditiveBiasStats, ReciprocalWeightStats},
        data::SVMData,
        loss::{AccumulationPolicy, Loss},
        options::FitOptions,
        solve::{pinv_solve, ridge_mask},
        trajectory::TrajectoryRecorder,
    },
    errors::SVMResult,
};
use ndarray::{Array1, Array2};

/// Fitted-model output bundle for one estimation call.
///
/// Carries the final parameter vector along with the recorded path, the
/// per-observation weight sequence, and the identifying metadata needed to
/// interpret them without the original inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct SVMFit {
    /// Final parameter vector `(intercept, slopes)` of length `dim + 1`.
    pub theta: Array1<f64>,
    /// Parameter path: `n_obs × (dim + 1)` when recording all steps,
    /// otherwise a single row equal to `theta`.
    pub theta_path: Array2<f64>,
    /// Per-observation weight sequence of length `n_obs` (ψ, ω, or χ
    /// values depending on the loss).
    pub weights: Array1<f64>,
    /// Surrogate loss the fit was run under.
    pub loss: Loss,
    /// Number of observations processed.
    pub n_obs: usize,
    /// Feature dimension (excluding the intercept).
    pub dim: usize,
}

/// Run the single-pass recursion over `data` under the given loss.
///
/// ## Steps
/// 1. Initialize θ = 0 and compute the seed weight at the zero parameter
///    vector (weight functions are row-independent there).
/// 2. Seed the loss's sufficient statistics with row 0; the hinge seed
///    additionally folds its constant ridge into the Gram sum.
/// 3. For each row `i ≥ 1`: evaluate the weight at the current θ, fold the
///    row into the statistics, solve the regularized system for the new θ,
///    and record it.
/// 4. Bundle the final θ, the path, and the weight sequence into an
///    [`SVMFit`].
///
/// ## Arguments
/// - `data`: validated, label-folded observations (N ≥ 2 rows of order
///   `dim + 1`).
/// - `loss`: surrogate loss selecting the weight function, accumulation
///   policy, and ridge scaling.
/// - `options`: validated ε, ρ, and path-recording mode.
///
/// ## Returns
/// - `Ok(SVMFit)` — the recursion itself is total on validated inputs;
///   singular Gram systems resolve to minimum-norm solutions rather than
///   errors.
///
/// ## Notes
/// - The run is fully deterministic given the row order of `data`.
/// - Cost is O(N·d³) from the per-step eigendecomposition, with O(d²)
///   statistics updates.
pub fn fit(data: &SVMData, loss: Loss, options: &FitOptions) -> SVMResult<SVMFit> {
    let n_obs = data.n_obs();
    let n_params = data.n_params();
    let mask = ridge_mask(n_params);

    let mut theta: Array1<f64> = Array1::zeros(n_params);
    let mut weights: Array1<f64> = Array1::zeros(n_obs);
    let mut recorder = TrajectoryRecorder::new(n_obs, n_params, options.record_all);

    weights[0] = loss.weight(theta.view(), data.row(1), options.epsilon);

    match loss.policy() {
        AccumulationPolicy::AdditiveBias => {
            let bias_scale = loss.bias_scale(options.rho);
            let ridge_strength = loss.ridge_strength(options.rho);
            let mut stats = AdditiveBiasStats::new(n_params);
            stats.absorb(data.row(0), bias_scale * weights[0], theta.view());
            for ii in 1..n_obs {
                let weight = loss.weight(theta.view(), data.row(ii), options.epsilon);
                weights[ii] = weight;
                stats.absorb(data.row(ii), bias_scale * weight, theta.view());
                let system = &stats.gram + &(ridge_strength * &mask);
                let rhs = &stats.lagged + &stats.bias;
                theta = pinv_solve(&system, rhs.view());
                recorder.record(ii, theta.view());
            }
        }
        AccumulationPolicy::ReciprocalWeight => {
            let ridge_strength = loss.ridge_strength(options.rho);
            let mut stats = ReciprocalWeightStats::new(n_params);
            stats.seed(data.row(0), weights[0], ridge_strength, &mask);
            for ii in 1..n_obs {
                let weight = loss.weight(theta.view(), data.row(ii), options.epsilon);
                weights[ii] = weight;
                stats.absorb(data.row(ii), weight);
                theta = pinv_solve(&stats.gram, stats.rhs.view());
                recorder.record(ii, theta.view());
            }
        }
    }

    let theta_path = recorder.into_path(theta.view());
    Ok(SVMFit { theta, theta_path, weights, loss, n_obs, dim: data.dim })
}

/// Fit under the squared-hinge surrogate; see [`fit`].
pub fn square_hinge(data: &SVMData, options: &FitOptions) -> SVMResult<SVMFit> {
    fit(data, Loss::SquareHinge, options)
}

/// Fit under the hinge surrogate; see [`fit`].
pub fn hinge(data: &SVMData, options: &FitOptions) -> SVMResult<SVMFit> {
    fit(data, Loss::Hinge, options)
}

/// Fit under the logistic surrogate; see [`fit`].
pub fn logistic(data: &SVMData, options: &FitOptions) -> SVMResult<SVMFit> {
    fit(data, Loss::Logistic, options)
}
