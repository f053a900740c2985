//! Running sufficient statistics for the per-observation recursion.
//!
//! Purpose
//! -------
//! Hold and incrementally update the matrix/vector sums that fully
//! determine the next parameter solve without revisiting raw past rows.
//! Two structurally similar but algebraically distinct patterns exist, one
//! per accumulation policy.
//!
//! Key behaviors
//! -------------
//! - [`AdditiveBiasStats`] (squared-hinge, logistic): an **unweighted**
//!   Gram sum `S = Σ rᵢᵀrᵢ`, a bias vector `B = Σ rᵢ · (c·wᵢ)` growing
//!   with the loss-specific scale `c`, and a lagged vector
//!   `C = Σ (rᵢᵀrᵢ) · θ_old,i` where each increment uses the θ that was
//!   current when the row was absorbed.
//! - [`ReciprocalWeightStats`] (hinge): a reciprocal-weighted Gram sum
//!   `S = Σ rᵢᵀrᵢ/wᵢ` carrying the ridge folded into its seed, and a
//!   combined right-hand side `B = Σ rᵢ·(1 + wᵢ)/wᵢ`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Every `absorb` adds exactly one rank-1 term, so the Gram matrices stay
//!   symmetric and grow monotonically in the Loewner order (the hinge Gram
//!   additionally carries its constant PSD ridge seed).
//! - The lagged composition in `C` is intentional: multiplying the
//!   *incremental* outer product by the θ in force at absorption time keeps
//!   the recursion linear without re-touching old rows. Callers must absorb
//!   a row **before** replacing θ with the new solve.
//! - Hinge weights are strictly positive (ε-shifted square roots), so the
//!   reciprocal scalings are always finite.
//!
//! Conventions
//! -----------
//! - All state is owned by the accumulator and private to one estimation
//!   call; there is no shared or process-wide mutable state.
//! - Cost per `absorb` is O(d²) for the outer product and O(d) for the
//!   vector terms.
//!
//! Testing notes
//! -------------
//! - Unit tests check single-row absorption against hand-computed sums,
//!   the lagged (not latest-θ) composition of `C`, and Loewner-order
//!   growth of the Gram quadratic form.
use ndarray::{Array1, Array2, ArrayView1};

/// Sufficient statistics for the additive-bias pattern (squared-hinge and
/// logistic losses).
///
/// Fields
/// ------
/// - `gram`: plain outer-product sum `S = Σ rᵢᵀrᵢ` (no weight).
/// - `bias`: scaled weight vector `B = Σ rᵢ · (c·wᵢ)`.
/// - `lagged`: lagged-θ vector `C = Σ (rᵢᵀrᵢ) · θ_old,i`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdditiveBiasStats {
    pub gram: Array2<f64>,
    pub bias: Array1<f64>,
    pub lagged: Array1<f64>,
}

impl AdditiveBiasStats {
    /// Zero-initialized statistics of order `n_params = d + 1`.
    pub fn new(n_params: usize) -> Self {
        AdditiveBiasStats {
            gram: Array2::zeros((n_params, n_params)),
            bias: Array1::zeros(n_params),
            lagged: Array1::zeros(n_params),
        }
    }

    /// Fold one row into the running sums.
    ///
    /// Parameters
    /// ----------
    /// - `row`: the new observation row rᵢ.
    /// - `scaled_weight`: the already-scaled weight `c·wᵢ` (the bias scale
    ///   `c` is loss-specific and carried by [`Loss::bias_scale`]).
    /// - `theta_old`: the parameter vector current **at absorption time**;
    ///   the lagged term uses this value, never a later θ.
    ///
    /// Notes
    /// -----
    /// - The lagged increment `(rᵢᵀrᵢ)·θ_old` is accumulated as
    ///   `rᵢ·⟨rᵢ, θ_old⟩`, the same rank-1 product with one fewer pass.
    ///
    /// [`Loss::bias_scale`]: crate::svm::core::loss::Loss::bias_scale
    pub fn absorb(&mut self, row: ArrayView1<f64>, scaled_weight: f64, theta_old: ArrayView1<f64>) {
        let n = row.len();
        for i in 0..n {
            for j in 0..n {
                self.gram[[i, j]] += row[i] * row[j];
            }
        }
        let inner = row.dot(&theta_old);
        for i in 0..n {
            self.bias[i] += row[i] * scaled_weight;
            self.lagged[i] += row[i] * inner;
        }
    }
}

/// Sufficient statistics for the reciprocal-weight pattern (hinge loss).
///
/// Fields
/// ------
/// - `gram`: reciprocal-weighted outer-product sum plus the ridge folded
///   into the seed, `S = r₀ᵀr₀ + 4·Ī + Σ_{i≥1} rᵢᵀrᵢ/wᵢ`.
/// - `rhs`: combined right-hand side `B = Σ rᵢ·(1 + wᵢ)/wᵢ`.
///
/// The seed row's Gram term is deliberately **not** reciprocal-weighted
/// while its rhs term is; see [`ReciprocalWeightStats::seed`].
#[derive(Debug, Clone, PartialEq)]
pub struct ReciprocalWeightStats {
    pub gram: Array2<f64>,
    pub rhs: Array1<f64>,
}

impl ReciprocalWeightStats {
    /// Zero-initialized statistics of order `n_params = d + 1`.
    pub fn new(n_params: usize) -> Self {
        ReciprocalWeightStats {
            gram: Array2::zeros((n_params, n_params)),
            rhs: Array1::zeros(n_params),
        }
    }

    /// Seed the statistics with row 0 and the ridge term.
    ///
    /// The seed adds `r₀ᵀr₀ + ridge_strength·mask` to the Gram sum (the
    /// seed outer product carries no `1/w₀` factor, unlike every later
    /// row) and `r₀·(1 + w₀)/w₀` to the rhs, which does.
    pub fn seed(
        &mut self, row: ArrayView1<f64>, weight: f64, ridge_strength: f64, mask: &Array2<f64>,
    ) {
        let n = row.len();
        for i in 0..n {
            for j in 0..n {
                self.gram[[i, j]] += row[i] * row[j] + ridge_strength * mask[[i, j]];
            }
        }
        let scale = (1.0 + weight) / weight;
        for i in 0..n {
            self.rhs[i] += row[i] * scale;
        }
    }

    /// Fold one post-seed row into the running sums with the current
    /// weight (no lag: the hinge solve needs no old/new θ decomposition).
    pub fn absorb(&mut self, row: ArrayView1<f64>, weight: f64) {
        let n = row.len();
        let inv = 1.0 / weight;
        for i in 0..n {
            for j in 0..n {
                self.gram[[i, j]] += row[i] * row[j] * inv;
            }
        }
        let scale = (1.0 + weight) * inv;
        for i in 0..n {
            self.rhs[i] += row[i] * scale;
        }
    }
}
