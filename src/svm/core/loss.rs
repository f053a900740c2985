//! Surrogate-loss weights for the majorize-minimize recursion.
//!
//! Each supported loss admits a quadratic majorizer whose curvature enters
//! the recursion through a single scalar weight per observation, evaluated
//! at the current parameters. The three weights here follow the MM
//! derivations for the squared-hinge, hinge, and logistic losses; ε keeps
//! the ε-shifted square roots away from zero near the margin boundary.
//!
//! # Provided items
//! - [`Loss`]: variant tag selecting the surrogate and its accumulation
//!   policy, plus the loss-specific constants the solve step needs.
//! - [`AccumulationPolicy`]: which sufficient-statistics pattern the
//!   variant's solve consumes.
//! - [`square_hinge_weight`], [`hinge_weight`], [`logistic_weight`]: pure
//!   scalar functions of (θ, row, ε).
//! - [`safe_neg_sigmoid`]: overflow-free σ(−m) used by the logistic weight,
//!   following the guarded-branch strategy common in ML libraries.
//!
//! # Rationale
//! All weights are total over ℝ-valued margins: the square roots act on
//! ε-shifted non-negative terms and the sigmoid never exponentiates a
//! positive argument, so no input produces NaN or ±∞.
use ndarray::ArrayView1;

/// Surrogate loss variant driving the recursion.
///
/// Each variant pairs a weight function with the accumulation pattern and
/// the ridge/bias constants its closed-form solve was derived with; the
/// constants are fixed by the MM derivation and scale only through the
/// user's sensitivity factor ρ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loss {
    /// Squared-hinge loss, majorized by the ψ weight.
    SquareHinge,
    /// Plain hinge loss, majorized by the ω weight (used reciprocally).
    Hinge,
    /// Logistic loss, majorized by the χ weight.
    Logistic,
}

/// Sufficient-statistics pattern consumed by a variant's solve step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccumulationPolicy {
    /// Unweighted Gram sum, a scaled bias vector, and a lagged-θ vector
    /// (squared-hinge, logistic).
    AdditiveBias,
    /// Reciprocal-weighted Gram sum and a combined right-hand side, both
    /// recomputed with the current weight (hinge).
    ReciprocalWeight,
}

impl Loss {
    /// Evaluate this variant's majorizer weight at (θ, row, ε).
    pub fn weight(&self, theta: ArrayView1<f64>, row: ArrayView1<f64>, epsilon: f64) -> f64 {
        match self {
            Loss::SquareHinge => square_hinge_weight(theta, row, epsilon),
            Loss::Hinge => hinge_weight(theta, row, epsilon),
            Loss::Logistic => logistic_weight(theta, row),
        }
    }

    /// Accumulation pattern this variant's solve consumes.
    pub fn policy(&self) -> AccumulationPolicy {
        match self {
            Loss::SquareHinge | Loss::Logistic => AccumulationPolicy::AdditiveBias,
            Loss::Hinge => AccumulationPolicy::ReciprocalWeight,
        }
    }

    /// Scale applied to each weight when folded into the bias accumulator
    /// (additive-bias variants only; the hinge rhs carries its own form).
    pub fn bias_scale(&self, rho: f64) -> f64 {
        match self {
            Loss::SquareHinge => 0.5 / rho,
            Loss::Logistic => 4.0 / rho,
            Loss::Hinge => 0.0,
        }
    }

    /// Effective ridge strength added at each solve. λ·N = 1 by
    /// construction, so the squared-hinge and logistic strengths are 1/ρ
    /// and 8/ρ; the hinge ridge is the fixed 4λN folded into its Gram seed
    /// and does not scale with ρ.
    pub fn ridge_strength(&self, rho: f64) -> f64 {
        match self {
            Loss::SquareHinge => 1.0 / rho,
            Loss::Logistic => 8.0 / rho,
            Loss::Hinge => 4.0,
        }
    }

    /// Diagnostic name of this variant's weight sequence.
    pub fn weight_name(&self) -> &'static str {
        match self {
            Loss::SquareHinge => "psi",
            Loss::Hinge => "omega",
            Loss::Logistic => "chi",
        }
    }
}

impl std::fmt::Display for Loss {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Loss::SquareHinge => write!(f, "square_hinge"),
            Loss::Hinge => write!(f, "hinge"),
            Loss::Logistic => write!(f, "logistic"),
        }
    }
}

/// ψ weight majorizing the squared-hinge loss.
///
/// With margin `m = ⟨θ, row⟩` and `u = sqrt((1 − m)² + ε)`, computes
/// `(u + 1 − m)² / (2u)`. ε > 0 keeps the denominator away from zero when
/// the margin sits on the boundary `m = 1`.
///
/// # Parameters
/// - `theta`: current parameter vector, length d+1.
/// - `row`: label-signed observation row, length d+1.
/// - `epsilon`: smoothing constant, finite and > 0.
///
/// # Returns
/// - The scalar ψ weight; finite and strictly positive for all real margins.
pub fn square_hinge_weight(theta: ArrayView1<f64>, row: ArrayView1<f64>, epsilon: f64) -> f64 {
    let margin = theta.dot(&row);
    let gap = 1.0 - margin;
    let root = (gap * gap + epsilon).sqrt();
    (root + gap) * (root + gap) / (2.0 * root)
}

/// ω weight majorizing the hinge loss.
///
/// Computes `sqrt((1 − m)² + ε)` for margin `m = ⟨θ, row⟩`; consumed as a
/// reciprocal weight inside the hinge weighted-least-squares system, so it
/// must stay strictly positive — which ε > 0 guarantees.
pub fn hinge_weight(theta: ArrayView1<f64>, row: ArrayView1<f64>, epsilon: f64) -> f64 {
    let gap = 1.0 - theta.dot(&row);
    (gap * gap + epsilon).sqrt()
}

/// χ weight majorizing the logistic loss: `σ(−m)` for margin `m`.
///
/// Evaluated through [`safe_neg_sigmoid`], which is algebraically identical
/// to `exp(−m) / (1 + exp(−m))` but never overflows for large |m|.
pub fn logistic_weight(theta: ArrayView1<f64>, row: ArrayView1<f64>) -> f64 {
    safe_neg_sigmoid(theta.dot(&row))
}

/// Numerically stable `σ(−m) = exp(−m) / (1 + exp(−m))`.
///
/// The naive form overflows for large negative `m`. This implementation
/// picks the branch whose exponent is non-positive:
///
/// - For `m ≥ 0`, `σ(−m) = 1 / (1 + exp(m))` would overflow instead, so it
///   uses `e = exp(−m)` and returns `e / (1 + e)`.
/// - For `m < 0`, it returns `1 / (1 + exp(m))`.
///
/// Both branches agree exactly with the naive value wherever the naive
/// value is representable, and saturate to 1 (resp. 0) in the tails.
pub fn safe_neg_sigmoid(m: f64) -> f64 {
    if m >= 0.0 {
        let e = (-m).exp();
        e / (1.0 + e)
    } else {
        1.0 / (1.0 + m.exp())
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
    // - Weight values at hand-computable margins (θ = 0 and a unit margin).
    // - Totality of the weights over extreme margins (no NaN/overflow),
    //   including the guarded sigmoid tails.
    // - The per-loss constant tables (policy, bias scale, ridge strength).
    //
    // They intentionally DO NOT cover:
    // - How the weights enter the accumulators (tested in core::accumulator
    //   and models::estimator).
    // -------------------------------------------------------------------------

    const EPS: f64 = 1e-5;

    #[test]
    // Purpose
    // -------
    // At θ = 0 every margin is 0, so all three weights take their
    // closed-form zero-margin values regardless of the row.
    //
    // Given
    // -----
    // - θ = 0, two very different rows, ε = 1e-5.
    //
    // Expect
    // ------
    // - ψ = (u + 1)²/(2u) with u = sqrt(1 + ε), ω = sqrt(1 + ε), χ = 1/2,
    //   identically for both rows.
    fn weights_at_zero_theta_are_row_independent() {
        // Arrange
        let theta = array![0.0, 0.0, 0.0];
        let row_a = array![1.0, 2.0, -3.0];
        let row_b = array![-1.0, 100.0, 0.25];

        let u = (1.0_f64 + EPS).sqrt();
        let psi_expected = (u + 1.0) * (u + 1.0) / (2.0 * u);

        // Act & Assert
        for row in [&row_a, &row_b] {
            let psi = square_hinge_weight(theta.view(), row.view(), EPS);
            let omega = hinge_weight(theta.view(), row.view(), EPS);
            let chi = logistic_weight(theta.view(), row.view());

            assert!((psi - psi_expected).abs() < 1e-12);
            assert!((omega - u).abs() < 1e-12);
            assert!((chi - 0.5).abs() < 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // On the margin boundary m = 1 the ε shift keeps ψ and ω well-defined.
    //
    // Given
    // -----
    // - θ and row chosen so ⟨θ, row⟩ = 1, ε = 1e-5.
    //
    // Expect
    // ------
    // - ω = sqrt(ε); ψ = sqrt(ε)/2 (since gap = 0); both finite and > 0.
    fn weights_on_margin_boundary_stay_finite() {
        // Arrange
        let theta = array![0.5, 0.5];
        let row = array![1.0, 1.0]; // margin = 1

        // Act
        let psi = square_hinge_weight(theta.view(), row.view(), EPS);
        let omega = hinge_weight(theta.view(), row.view(), EPS);

        // Assert
        let root = EPS.sqrt();
        assert!((omega - root).abs() < 1e-15);
        assert!((psi - root / 2.0).abs() < 1e-15);
    }

    #[test]
    // Purpose
    // -------
    // All three weights remain finite over extreme margins; the guarded
    // sigmoid saturates instead of overflowing.
    //
    // Given
    // -----
    // - Margins of ±1e4 realized through a scalar θ and row.
    //
    // Expect
    // ------
    // - ψ and ω finite and positive at both extremes.
    // - χ ≈ 1 at margin −1e4 and ≈ 0 at margin +1e4, with no NaN.
    fn weights_are_total_over_extreme_margins() {
        // Arrange
        let theta = array![1.0];
        let row_pos = array![1.0e4];
        let row_neg = array![-1.0e4];

        // Act
        let psi_pos = square_hinge_weight(theta.view(), row_pos.view(), EPS);
        let psi_neg = square_hinge_weight(theta.view(), row_neg.view(), EPS);
        let omega_pos = hinge_weight(theta.view(), row_pos.view(), EPS);
        let omega_neg = hinge_weight(theta.view(), row_neg.view(), EPS);
        let chi_pos = logistic_weight(theta.view(), row_pos.view());
        let chi_neg = logistic_weight(theta.view(), row_neg.view());

        // Assert
        for w in [psi_pos, psi_neg, omega_pos, omega_neg] {
            assert!(w.is_finite() && w > 0.0, "weight must stay finite and positive, got {w}");
        }
        assert!((chi_neg - 1.0).abs() < 1e-12, "sigmoid must saturate to 1, got {chi_neg}");
        assert!(chi_pos.abs() < 1e-12, "sigmoid must saturate to 0, got {chi_pos}");
        assert!(!chi_pos.is_nan() && !chi_neg.is_nan());
    }

    #[test]
    // Purpose
    // -------
    // The guarded sigmoid agrees with the naive formula in the ordinary
    // margin range where the naive formula is well-conditioned.
    //
    // Given
    // -----
    // - Margins spread over [−30, 30].
    //
    // Expect
    // ------
    // - |safe − naive| below 1e-15 at every point.
    fn safe_neg_sigmoid_matches_naive_in_typical_range() {
        for i in -30..=30 {
            let m = i as f64;
            let naive = (-m).exp() / (1.0 + (-m).exp());
            let safe = safe_neg_sigmoid(m);
            assert!((safe - naive).abs() < 1e-15, "mismatch at m = {m}: {safe} vs {naive}");
        }
    }

    #[test]
    // Purpose
    // -------
    // The per-loss constant tables match the MM derivations: accumulation
    // policy, bias scale, ridge strength (with its ρ scaling), and the
    // diagnostic weight names.
    //
    // Given
    // -----
    // - ρ = 2.0.
    //
    // Expect
    // ------
    // - SquareHinge: AdditiveBias, bias 0.25, ridge 0.5, name "psi".
    // - Logistic: AdditiveBias, bias 2.0, ridge 4.0, name "chi".
    // - Hinge: ReciprocalWeight, ridge fixed at 4.0 (ρ-independent),
    //   name "omega".
    fn loss_constant_tables_match_derivation() {
        // Arrange
        let rho = 2.0;

        // Assert
        assert_eq!(Loss::SquareHinge.policy(), AccumulationPolicy::AdditiveBias);
        assert_eq!(Loss::Logistic.policy(), AccumulationPolicy::AdditiveBias);
        assert_eq!(Loss::Hinge.policy(), AccumulationPolicy::ReciprocalWeight);

        assert_eq!(Loss::SquareHinge.bias_scale(rho), 0.25);
        assert_eq!(Loss::Logistic.bias_scale(rho), 2.0);

        assert_eq!(Loss::SquareHinge.ridge_strength(rho), 0.5);
        assert_eq!(Loss::Logistic.ridge_strength(rho), 4.0);
        assert_eq!(Loss::Hinge.ridge_strength(rho), 4.0);
        assert_eq!(Loss::Hinge.ridge_strength(10.0), 4.0);

        assert_eq!(Loss::SquareHinge.weight_name(), "psi");
        assert_eq!(Loss::Hinge.weight_name(), "omega");
        assert_eq!(Loss::Logistic.weight_name(), "chi");
    }
}
