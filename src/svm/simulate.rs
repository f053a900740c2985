//! Synthetic two-cluster streams for streaming SVM experiments.
//!
//! Purpose
//! -------
//! Generate label-folded observation matrices from a simple Gaussian
//! mixture: labels ±1 with equal probability, features drawn from
//! `N(y·δ·1, I_d)` so the two classes sit `2δ` apart along the diagonal.
//! Output arrives as a validated [`SVMData`], ready for any fit entry
//! point.
//!
//! Key behaviors
//! -------------
//! - Reproducible by default: [`SimOptions::default`] carries a fixed
//!   seed; `seed: None` delegates to system entropy.
//! - The label is folded into every coordinate of the emitted row, so a
//!   row reads `y·(1, x)` and a positive inner product with any θ means a
//!   correct classification.
//!
//! Conventions
//! -----------
//! - RNG state is local to one [`generate_sim`] call; no global state.
//! - Draws are consumed in a fixed order (label, then features left to
//!   right), so equal seeds give bitwise-equal output.
use crate::svm::{
    core::data::SVMData,
    errors::{SVMError, SVMResult},
};
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};
use statrs::distribution::Normal;

/// Default cluster half-separation δ.
pub const DEFAULT_SEPARATION: f64 = 2.0;

/// SimOptions — configuration for synthetic stream generation.
///
/// Fields
/// ------
/// - `seed`: `Option<u64>`
///   Optional RNG seed. `Some(seed)` yields reproducible runs; `None`
///   delegates to system entropy.
/// - `separation`: `f64`
///   Cluster half-separation δ > 0; class means sit at `±δ·1`.
///
/// Notes
/// -----
/// - The default is geared toward reproducible experiments:
///   `seed = Some(42)`, `separation = 2.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct SimOptions {
    /// Optional RNG seed for reproducibility.
    pub seed: Option<u64>,
    /// Cluster half-separation δ.
    pub separation: f64,
}

impl SimOptions {
    /// Construct validated simulation options.
    ///
    /// # Errors
    /// Returns [`SVMError::InvalidSeparation`] if `separation` is not
    /// finite or ≤ 0.
    pub fn new(seed: Option<u64>, separation: f64) -> SVMResult<Self> {
        if !separation.is_finite() || separation <= 0.0 {
            return Err(SVMError::InvalidSeparation { value: separation });
        }
        Ok(SimOptions { seed, separation })
    }
}

impl Default for SimOptions {
    fn default() -> Self {
        SimOptions { seed: Some(42), separation: DEFAULT_SEPARATION }
    }
}

/// Generate a label-folded synthetic stream of `n` observations in `dim`
/// feature dimensions.
///
/// ## Behavior
/// 1. Draw a label `y ∈ {−1, +1}` with equal probability.
/// 2. Draw features `x ~ N(y·δ·1, I_d)` coordinate by coordinate.
/// 3. Emit the folded row `y·(1, x)`.
/// 4. Validate and wrap the matrix as an [`SVMData`].
///
/// ## Arguments
/// - `n`: number of observations (≥ 2).
/// - `dim`: feature dimension `d` (≥ 1).
/// - `options`: seed policy and cluster separation.
///
/// ## Returns
/// A validated `n × (dim + 1)` [`SVMData`].
///
/// ## Errors
/// - [`SVMError::InvalidSampleSize`] if `n < 2`.
/// - [`SVMError::InvalidDim`] if `dim < 1`.
/// - [`SVMError::InvalidNormalParam`] if the unit-normal constructor
///   rejects its parameters (never happens for the fixed (δ, 1) family,
///   kept to avoid panicking conversions).
pub fn generate_sim(n: usize, dim: usize, options: &SimOptions) -> SVMResult<SVMData> {
    if n < 2 {
        return Err(SVMError::InvalidSampleSize { n_obs: n });
    }
    if dim < 1 {
        return Err(SVMError::InvalidDim { dim });
    }
    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let positive = Normal::new(options.separation, 1.0)?;
    let negative = Normal::new(-options.separation, 1.0)?;

    let mut ymat = Array2::zeros((n, dim + 1));
    for i in 0..n {
        let label = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let cluster = if label > 0.0 { &positive } else { &negative };
        ymat[[i, 0]] = label;
        for j in 0..dim {
            let feature: f64 = rng.sample(cluster);
            ymat[[i, j + 1]] = label * feature;
        }
    }
    SVMData::new(ymat, dim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Equal seeds give bitwise-equal streams; distinct seeds differ.
    //
    // Given
    // -----
    // - Three generations: seeds 7, 7, and 8 with identical geometry.
    //
    // Expect
    // ------
    // - The first two matrices compare equal; the third differs.
    fn fixed_seed_reproduces_stream_exactly() {
        // Arrange
        let opts_a = SimOptions::new(Some(7), 2.0).unwrap();
        let opts_b = SimOptions::new(Some(8), 2.0).unwrap();

        // Act
        let first = generate_sim(50, 3, &opts_a).unwrap();
        let second = generate_sim(50, 3, &opts_a).unwrap();
        let third = generate_sim(50, 3, &opts_b).unwrap();

        // Assert
        assert_eq!(first.ymat, second.ymat);
        assert_ne!(first.ymat, third.ymat);
    }

    #[test]
    // Purpose
    // -------
    // Generated streams are well-formed: correct shape, ±1 label column,
    // and all entries finite.
    //
    // Given
    // -----
    // - A default-options stream of 200 observations in 2 dimensions.
    //
    // Expect
    // ------
    // - Shape (200, 3); every intercept entry is exactly ±1.
    fn generated_stream_is_well_formed() {
        // Arrange & Act
        let data = generate_sim(200, 2, &SimOptions::default()).unwrap();

        // Assert
        assert_eq!(data.ymat.dim(), (200, 3));
        assert_eq!(data.dim, 2);
        assert!(data.ymat.column(0).iter().all(|y| *y == 1.0 || *y == -1.0));
    }

    #[test]
    // Purpose
    // -------
    // Degenerate requests are rejected before any sampling.
    //
    // Given
    // -----
    // - n = 1, dim = 0, and a non-positive separation.
    //
    // Expect
    // ------
    // - InvalidSampleSize, InvalidDim, and InvalidSeparation respectively.
    fn degenerate_requests_are_rejected() {
        // Act & Assert
        assert!(matches!(
            generate_sim(1, 2, &SimOptions::default()),
            Err(SVMError::InvalidSampleSize { n_obs: 1 })
        ));
        assert!(matches!(
            generate_sim(10, 0, &SimOptions::default()),
            Err(SVMError::InvalidDim { dim: 0 })
        ));
        assert!(matches!(
            SimOptions::new(None, 0.0),
            Err(SVMError::InvalidSeparation { .. })
        ));
    }
}
