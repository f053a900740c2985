//! Parameter-path recording across the observation stream.
//!
//! Purpose
//! -------
//! Capture either the full per-observation parameter history or only the
//! final parameter vector, behind one interface so the estimation loop
//! does not branch on the recording mode.
//!
//! Key behaviors
//! -------------
//! - Full mode allocates an `N × (d + 1)` matrix whose row `i` holds the
//!   θ produced after absorbing observation `i`. Row 0 stays at zero:
//!   the recursion performs no solve for the seed row.
//! - Compact mode allocates a single `1 × (d + 1)` row and ignores all
//!   intermediate recordings; finalization writes the final θ into it so
//!   the last path row always equals the returned estimate in both modes.
//!
//! Invariants & assumptions
//! ------------------------
//! - `record` is called with strictly increasing indices in `1..n_obs`;
//!   the recorder never reallocates after construction.
//! - No I/O and no logging; the recorder is plain owned state.
//!
//! Testing notes
//! -------------
//! - Unit tests check the shape contract for both modes, the zero seed
//!   row, and the final-row/finalization agreement.
use ndarray::{Array2, ArrayView1};

/// Parameter-path recorder for one estimation call.
#[derive(Debug, Clone)]
pub struct TrajectoryRecorder {
    path: Array2<f64>,
    record_all: bool,
}

impl TrajectoryRecorder {
    /// Allocate a recorder for `n_obs` observations of order
    /// `n_params = d + 1`; `record_all` selects full or compact mode.
    pub fn new(n_obs: usize, n_params: usize, record_all: bool) -> Self {
        let n_rows = if record_all { n_obs } else { 1 };
        TrajectoryRecorder { path: Array2::zeros((n_rows, n_params)), record_all }
    }

    /// Store the θ produced after absorbing observation `index`; a no-op
    /// in compact mode.
    pub fn record(&mut self, index: usize, theta: ArrayView1<f64>) {
        if self.record_all {
            self.path.row_mut(index).assign(&theta);
        }
    }

    /// Consume the recorder and return the path matrix, writing
    /// `final_theta` into the single compact-mode row so both modes end
    /// on the returned estimate.
    pub fn into_path(mut self, final_theta: ArrayView1<f64>) -> Array2<f64> {
        if !self.record_all {
            self.path.row_mut(0).assign(&final_theta);
        }
        self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    // Purpose
    // -------
    // Full mode stores every recorded θ at its observation index and
    // leaves the seed row at zero.
    //
    // Given
    // -----
    // - A full-mode recorder over 3 observations of order 2, recording at
    //   indices 1 and 2.
    //
    // Expect
    // ------
    // - Shape (3, 2); row 0 all-zero; rows 1 and 2 equal the recorded
    //   vectors; finalization leaves the matrix untouched.
    fn full_mode_keeps_every_step_and_zero_seed_row() {
        // Arrange
        let mut recorder = TrajectoryRecorder::new(3, 2, true);
        let step1 = array![1.0, -1.0];
        let step2 = array![2.0, 0.5];

        // Act
        recorder.record(1, step1.view());
        recorder.record(2, step2.view());
        let path = recorder.into_path(step2.view());

        // Assert
        assert_eq!(path.dim(), (3, 2));
        assert_eq!(path.row(0), array![0.0, 0.0]);
        assert_eq!(path.row(1), step1);
        assert_eq!(path.row(2), step2);
    }

    #[test]
    // Purpose
    // -------
    // Compact mode ignores intermediate recordings and finalizes to a
    // single row holding the final estimate.
    //
    // Given
    // -----
    // - A compact-mode recorder receiving two intermediate recordings and
    //   a distinct final θ.
    //
    // Expect
    // ------
    // - Shape (1, 2); the only row equals the final θ, not the last
    //   intermediate recording.
    fn compact_mode_returns_single_row_with_final_estimate() {
        // Arrange
        let mut recorder = TrajectoryRecorder::new(5, 2, false);
        let final_theta = array![3.0, -2.0];

        // Act
        recorder.record(1, array![9.0, 9.0].view());
        recorder.record(2, array![8.0, 8.0].view());
        let path = recorder.into_path(final_theta.view());

        // Assert
        assert_eq!(path.dim(), (1, 2));
        assert_eq!(path.row(0), final_theta);
    }

}
