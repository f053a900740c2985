//! solve — regularization mask and minimum-norm linear solve.
//!
//! Purpose
//! -------
//! Provide the two linear-algebra primitives behind each recursion step:
//! the intercept-sparing ridge mask and a pseudo-inverse solve for the
//! symmetric PSD system assembled by the accumulators. This module handles
//! conversion between `ndarray` and `nalgebra` types so that everything
//! else in the crate stays on `ndarray` containers.
//!
//! Key behaviors
//! -------------
//! - Build the (d+1)×(d+1) identity-with-zeroed-corner mask that excludes
//!   the intercept from ridge shrinkage ([`ridge_mask`]).
//! - Copy a symmetric `ndarray` system matrix into a `nalgebra::DMatrix`
//!   ([`fill_dmatrix`]) for eigen-based linear algebra.
//! - Solve `M·θ = rhs` through the Moore–Penrose pseudo-inverse of `M`
//!   ([`pinv_solve`]), returning the minimum-norm solution when `M` is
//!   singular.
//!
//! Invariants & assumptions
//! ------------------------
//! - `M` is treated as symmetric for the purposes of `symmetric_eigen`;
//!   the accumulators only ever produce symmetric PSD matrices plus a
//!   symmetric ridge term, so no re-symmetrization is performed here.
//! - Eigenvalues with magnitude at most [`EIGEN_EPS`] are treated as
//!   numerically zero and discarded, which is what makes rank-deficient
//!   early iterations well-defined instead of an error.
//!
//! Conventions
//! -----------
//! - No explicit matrix inverse is formed; all computations use symmetric
//!   eigendecomposition with eigenvalue truncation.
//! - This module contains no I/O and no logging.
//!
//! Downstream usage
//! ----------------
//! - The estimator assembles `M = Gram + ridge` and the combined right-hand
//!   side each iteration and calls [`pinv_solve`]; nothing else in the
//!   crate touches `nalgebra` directly.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the mask shape, the bridge copy, agreement with a
//!   direct solve on a well-conditioned system, and minimum-norm behavior
//!   on a singular system.
use nalgebra::DMatrix;
use ndarray::{Array1, Array2, ArrayView1};

/// Threshold below which an eigenvalue is treated as numerically zero when
/// forming pseudo-inverse directions.
pub const EIGEN_EPS: f64 = 1e-12;

/// Identity matrix of order d+1 with the (0,0) entry zeroed.
///
/// Adding a multiple of this mask to the Gram matrix shrinks every
/// coordinate of θ except the intercept, which stays unregularized.
pub fn ridge_mask(n_params: usize) -> Array2<f64> {
    let mut mask = Array2::<f64>::eye(n_params);
    mask[[0, 0]] = 0.0;
    mask
}

/// Copy a symmetric `ndarray` system matrix into a `nalgebra::DMatrix`.
///
/// The copy proceeds column by column, matching the column-major storage of
/// `DMatrix`. No symmetrization is performed; any asymmetry in the input is
/// preserved.
///
/// # Panics
/// - May panic on out-of-bounds indexing if the two matrices have
///   inconsistent shapes; shape agreement is the caller's contract.
fn fill_dmatrix(system: &Array2<f64>, system_nalg: &mut DMatrix<f64>) {
    let n = system.ncols();
    for j in 0..n {
        for i in j..n {
            if j == i {
                system_nalg[(i, i)] = system[[i, i]];
            } else {
                system_nalg[(i, j)] = system[[i, j]];
                system_nalg[(j, i)] = system[[j, i]];
            }
        }
    }
}

/// Minimum-norm solution of `M·θ = rhs` for symmetric PSD `M`.
///
/// Purpose
/// -------
/// Solve the per-iteration normal equations through the Moore–Penrose
/// pseudo-inverse, computed via symmetric eigendecomposition with
/// eigenvalue truncation: with `M = Q Λ Qᵀ`,
/// `θ = Σ_{k: λ_k > EIGEN_EPS} q_k · ⟨q_k, rhs⟩ / λ_k`.
///
/// Parameters
/// ----------
/// - `system`: `&Array2<f64>`
///   Symmetric PSD system matrix `M`, typically `Gram + ridge`.
/// - `rhs`: `ArrayView1<'_, f64>`
///   Right-hand side vector of matching length.
///
/// Returns
/// -------
/// `Array1<f64>`
///   The least-squares solution of minimum Euclidean norm. For a
///   nonsingular `M` this coincides with the direct solve; for a singular
///   `M` (e.g., the first few observations in high dimension) the
///   null-space component of θ is zero.
///
/// Panics
/// ------
/// - May panic if `rhs.len()` does not match the order of `system`; the
///   estimator guarantees agreement by construction.
///
/// Notes
/// -----
/// - Recomputing the full decomposition every iteration costs O(d³) per
///   step. The recursion keeps this full recompute rather than a rank-one
///   update of a cached factorization, so every step's estimate agrees
///   exactly with a from-scratch solve on the accumulated statistics.
pub fn pinv_solve(system: &Array2<f64>, rhs: ArrayView1<f64>) -> Array1<f64> {
    let n = system.ncols();
    let mut system_nalg = DMatrix::<f64>::zeros(n, n);
    fill_dmatrix(system, &mut system_nalg);

    let eigen_decomp = system_nalg.symmetric_eigen();
    let q = eigen_decomp.eigenvectors;
    let eigenvals = eigen_decomp.eigenvalues;

    let mut theta = Array1::<f64>::zeros(n);
    for (k, &lambda) in eigenvals.iter().enumerate() {
        if lambda > EIGEN_EPS {
            let mut proj = 0.0;
            for j in 0..n {
                proj += q[(j, k)] * rhs[j];
            }
            let coeff = proj / lambda;
            for i in 0..n {
                theta[i] += coeff * q[(i, k)];
            }
        }
    }
    theta
}
