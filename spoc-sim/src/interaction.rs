//! Community-interaction matrix `B` (K x K).

use crate::error::{invalid_arg, Result};
use log::debug;
use ndarray::{Array1, Array2};
use rand::Rng;

/// `diag(u_1, ..., u_K)` with `u_k ~ U(0,1)` drawn in order
pub fn random_diagonal<R: Rng + ?Sized>(n_clusters: usize, rng: &mut R) -> Array2<f64> {
    let diag: Array1<f64> = (0..n_clusters).map(|_| rng.random::<f64>()).collect();
    debug!("random diagonal B = {:?}", diag.as_slice());
    Array2::from_diag(&diag)
}

/// Check that `b` is exactly `n_clusters x n_clusters`
pub fn validate_interaction(n_clusters: usize, b: &Array2<f64>) -> Result<()> {
    if b.dim() != (n_clusters, n_clusters) {
        invalid_arg!(
            "B.shape {:?} != ({}, {})",
            b.dim(),
            n_clusters,
            n_clusters
        );
    }
    Ok(())
}

/// Return the caller's `b` after a shape check, or a random diagonal
/// matrix if none is given. The generator is untouched when `b` is
/// supplied.
pub fn resolve<R: Rng + ?Sized>(
    n_clusters: usize,
    b: Option<Array2<f64>>,
    rng: &mut R,
) -> Result<Array2<f64>> {
    match b {
        Some(b) => {
            validate_interaction(n_clusters, &b)?;
            Ok(b)
        }
        None => Ok(random_diagonal(n_clusters, rng)),
    }
}
