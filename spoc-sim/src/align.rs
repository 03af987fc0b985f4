//! Label alignment of estimated matrices against ground truth.
//!
//! Community labels are only identified up to a permutation, so an
//! estimate `Θ̂` (or `B̂`) is compared to the truth under every
//! relabelling of its clusters and the closest one is kept:
//!
//! ```text
//! err(Θ, Θ̂) = min_σ ‖Θ - Θ̂[:, σ]‖_F / ‖Θ‖_F
//! err(B, B̂) = min_σ ‖B - B̂[σ, σ]‖_F
//! ```
//!
//! The search is exhaustive over all `K!` permutations in lexicographic
//! order, and only the first permutation reaching the minimum is kept.
//! It is meant for a handful of clusters; callers must bound `K`.

use crate::error::{invalid_arg, Result};
use log::{debug, warn};
use matrix_util::permutation::Permutations;
use matrix_util::traits::MatOps;
use ndarray::Array2;

/// Outcome of a permutation search
#[derive(Debug, Clone)]
pub struct Alignment {
    /// Frobenius distance at the best permutation (relative for
    /// [`align_columns`], absolute for [`align_rows_and_columns`])
    pub error: f64,
    /// The estimate rearranged by the best permutation
    pub aligned: Array2<f64>,
    /// The best permutation; empty if no candidate had a finite error
    pub permutation: Vec<usize>,
}

/// Keep the first candidate with the smallest distance
fn search<F>(k: usize, truth: &Array2<f64>, estimate: &Array2<f64>, rearrange: F) -> Alignment
where
    F: Fn(&Array2<f64>, &[usize]) -> Array2<f64>,
{
    let mut best = Alignment {
        error: f64::INFINITY,
        aligned: Array2::zeros(estimate.dim()),
        permutation: vec![],
    };

    for perm in Permutations::new(k) {
        let candidate = rearrange(estimate, &perm);
        let error = (truth - &candidate).frobenius_norm();
        if error < best.error {
            best = Alignment {
                error,
                aligned: candidate,
                permutation: perm,
            };
        }
    }

    debug!(
        "best permutation {:?} at distance {}",
        best.permutation, best.error
    );
    best
}

/// Find the column permutation of `theta_hat` closest to `theta`
///
/// Returns the relative error `min ‖Θ - Θ̂[:, σ]‖_F / ‖Θ‖_F` together
/// with the permuted `Θ̂`. If `‖Θ‖_F = 0` the ratio is not finite and is
/// returned as such.
pub fn align_columns(theta: &Array2<f64>, theta_hat: &Array2<f64>) -> Result<Alignment> {
    if theta.dim() != theta_hat.dim() {
        invalid_arg!(
            "Theta.shape {:?} != Theta_hat.shape {:?}",
            theta.dim(),
            theta_hat.dim()
        );
    }

    let mut best = search(theta.ncols(), theta, theta_hat, |x, perm| {
        x.permute_columns(perm)
    });

    let denom = theta.frobenius_norm();
    if denom == 0.0 {
        warn!("reference membership matrix has zero norm");
    }
    best.error /= denom;
    Ok(best)
}

/// Find the simultaneous row and column permutation of `b_hat` closest
/// to `b`
///
/// Returns the absolute error `min ‖B - B̂[σ, σ]‖_F` together with the
/// permuted `B̂`.
pub fn align_rows_and_columns(b: &Array2<f64>, b_hat: &Array2<f64>) -> Result<Alignment> {
    if b.dim() != b_hat.dim() {
        invalid_arg!("B.shape {:?} != B_hat.shape {:?}", b.dim(), b_hat.dim());
    }
    if b.nrows() != b.ncols() {
        invalid_arg!("B must be square, got {:?}", b.dim());
    }

    Ok(search(b.ncols(), b, b_hat, |x, perm| {
        x.permute_rows_columns(perm)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;
    use ndarray::array;

    #[test]
    fn test_identity_alignment_of_columns() {
        let theta = array![[1., 0., 0.], [0.2, 0.8, 0.], [0.1, 0.3, 0.6]];
        let res = align_columns(&theta, &theta).unwrap();
        assert_eq!(res.error, 0.0);
        assert_eq!(res.aligned, theta);
        assert_eq!(res.permutation, vec![0, 1, 2]);
    }

    #[test]
    fn test_recover_column_permutation() {
        let theta = array![[1., 0., 0.], [0.2, 0.8, 0.], [0.1, 0.3, 0.6]];
        let shuffled = theta.permute_columns(&[2, 0, 1]);
        let res = align_columns(&theta, &shuffled).unwrap();
        assert_eq!(res.error, 0.0);
        assert_eq!(res.aligned, theta);
        assert_eq!(res.permutation, vec![1, 2, 0]);
    }

    #[test]
    fn test_relative_error() {
        let theta = array![[1., 0.], [0., 1.]];
        let theta_hat = array![[1., 0.], [0., 0.]];
        let res = align_columns(&theta, &theta_hat).unwrap();
        assert!((res.error - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_zero_reference_propagates() {
        let theta = Array2::<f64>::zeros((2, 2));
        let theta_hat = array![[1., 0.], [0., 1.]];
        let res = align_columns(&theta, &theta_hat).unwrap();
        assert!(res.error.is_infinite());

        let res = align_columns(&theta, &theta).unwrap();
        assert!(res.error.is_nan());
    }

    #[test]
    fn test_recover_diagonal_b() {
        let b = array![[0.3, 0., 0.], [0., 0.5, 0.], [0., 0., 0.7]];
        let res = align_rows_and_columns(&b, &b).unwrap();
        assert_eq!(res.error, 0.0);
        assert_eq!(res.aligned, b);

        let b_hat = b.permute_rows_columns(&[2, 0, 1]);
        let res = align_rows_and_columns(&b, &b_hat).unwrap();
        assert_eq!(res.error, 0.0);
        assert_eq!(res.aligned, b);
    }

    #[test]
    fn test_first_minimum_wins() {
        // every permutation of a constant matrix ties
        let b = Array2::from_elem((3, 3), 0.4);
        let res = align_rows_and_columns(&b, &b).unwrap();
        assert_eq!(res.permutation, vec![0, 1, 2]);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Array2::<f64>::zeros((3, 2));
        let b = Array2::<f64>::zeros((2, 3));
        assert!(matches!(align_columns(&a, &b), Err(SimError::InvalidArgument(_))));
        assert!(matches!(
            align_rows_and_columns(&a, &a),
            Err(SimError::InvalidArgument(_))
        ));
    }
}
