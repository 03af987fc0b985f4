//! Node-by-cluster membership matrices `Θ`.
//!
//! Each row of `Θ` lies on the probability simplex. A row is either
//! *mixed*, drawn from `Dirichlet(α)`, or *pure*, a one-hot indicator of
//! a single cluster.
//!
//! ```text
//! θ_i ~ Dirichlet(α)          for n_nodes - n_pure mixed rows
//! θ_i = e_{i mod K}           for the i-th of n_pure pure rows
//! Θ   = shuffle_rows([mixed; pure])
//! ```

use crate::error::{invalid_arg, Result, SimError};
use log::{debug, info};
use matrix_util::traits::MatOps;
use ndarray::{concatenate, Array1, Array2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Gamma};

/// A length-`size` indicator vector with a single one at `index`
pub fn make_pure_row(size: usize, index: usize) -> Result<Array1<f64>> {
    if index >= size {
        invalid_arg!("pure row index {} is not in [0, {})", index, size);
    }
    let mut row = Array1::zeros(size);
    row[index] = 1.0;
    Ok(row)
}

/// Symmetric `α = [1/K, ..., 1/K]`
pub fn default_concentration(n_clusters: usize) -> Vec<f64> {
    vec![1.0 / n_clusters as f64; n_clusters]
}

/// Check `n_nodes >= n_clusters > 0` and `pure_count <= n_nodes`
pub fn validate_counts(n_nodes: usize, n_clusters: usize, pure_count: usize) -> Result<()> {
    if n_clusters == 0 || n_clusters > n_nodes {
        invalid_arg!(
            "need n_nodes >= n_clusters > 0, got n_nodes = {}, n_clusters = {}",
            n_nodes,
            n_clusters
        );
    }
    if pure_count > n_nodes {
        invalid_arg!(
            "number of pure nodes {} is not in [0, {}]",
            pure_count,
            n_nodes
        );
    }
    Ok(())
}

/// Sample `nrows` rows from `Dirichlet(alphas)`
///
/// Each row is drawn by sampling `x_j ~ Gamma(α_j, 1)` for every column
/// `j` in order and normalizing, `θ = x / Σ_j x_j`. A row whose Gamma
/// draws all underflow to zero is redrawn.
pub fn sample_dirichlet_rows<R: Rng + ?Sized>(
    nrows: usize,
    alphas: &[f64],
    rng: &mut R,
) -> Result<Array2<f64>> {
    let gammas = alphas
        .iter()
        .map(|&a| {
            if !(a.is_finite() && a > 0.0) {
                invalid_arg!("Dirichlet concentration must be positive, got {}", a);
            }
            Gamma::new(a, 1.0).map_err(|e| SimError::InvalidArgument(e.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    let kk = alphas.len();
    let mut xx = Array2::<f64>::zeros((nrows, kk));

    for mut x_i in xx.rows_mut() {
        loop {
            for (x_ij, g) in x_i.iter_mut().zip(gammas.iter()) {
                *x_ij = g.sample(rng);
            }
            let tot = x_i.sum();
            if tot > 0.0 && tot.is_finite() {
                break;
            }
        }
    }

    Ok(xx.sum_to_one_rows())
}

/// Synthesize a membership matrix with `pure_count` one-hot rows
///
/// * `n_nodes` - number of rows
/// * `n_clusters` - number of columns `K`
/// * `pure_count` - number of pure rows; the i-th pure row puts its
///   mass on cluster `i mod K`
/// * `concentration` - Dirichlet `α` of length `K` (default `1/K` each)
/// * `rng` - consumed by the Dirichlet draws, then by the row shuffle
///
/// Row order is shuffled at the end, so mixed and pure rows are
/// interleaved at random positions.
pub fn synthesize<R: Rng + ?Sized>(
    n_nodes: usize,
    n_clusters: usize,
    pure_count: usize,
    concentration: Option<&[f64]>,
    rng: &mut R,
) -> Result<Array2<f64>> {
    validate_counts(n_nodes, n_clusters, pure_count)?;

    let alphas = match concentration {
        Some(alphas) if alphas.len() != n_clusters => {
            invalid_arg!(
                "length of concentration {} != n_clusters {}",
                alphas.len(),
                n_clusters
            );
        }
        Some(alphas) => alphas.to_vec(),
        None => default_concentration(n_clusters),
    };

    info!(
        "Synthesizing membership: {} nodes, {} clusters, {} pure",
        n_nodes, n_clusters, pure_count
    );

    let mixed = sample_dirichlet_rows(n_nodes - pure_count, &alphas, rng)?;

    let mut pure = Array2::<f64>::zeros((pure_count, n_clusters));
    for (i, mut row) in pure.rows_mut().into_iter().enumerate() {
        row.assign(&make_pure_row(n_clusters, i % n_clusters)?);
    }

    let stacked = concatenate(Axis(0), &[mixed.view(), pure.view()])
        .map_err(|e| SimError::InvalidArgument(e.to_string()))?;

    let mut order: Vec<usize> = (0..n_nodes).collect();
    order.shuffle(rng);
    debug!("shuffled {} membership rows", order.len());

    Ok(stacked.select(Axis(0), &order))
}

/// Number of rows with exactly one entry equal to one and the rest zero
pub fn count_pure_rows(theta: &Array2<f64>) -> usize {
    theta
        .rows()
        .into_iter()
        .filter(|row| {
            row.iter().filter(|&&x| x == 1.0).count() == 1
                && row.iter().all(|&x| x == 0.0 || x == 1.0)
        })
        .count()
}

/// Stack `patterns` in equal blocks of `n_nodes / #patterns` rows, the
/// remainder going to the first block, and normalize rows to sum to one
fn block_fixture<const K: usize>(n_nodes: usize, patterns: &[[f64; K]]) -> Array2<f64> {
    let block = n_nodes / patterns.len();
    let first = block + (n_nodes - patterns.len() * block);

    let mut theta = Array2::<f64>::zeros((n_nodes, K));
    let mut rows = theta.rows_mut().into_iter();
    for (b, pattern) in patterns.iter().enumerate() {
        let size = if b == 0 { first } else { block };
        for mut row in rows.by_ref().take(size) {
            row.assign(&Array1::from(pattern.to_vec()));
        }
    }

    theta.sum_to_one_rows()
}

/// Fixed 3-cluster membership with overlaps: blocks of pure rows for
/// clusters 0, 1, 2 followed by blocks split evenly over pairs
/// (0,1), (1,2), (0,2)
pub fn theta_binary_overlap(n_nodes: usize) -> Array2<f64> {
    block_fixture(
        n_nodes,
        &[
            [1., 0., 0.],
            [0., 1., 0.],
            [0., 0., 1.],
            [1., 1., 0.],
            [0., 1., 1.],
            [1., 0., 1.],
        ],
    )
}

/// Fixed 3-cluster membership with pure rows only
pub fn theta_binary_pure(n_nodes: usize) -> Array2<f64> {
    block_fixture(n_nodes, &[[1., 0., 0.], [0., 1., 0.], [0., 0., 1.]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_make_pure_row() {
        assert_eq!(make_pure_row(5, 2).unwrap(), array![0., 0., 1., 0., 0.]);
        assert!(matches!(
            make_pure_row(3, 3),
            Err(SimError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rows_on_simplex() {
        let mut rng = StdRng::seed_from_u64(42);
        let theta = synthesize(200, 4, 17, None, &mut rng).unwrap();
        assert_eq!(theta.dim(), (200, 4));
        for row in theta.rows() {
            assert_abs_diff_eq!(row.sum(), 1.0, epsilon = 1e-9);
            assert!(row.iter().all(|&x| x >= 0.0));
        }
        assert!(count_pure_rows(&theta) >= 17);
    }

    #[test]
    fn test_all_pure_cycles_clusters() {
        let mut rng = StdRng::seed_from_u64(1);
        let theta = synthesize(9, 3, 9, None, &mut rng).unwrap();
        assert_eq!(count_pure_rows(&theta), 9);
        let col_sums = theta.sum_axis(Axis(0));
        assert_eq!(col_sums, array![3., 3., 3.]);
    }

    #[test]
    fn test_seed_reproduces_membership() {
        let a = synthesize(50, 3, 5, Some(&[0.5, 0.5, 0.5]), &mut StdRng::seed_from_u64(9));
        let b = synthesize(50, 3, 5, Some(&[0.5, 0.5, 0.5]), &mut StdRng::seed_from_u64(9));
        assert_eq!(a.unwrap(), b.unwrap());
    }

    #[test]
    fn test_invalid_arguments() {
        let mut rng = StdRng::seed_from_u64(0);
        let bad = [
            synthesize(2, 3, 0, None, &mut rng),
            synthesize(5, 0, 0, None, &mut rng),
            synthesize(5, 2, 6, None, &mut rng),
            synthesize(5, 2, 0, Some(&[1.0]), &mut rng),
            synthesize(5, 2, 0, Some(&[1.0, 0.0]), &mut rng),
        ];
        for res in bad {
            assert!(matches!(res, Err(SimError::InvalidArgument(_))));
        }
    }

    #[test]
    fn test_binary_overlap_fixture() {
        let theta = theta_binary_overlap(12);
        let expected = array![
            [1., 0., 0.],
            [1., 0., 0.],
            [0., 1., 0.],
            [0., 1., 0.],
            [0., 0., 1.],
            [0., 0., 1.],
            [0.5, 0.5, 0.],
            [0.5, 0.5, 0.],
            [0., 0.5, 0.5],
            [0., 0.5, 0.5],
            [0.5, 0., 0.5],
            [0.5, 0., 0.5],
        ];
        assert_eq!(theta, expected);
    }

    #[test]
    fn test_fixture_remainder_goes_to_first_block() {
        let theta = theta_binary_pure(14);
        assert_eq!(theta.dim(), (14, 3));
        let col_sums = theta.sum_axis(Axis(0));
        assert_eq!(col_sums, array![6., 4., 4.]);

        let overlap = theta_binary_overlap(15);
        assert_eq!(count_pure_rows(&overlap), 5 + 2 + 2);
    }
}
