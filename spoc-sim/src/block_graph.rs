//! Two-community planted partition with constant in/out probabilities.

use crate::config::SimConfig;
use crate::error::{invalid_arg, Result, SimError};
use log::info;
use matrix_util::traits::SampleOps;
use matrix_util::utils::ordered_partition;
use ndarray::{s, Array2};
use rand::Rng;

/// A planted two-block graph
#[derive(Debug, Clone)]
pub struct TwoBlockGraph {
    /// Block-constant edge probabilities
    pub prob: Array2<f64>,
    /// `A(i,j) ~ Bernoulli(P(i,j))`, no symmetrization
    pub adjacency: Array2<f64>,
    /// `[first block, second block]` node indices
    pub communities: Vec<Vec<usize>>,
}

/// Split `n` nodes into a first block of `floor(n * frac)` and a second
/// block of the rest, with edge probability `p` within and `q` between
/// the blocks.
///
/// Nodes of the first block carry label `+1`, the others `-1`, and the
/// returned partition groups node indices by label in that order.
pub fn generate_two_block<R: Rng + ?Sized>(
    n: usize,
    frac: f64,
    p: f64,
    q: f64,
    rng: &mut R,
) -> Result<TwoBlockGraph> {
    if !(0.0..=1.0).contains(&frac) {
        invalid_arg!("fraction of the first block {} is not in [0, 1]", frac);
    }

    let s1 = (n as f64 * frac).floor() as usize;

    let mut prob = Array2::<f64>::from_elem((n, n), q);
    prob.slice_mut(s![..s1, ..s1]).fill(p);
    prob.slice_mut(s![s1.., s1..]).fill(p);

    let adjacency = prob
        .rbernoulli(rng)
        .map_err(|e| SimError::DegenerateInput(e.to_string()))?;

    let labels: Vec<i8> = (0..n).map(|i| if i < s1 { 1 } else { -1 }).collect();
    let communities = ordered_partition(&labels, &[1, -1]);

    info!(
        "Two-block graph: {} + {} nodes, p = {}, q = {}",
        s1,
        n - s1,
        p,
        q
    );

    Ok(TwoBlockGraph {
        prob,
        adjacency,
        communities,
    })
}

/// [`generate_two_block`] with a generator drawn from `config`
pub fn generate_two_block_seeded(
    n: usize,
    frac: f64,
    p: f64,
    q: f64,
    config: &SimConfig,
) -> Result<TwoBlockGraph> {
    generate_two_block(n, frac, p, q, &mut config.rng())
}
