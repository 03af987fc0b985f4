//! Edge probabilities `P = Θ B Θ'` and the full generative pipeline.
//!
//! ```text
//! Θ ~ membership::synthesize(n, K, n_pure, α)   (unless given)
//! B ~ interaction::resolve(K)                   (unless given)
//! P = Θ B Θ'
//! A ~ Bernoulli(P), optionally reflected
//! ```
//!
//! `P` is not clamped to `[0, 1]`. Choosing `Θ` and `B` so that it stays
//! in range is up to the caller; the sampler rejects anything outside.

use crate::error::{invalid_arg, Result};
use crate::interaction::resolve;
use crate::membership::{synthesize, validate_counts};
use crate::sampler::sample;
use log::info;
use ndarray::Array2;
use rand::Rng;

/// `Θ B Θ'`
pub fn build(theta: &Array2<f64>, b: &Array2<f64>) -> Result<Array2<f64>> {
    if b.nrows() != b.ncols() || theta.ncols() != b.nrows() {
        invalid_arg!(
            "Theta.shape {:?} is incompatible with B.shape {:?}",
            theta.dim(),
            b.dim()
        );
    }
    Ok(theta.dot(b).dot(&theta.t()))
}

/// Parameters of one draw from the mixed-membership block model
#[derive(Debug, Clone)]
pub struct GraphParams {
    pub n_nodes: usize,
    pub n_clusters: usize,
    /// Number of pure rows in `Θ`; defaults to `n_clusters`
    pub pure_nodes_number: Option<usize>,
    /// Interaction matrix; a random diagonal one if `None`
    pub b: Option<Array2<f64>>,
    /// Membership matrix; synthesized if `None`
    pub theta: Option<Array2<f64>>,
    /// Dirichlet concentration; `1/K` each if `None`
    pub alphas: Option<Vec<f64>>,
    /// Symmetrize the sampled adjacency matrix
    pub reflect: bool,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            n_nodes: 5000,
            n_clusters: 3,
            pure_nodes_number: None,
            b: None,
            theta: None,
            alphas: None,
            reflect: true,
        }
    }
}

impl GraphParams {
    pub fn new(n_nodes: usize, n_clusters: usize) -> Self {
        Self {
            n_nodes,
            n_clusters,
            ..Default::default()
        }
    }
}

/// Edge probabilities together with the matrices that produced them
#[derive(Debug, Clone)]
pub struct ProbabilityModel {
    pub prob: Array2<f64>,
    pub theta: Array2<f64>,
    pub b: Array2<f64>,
}

/// A sampled graph together with its ground truth
#[derive(Debug, Clone)]
pub struct SampledGraph {
    pub adjacency: Array2<f64>,
    pub theta: Array2<f64>,
    pub b: Array2<f64>,
}

/// Resolve `Θ` and `B` from `params` and compute `P = Θ B Θ'`
///
/// Draw order: Dirichlet rows and row shuffle of `Θ` (if not given),
/// then the diagonal of `B` (if not given).
pub fn generate_p<R: Rng + ?Sized>(params: &GraphParams, rng: &mut R) -> Result<ProbabilityModel> {
    let nn = params.n_nodes;
    let kk = params.n_clusters;
    let n_pure = params.pure_nodes_number.unwrap_or(kk);

    validate_counts(nn, kk, n_pure)?;

    if let Some(alphas) = &params.alphas {
        if alphas.len() != kk {
            invalid_arg!("length of alphas {} != n_clusters {}", alphas.len(), kk);
        }
    }

    let theta = match &params.theta {
        Some(theta) => {
            if theta.dim() != (nn, kk) {
                invalid_arg!("Theta.shape {:?} != ({}, {})", theta.dim(), nn, kk);
            }
            theta.clone()
        }
        None => synthesize(nn, kk, n_pure, params.alphas.as_deref(), rng)?,
    };

    let b = resolve(kk, params.b.clone(), rng)?;
    let prob = build(&theta, &b)?;

    info!("Built {} x {} edge probability matrix", nn, nn);
    Ok(ProbabilityModel { prob, theta, b })
}

/// [`generate_p`] followed by Bernoulli sampling of the adjacency matrix
pub fn generate_a<R: Rng + ?Sized>(params: &GraphParams, rng: &mut R) -> Result<SampledGraph> {
    let ProbabilityModel { prob, theta, b } = generate_p(params, rng)?;
    let adjacency = sample(&prob, params.reflect, rng)?;
    Ok(SampledGraph {
        adjacency,
        theta,
        b,
    })
}
