//! Parameter sweeps over the mixed-membership block model.
//!
//! [`ExperimentSweep`] walks through six experiment families in a fixed
//! order and lazily draws one `(A, Θ, B)` per swept value, all from a
//! single generator so that one seed reproduces the whole sweep.
//!
//! | experiment                   | swept value `x`                   |
//! |------------------------------|-----------------------------------|
//! | Skewed B                     | `ε`, `B = diag(.5-ε, .5, .5+ε)`   |
//! | Noisy off-diag in B          | `log10 ε`, off-diagonal `ε`       |
//! | Varying Dirichlet alpha      | `α`                               |
//! | Varying pure nodes number    | number of pure nodes              |
//! | Varying nodes number         | number of nodes                   |
//! | Varying B multiplier (rho)   | `ρ`, `B = ρ diag(.3, .5, .7)`     |

use crate::config::SimConfig;
use crate::error::Result;
use crate::membership::synthesize;
use crate::probability::{generate_a, GraphParams};
use log::info;
use ndarray::Array2;
use rand::rngs::StdRng;
use serde::Serialize;
use std::collections::VecDeque;

/// Metadata attached to every sweep item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SweepMeta {
    pub experiment_name: String,
    pub clusters: usize,
    pub nodes: usize,
    pub x: f64,
    pub x_name: String,
    pub alpha: f64,
    pub pure_nodes_number: usize,
}

/// One draw of the sweep
#[derive(Debug, Clone)]
pub struct SweepItem {
    pub adjacency: Array2<f64>,
    pub theta: Array2<f64>,
    pub b: Array2<f64>,
    pub meta: SweepMeta,
}

/// Knobs of the sweep; the defaults reproduce the full benchmark
#[derive(Debug, Clone)]
pub struct SweepOptions {
    /// Node count of every family except "Varying nodes number"
    pub n_nodes: usize,
    /// Pure node count of every family except "Varying pure nodes number"
    pub pure_nodes_number: usize,
    /// Node counts of the "Varying nodes number" family
    pub node_counts: Vec<usize>,
    pub config: SimConfig,
}

const N_CLUSTERS: usize = 3;

impl Default for SweepOptions {
    fn default() -> Self {
        // 1000, 2000, ..., 9000, then 10500
        let mut node_counts: Vec<usize> = (500..10_000).step_by(1000).map(|n| n + 500).collect();
        if let Some(last) = node_counts.last_mut() {
            *last += 500;
        }
        Self {
            n_nodes: 500,
            pure_nodes_number: 3,
            node_counts,
            config: SimConfig::with_seed(12312),
        }
    }
}

/// A pending draw: everything needed except randomness
#[derive(Debug, Clone)]
struct SweepCase {
    b: Array2<f64>,
    n_nodes: usize,
    pure_nodes_number: usize,
    alpha: f64,
    experiment_name: &'static str,
    x: f64,
    x_name: &'static str,
}

fn diag3(d: [f64; 3]) -> Array2<f64> {
    Array2::from_diag(&ndarray::arr1(&d))
}

fn sweep_cases(opts: &SweepOptions) -> VecDeque<SweepCase> {
    let nn = opts.n_nodes;
    let n_pure = opts.pure_nodes_number;
    let default_alpha = 1.0 / N_CLUSTERS as f64;
    let base_b = diag3([0.3, 0.5, 0.7]);

    let case = |experiment_name, x, x_name, b, n_nodes, pure_nodes_number, alpha| SweepCase {
        b,
        n_nodes,
        pure_nodes_number,
        alpha,
        experiment_name,
        x,
        x_name,
    };

    let mut cases = VecDeque::new();

    for eps in [0.1, 0.2, 0.3] {
        let b = diag3([0.5 - eps, 0.5, 0.5 + eps]);
        cases.push_back(case("Skewed B", eps, "B_eps", b, nn, n_pure, default_alpha));
    }

    for eps in [1e-3, 5e-3, 1e-2, 5e-2, 1e-1] {
        let mut b = Array2::from_elem((N_CLUSTERS, N_CLUSTERS), eps);
        b.diag_mut().fill(0.5);
        let x = f64::log10(eps);
        cases.push_back(case(
            "Noisy off-diag in B",
            x,
            "log10 eps",
            b,
            nn,
            n_pure,
            default_alpha,
        ));
    }

    for alpha in (1..=6).map(|i| i as f64 / 10.0) {
        cases.push_back(case(
            "Varying Dirichlet alpha",
            alpha,
            "alpha",
            base_b.clone(),
            nn,
            n_pure,
            alpha,
        ));
    }

    for pnn in (3..nn.min(1500)).step_by(100) {
        cases.push_back(case(
            "Varying pure nodes number",
            pnn as f64,
            "pure nodes number",
            base_b.clone(),
            nn,
            pnn,
            default_alpha,
        ));
    }

    for &n in &opts.node_counts {
        cases.push_back(case(
            "Varying nodes number",
            n as f64,
            "nodes number",
            base_b.clone(),
            n,
            n_pure,
            default_alpha,
        ));
    }

    for rho in [1.0, 0.75, 0.5, 0.3, 0.2, 0.15, 0.1, 0.075, 0.05, 0.025, 0.01, 0.001] {
        cases.push_back(case(
            "Varying B multiplier (rho)",
            rho,
            "rho",
            &base_b * rho,
            nn,
            n_pure,
            default_alpha,
        ));
    }

    cases
}

/// Lazy iterator over every configuration of the benchmark sweep
pub struct ExperimentSweep {
    cases: VecDeque<SweepCase>,
    rng: StdRng,
}

impl ExperimentSweep {
    pub fn new(opts: &SweepOptions) -> Self {
        let cases = sweep_cases(opts);
        info!("Experiment sweep with {} configurations", cases.len());
        Self {
            cases,
            rng: opts.config.rng(),
        }
    }

    fn draw(&mut self, case: SweepCase) -> Result<SweepItem> {
        let alphas = vec![case.alpha; N_CLUSTERS];

        let theta = synthesize(
            case.n_nodes,
            N_CLUSTERS,
            case.pure_nodes_number,
            Some(alphas.as_slice()),
            &mut self.rng,
        )?;

        let params = GraphParams {
            n_nodes: case.n_nodes,
            n_clusters: N_CLUSTERS,
            pure_nodes_number: Some(case.pure_nodes_number),
            b: Some(case.b),
            theta: Some(theta),
            alphas: Some(alphas),
            reflect: true,
        };

        let graph = generate_a(&params, &mut self.rng)?;

        info!(
            "{}: {} = {} ({} nodes)",
            case.experiment_name, case.x_name, case.x, case.n_nodes
        );

        Ok(SweepItem {
            adjacency: graph.adjacency,
            theta: graph.theta,
            b: graph.b,
            meta: SweepMeta {
                experiment_name: case.experiment_name.to_string(),
                clusters: N_CLUSTERS,
                nodes: case.n_nodes,
                x: case.x,
                x_name: case.x_name.to_string(),
                alpha: case.alpha,
                pure_nodes_number: case.pure_nodes_number,
            },
        })
    }
}

impl Iterator for ExperimentSweep {
    type Item = Result<SweepItem>;

    fn next(&mut self) -> Option<Self::Item> {
        let case = self.cases.pop_front()?;
        Some(self.draw(case))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.cases.len(), Some(self.cases.len()))
    }
}

impl ExactSizeIterator for ExperimentSweep {}
