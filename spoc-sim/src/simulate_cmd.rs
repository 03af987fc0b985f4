use anyhow::Result;
use clap::Args;
use log::info;
use matrix_util::common_io::mkdir;
use matrix_util::traits::IoOps;
use ndarray::{Array1, Array2};
use spoc_sim::{generate_a, GraphParams, SimConfig};

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// number of nodes
    #[arg(short = 'n', long, default_value_t = 5000)]
    n_nodes: usize,

    /// number of clusters
    #[arg(short = 'k', long, default_value_t = 3)]
    n_clusters: usize,

    /// number of pure nodes (default: number of clusters)
    #[arg(short, long)]
    pure: Option<usize>,

    /// Dirichlet concentration, one per cluster (default: 1/K each)
    #[arg(short, long, value_delimiter = ',')]
    alpha: Option<Vec<f64>>,

    /// diagonal of B, one per cluster (default: U(0,1) each)
    #[arg(short, long, value_delimiter = ',')]
    b_diag: Option<Vec<f64>>,

    /// keep the lower triangle of A independent of the upper one
    #[arg(long, default_value_t = false)]
    no_reflect: bool,

    /// random seed
    #[arg(long)]
    seed: Option<u64>,

    /// output header: {out}.{adjacency,theta,b}.tsv.gz
    #[arg(short, long)]
    out: Box<str>,
}

pub fn simulate(args: &SimulateArgs) -> Result<()> {
    let params = GraphParams {
        n_nodes: args.n_nodes,
        n_clusters: args.n_clusters,
        pure_nodes_number: args.pure,
        b: args
            .b_diag
            .as_ref()
            .map(|d| Array2::from_diag(&Array1::from(d.clone()))),
        theta: None,
        alphas: args.alpha.clone(),
        reflect: !args.no_reflect,
    };

    let cfg = SimConfig {
        random_state: args.seed,
    };
    let graph = generate_a(&params, &mut cfg.rng())?;

    mkdir(&args.out)?;
    graph.adjacency.to_tsv(&format!("{}.adjacency.tsv.gz", args.out))?;
    graph.theta.to_tsv(&format!("{}.theta.tsv.gz", args.out))?;
    graph.b.to_tsv(&format!("{}.b.tsv.gz", args.out))?;

    info!("Wrote {}.{{adjacency,theta,b}}.tsv.gz", args.out);
    Ok(())
}
