use anyhow::Result;
use clap::Args;
use log::info;
use matrix_util::common_io::{mkdir, write_lines};
use matrix_util::traits::IoOps;
use spoc_sim::block_graph::generate_two_block;
use spoc_sim::SimConfig;

#[derive(Args, Debug)]
pub struct BlockArgs {
    /// number of nodes
    #[arg(short = 'n', long)]
    n_nodes: usize,

    /// fraction of nodes in the first community
    #[arg(short, long, default_value_t = 0.5)]
    frac: f64,

    /// edge probability within a community
    #[arg(short, long)]
    p: f64,

    /// edge probability between the two communities
    #[arg(short, long)]
    q: f64,

    /// random seed
    #[arg(long)]
    seed: Option<u64>,

    /// output header: {out}.{prob,adjacency}.tsv.gz and {out}.communities.tsv.gz
    #[arg(short, long)]
    out: Box<str>,
}

pub fn block(args: &BlockArgs) -> Result<()> {
    let cfg = SimConfig {
        random_state: args.seed,
    };
    let mut rng = cfg.rng();
    let graph = generate_two_block(args.n_nodes, args.frac, args.p, args.q, &mut rng)?;

    mkdir(&args.out)?;
    graph.prob.to_tsv(&format!("{}.prob.tsv.gz", args.out))?;
    graph.adjacency.to_tsv(&format!("{}.adjacency.tsv.gz", args.out))?;

    let lines: Vec<Box<str>> = graph
        .communities
        .iter()
        .enumerate()
        .flat_map(|(k, nodes)| nodes.iter().map(move |i| format!("{}\t{}", i, k).into_boxed_str()))
        .collect();
    write_lines(&lines, &format!("{}.communities.tsv.gz", args.out))?;

    info!("Wrote two-block graph to {}.*", args.out);
    Ok(())
}
