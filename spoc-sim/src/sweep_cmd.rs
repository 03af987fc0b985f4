use anyhow::Result;
use clap::Args;
use indicatif::ProgressBar;
use log::info;
use matrix_util::common_io::{mkdir, open_buf_writer};
use matrix_util::traits::IoOps;
use spoc_sim::sweep::{ExperimentSweep, SweepMeta, SweepOptions};
use spoc_sim::SimConfig;
use std::io::Write;

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// number of nodes outside the "Varying nodes number" experiment
    #[arg(short = 'n', long, default_value_t = 500)]
    n_nodes: usize,

    /// number of pure nodes outside the "Varying pure nodes number" experiment
    #[arg(short, long, default_value_t = 3)]
    pure: usize,

    /// node counts of the "Varying nodes number" experiment
    #[arg(long, value_delimiter = ',')]
    node_counts: Option<Vec<usize>>,

    /// random seed
    #[arg(long, default_value_t = 12312)]
    seed: u64,

    /// output header: {out}.{index}.{adjacency,theta,b}.tsv.gz and {out}.meta.json
    #[arg(short, long)]
    out: Box<str>,
}

#[derive(serde::Serialize)]
struct IndexedMeta {
    index: usize,
    #[serde(flatten)]
    meta: SweepMeta,
}

pub fn sweep(args: &SweepArgs) -> Result<()> {
    let mut opts = SweepOptions {
        n_nodes: args.n_nodes,
        pure_nodes_number: args.pure,
        config: SimConfig::with_seed(args.seed),
        ..Default::default()
    };
    if let Some(node_counts) = &args.node_counts {
        opts.node_counts = node_counts.clone();
    }

    mkdir(&args.out)?;

    let sweep = ExperimentSweep::new(&opts);
    let pb = ProgressBar::new(sweep.len() as u64);

    let mut records = vec![];
    for (index, item) in sweep.enumerate() {
        let item = item?;
        let hdr = format!("{}.{:03}", args.out, index);
        item.adjacency.to_tsv(&format!("{}.adjacency.tsv.gz", hdr))?;
        item.theta.to_tsv(&format!("{}.theta.tsv.gz", hdr))?;
        item.b.to_tsv(&format!("{}.b.tsv.gz", hdr))?;
        records.push(IndexedMeta {
            index,
            meta: item.meta,
        });
        pb.inc(1);
    }
    pb.finish_and_clear();

    let meta_file = format!("{}.meta.json", args.out);
    let mut buf = open_buf_writer(&meta_file)?;
    serde_json::to_writer_pretty(&mut buf, &records)?;
    buf.flush()?;

    info!("Wrote {} sweep items; metadata in {}", records.len(), meta_file);
    Ok(())
}
