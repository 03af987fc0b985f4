mod block_cmd;
mod simulate_cmd;
mod sweep_cmd;

use anyhow::Result;
use block_cmd::*;
use clap::{Parser, Subcommand};
use simulate_cmd::*;
use sweep_cmd::*;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "SPOC-SIM",
    long_about = "Simulate graphs from the mixed-membership stochastic block model\n\
		  A(i,j) ~ Bernoulli(P(i,j)), P = Theta * B * Theta'\n\
		  Matrices are written as tab-separated (optionally gzipped) files."
)]
struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// verbose logging (same as RUST_LOG=info)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw one graph with its membership and interaction matrices
    Simulate(SimulateArgs),
    /// Run the benchmark parameter sweep
    Sweep(SweepArgs),
    /// Draw a two-community planted partition graph
    Block(BlockArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match &cli.commands {
        Commands::Simulate(args) => {
            simulate(args)?;
        }
        Commands::Sweep(args) => {
            sweep(args)?;
        }
        Commands::Block(args) => {
            block(args)?;
        }
    }

    Ok(())
}
