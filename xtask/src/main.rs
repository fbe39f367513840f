//! xtask - Development task runner for llrb-map
//!
//! Usage:
//!   cargo xtask bench --file <workload> [options]
//!   cargo xtask gen-workload --output <workload> [options]

mod bench;
mod gen_workload;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development task runner for llrb-map")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time a workload file: warm up, then one measured load + verify pass
    Bench(bench::BenchArgs),
    /// Write a synthetic `key,value` workload file
    GenWorkload(gen_workload::GenWorkloadArgs),
}

fn main() -> anyhow::Result<()> {
    // stdout carries the benchmark result, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Bench(args) => bench::run(&args),
        Commands::GenWorkload(args) => gen_workload::run(&args),
    }
}
