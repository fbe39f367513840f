//! Synthetic workload generator
//!
//! Writes `key,value` files for the `bench` subcommand. Every key is written
//! with a single value, so the output always passes verification.

use anyhow::{Context, Result, ensure};
use clap::{Args, ValueEnum};
use llrb_map::workload::{Record, Workload};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Order in which keys are written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum KeyOrder {
    /// Increasing keys, the worst case for an unbalanced tree
    Ascending,
    /// Decreasing keys
    Descending,
    /// Random permutation
    #[default]
    Shuffled,
}

/// Arguments for the gen-workload subcommand
#[derive(Args, Debug)]
pub struct GenWorkloadArgs {
    /// Output file path
    #[arg(long, short = 'o')]
    pub output: PathBuf,

    /// Number of distinct keys
    #[arg(long, short = 'n', default_value_t = 100_000)]
    pub count: usize,

    /// Key order
    #[arg(long, value_enum, default_value_t = KeyOrder::Shuffled)]
    pub order: KeyOrder,

    /// Random seed for reproducible data
    #[arg(long)]
    pub seed: Option<u64>,

    /// Percentage of records written a second time (0-100)
    #[arg(long, default_value_t = 0)]
    pub duplicates: u8,
}

fn generate(count: usize, order: KeyOrder, duplicates: u8, rng: &mut StdRng) -> Vec<Record> {
    let mut records: Vec<Record> = (0..count)
        .map(|index| Record::new(format!("key{index:010}"), format!("value{index}")))
        .collect();

    let repeated: Vec<Record> = records
        .iter()
        .filter(|_| rng.gen_range(0..100) < duplicates)
        .cloned()
        .collect();
    records.extend(repeated);

    match order {
        KeyOrder::Ascending => records.sort_by(|left, right| left.key.cmp(&right.key)),
        KeyOrder::Descending => records.sort_by(|left, right| right.key.cmp(&left.key)),
        KeyOrder::Shuffled => records.shuffle(rng),
    }
    records
}

/// Main entry point for gen-workload command
pub fn run(args: &GenWorkloadArgs) -> Result<()> {
    ensure!(args.duplicates <= 100, "--duplicates must be between 0 and 100");

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(
        output = %args.output.display(),
        count = args.count,
        order = ?args.order,
        seed,
        "Generating workload"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let workload = Workload::new(generate(args.count, args.order, args.duplicates, &mut rng));
    debug_assert!(workload.is_consistent());

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    for Record { key, value } in workload.records() {
        writeln!(writer, "{key},{value}")?;
    }
    writer.flush().context("Failed to flush workload file")?;

    tracing::info!(lines = workload.len(), "Workload written");
    Ok(())
}
