//! Workload benchmark runner
//!
//! This module provides the `bench` subcommand. It repeats full workload
//! passes until the warm-up budget is spent, then times one more pass and
//! prints its elapsed nanoseconds.

use anyhow::{Context, Result, bail};
use clap::Args;
use llrb_map::workload::{Execution, execute};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

const DEFAULT_WARMUP_SECS: u64 = 10;

/// Arguments for the bench subcommand
#[derive(Args, Debug, Default)]
pub struct BenchArgs {
    /// Workload file, one `key,value` record per line
    #[arg(long, short = 'f')]
    pub file: Option<PathBuf>,

    /// Warm-up budget in seconds before the measured pass
    #[arg(long)]
    pub warmup_secs: Option<u64>,

    /// Scenario YAML file
    #[arg(long, short = 's')]
    pub scenario: Option<PathBuf>,

    /// Load environment from file (missing file is ignored)
    #[arg(long, default_value = ".env")]
    pub env_file: PathBuf,

    /// Print a JSON report instead of the elapsed nanoseconds
    #[arg(long)]
    pub json: bool,
}

/// Scenario configuration from YAML
#[derive(Debug, Default, Deserialize)]
struct ScenarioConfig {
    name: Option<String>,
    file: Option<PathBuf>,
    warmup_seconds: Option<u64>,
}

/// Settings for one benchmark run
#[derive(Debug, PartialEq, Eq)]
struct BenchConfig {
    file: PathBuf,
    warmup: Duration,
}

impl BenchConfig {
    /// Resolve settings from every source.
    ///
    /// Priority: CLI > Environment > env file > Scenario YAML > Default
    fn resolve<F>(
        args: &BenchArgs,
        scenario: &ScenarioConfig,
        env_vars: &HashMap<String, String>,
        process_env: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = args
            .file
            .clone()
            .or_else(|| process_env("LLRB_WORKLOAD_FILE").map(PathBuf::from))
            .or_else(|| env_vars.get("LLRB_WORKLOAD_FILE").map(PathBuf::from))
            .or_else(|| scenario.file.clone());
        let Some(file) = file else {
            bail!("No workload file given (use --file, LLRB_WORKLOAD_FILE or a scenario)");
        };

        let warmup_secs = match args.warmup_secs {
            Some(secs) => secs,
            None => match process_env("LLRB_WARMUP_SECS")
                .or_else(|| env_vars.get("LLRB_WARMUP_SECS").cloned())
            {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .with_context(|| format!("Invalid LLRB_WARMUP_SECS: {raw:?}"))?,
                None => scenario.warmup_seconds.unwrap_or(DEFAULT_WARMUP_SECS),
            },
        };

        Ok(Self {
            file,
            warmup: Duration::from_secs(warmup_secs),
        })
    }
}

/// JSON report of the measured pass
#[derive(Debug, Serialize)]
struct Report<'a> {
    scenario: Option<&'a str>,
    file: String,
    warmup_runs: u64,
    records: usize,
    keys: usize,
    height: usize,
    elapsed_nanos: u64,
}

/// Load environment variables from a file
fn load_env_file(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to read env file {}", path.display()))?
        .map(|item| item.context("Failed to parse env file"))
        .collect()
}

fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
    serde_yaml::from_str(&content).context("Failed to parse scenario YAML")
}

/// Repeat full passes until `budget` has elapsed. Returns the number of passes.
fn warm_up(file: &Path, budget: Duration) -> Result<u64> {
    let start = Instant::now();
    let mut runs = 0;
    while start.elapsed() < budget {
        execute(file).context("Workload failed during warm-up")?;
        runs += 1;
    }
    Ok(runs)
}

/// Main entry point for bench command
pub fn run(args: &BenchArgs) -> Result<()> {
    let env_vars = load_env_file(&args.env_file)?;
    let scenario = match &args.scenario {
        Some(path) => load_scenario(path)?,
        None => ScenarioConfig::default(),
    };
    let config = BenchConfig::resolve(args, &scenario, &env_vars, |key| env::var(key).ok())?;

    tracing::info!(
        file = %config.file.display(),
        warmup_secs = config.warmup.as_secs(),
        scenario = scenario.name.as_deref().unwrap_or("-"),
        "Starting workload benchmark"
    );

    let warmup_runs = warm_up(&config.file, config.warmup)?;
    tracing::debug!(warmup_runs, "Warm-up finished");

    let execution = execute(&config.file).context("Workload failed during measured run")?;
    let Execution {
        elapsed,
        records,
        keys,
        height,
    } = execution;
    let elapsed_nanos = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
    tracing::info!(records, keys, height, elapsed_nanos, "Measured run complete");

    if args.json {
        let report = Report {
            scenario: scenario.name.as_deref(),
            file: config.file.display().to_string(),
            warmup_runs,
            records,
            keys,
            height,
            elapsed_nanos,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{elapsed_nanos}");
    }

    Ok(())
}
