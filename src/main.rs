use std::io;
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use boundsweep::experiment;
use boundsweep::invoke::ModelRunner;
use boundsweep::sweep;
use boundsweep::types::{BoundRange, OutputFormat, StepRule, SweepConfig};

#[derive(Parser)]
#[command(
    name = "boundsweep",
    version,
    about = "Sweep an analysis tool's bound parameter and report wall-clock timing statistics"
)]
struct Cli {
    /// Experiment name; selects <name>.bc and <name>.manifest in the experiments directory
    experiment: String,

    /// Trials per bound value
    #[arg(default_value_t = 5)]
    runs: usize,

    /// Analysis program to measure
    #[arg(long)]
    program: PathBuf,

    /// Directory holding the experiment artifacts
    #[arg(long)]
    experiments_dir: PathBuf,

    /// First bound value
    #[arg(long, default_value_t = 100)]
    start: u64,

    /// Number of bound values to sweep
    #[arg(long, default_value_t = 15)]
    count: u32,

    /// Step between consecutive bounds (a multiplier with --geometric)
    #[arg(long, default_value_t = 100)]
    step: u64,

    /// Multiply by the step instead of adding it
    #[arg(long)]
    geometric: bool,

    /// Per-trial time limit in seconds; a hung program fails the sweep
    /// instead of blocking it forever
    #[arg(long)]
    timeout_secs: Option<u64>,

    #[arg(long, default_value = "csv")]
    format: OutputFormat,
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let rule = if cli.geometric {
        StepRule::Geometric
    } else {
        StepRule::Additive
    };
    let range = BoundRange::new(cli.start, cli.count, cli.step, rule)?;
    let artifacts = experiment::resolve_artifacts(&cli.experiments_dir, &cli.experiment)?;

    let config = SweepConfig {
        range,
        runs: cli.runs,
        format: cli.format,
    };
    let runner = ModelRunner::new(
        cli.program,
        artifacts,
        cli.timeout_secs.map(Duration::from_secs),
    );

    let stdout = io::stdout().lock();
    sweep::run_sweep(&config, |bound| runner.measure(bound), stdout)?;

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{}", err);
        process::exit(1);
    }
}
