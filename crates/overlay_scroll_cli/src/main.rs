//! overlay-scroll - run headless scrollbar scenarios
//!
//! Prints a JSON report on stdout and exits with status 1 when an assertion
//! fails. Logs go to stderr; set `RUST_LOG` to change the filter.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use overlay_scroll::ScrollAreaConfig;
use overlay_scroll_cli::{run_loaded_scenario, Scenario};
use tracing_subscriber::EnvFilter;

/// Run a scroll/drag scenario against a headless viewport
#[derive(Parser, Debug)]
#[command(name = "overlay-scroll")]
#[command(about = "Run overlay scrollbar scenarios against a headless viewport")]
#[command(version)]
struct Args {
    /// Scenario file (JSON)
    scenario: PathBuf,

    /// Scroll area config (TOML), replaces the scenario's own config
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write the report to this file
    #[arg(short, long)]
    report: Option<PathBuf>,

    /// Log every step and drag transition
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let scenario = Scenario::from_path(&args.scenario)?;
    let config = match &args.config {
        Some(path) => {
            tracing::info!("Using config {}", path.display());
            Some(ScrollAreaConfig::load(path)?)
        }
        None => None,
    };

    tracing::info!(
        "Running {} ({} steps)",
        args.scenario.display(),
        scenario.steps.len()
    );
    let outcome = run_loaded_scenario(&scenario, config)?;

    let report = outcome.report();
    println!("{}", report.to_json()?);
    if let Some(path) = &args.report {
        report.write_to_path(path)?;
    }

    if outcome.is_failed() {
        std::process::exit(1);
    }
    Ok(())
}
