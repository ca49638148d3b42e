//! patrol — walk a guard across a grid file and report the cells it covers.
//!
//! ```text
//! patrol data/winding.txt                 # Visited cells: 41
//! patrol data/winding.txt --json          # {"visited_count":41,...}
//! patrol data/winding.txt --trail out/    # also writes out/trail.csv, out/summary.csv
//! ```

mod logging;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use patrol_grid::load_grid_path;
use patrol_output::{CsvWriter, TrailObserver};
use patrol_sim::{NoopObserver, PatrolOutcome, PatrolSimulator};

#[derive(Parser)]
#[command(name = "patrol")]
#[command(about = "Simulate a guard patrol and count the distinct cells visited")]
struct Cli {
    /// Grid file: `#` obstruction, `^` guard start (facing north)
    input: PathBuf,

    /// Write trail.csv and summary.csv into this directory (created if missing)
    #[arg(long, value_name = "DIR")]
    trail: Option<PathBuf>,

    /// Print the full outcome as JSON instead of the count line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let grid = load_grid_path(&cli.input)
        .with_context(|| format!("loading grid from {}", cli.input.display()))?;
    info!(
        width = grid.width(),
        height = grid.height(),
        obstructions = grid.obstruction_count(),
        "grid ready"
    );

    let mut sim = PatrolSimulator::new(grid);
    let t0 = Instant::now();
    let outcome = match &cli.trail {
        None => sim.run(&mut NoopObserver),
        Some(dir) => run_with_trail(&mut sim, dir)?,
    };
    info!(elapsed_ms = t0.elapsed().as_secs_f64() * 1e3, steps = outcome.steps, "patrol complete");

    if cli.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        println!("Visited cells: {}", outcome.visited_count);
    }
    Ok(())
}

fn run_with_trail(sim: &mut PatrolSimulator, dir: &std::path::Path) -> Result<PatrolOutcome> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("creating trail directory {}", dir.display()))?;
    let writer = CsvWriter::new(dir)?;
    let mut obs = TrailObserver::new(writer);

    let outcome = sim.run(&mut obs);

    if let Some(e) = obs.take_error() {
        return Err(e).context("writing patrol trail");
    }
    info!(rows = obs.rows_written(), dir = %dir.display(), "trail written");
    Ok(outcome)
}
