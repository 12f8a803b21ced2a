use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use double_pendulum::config::{self, SimConfig};
use double_pendulum::io::{csv, json};
use double_pendulum::physics::energy;
use double_pendulum::sim::{self, event::EventKind};
use double_pendulum::SimError;

/// Integrate a double pendulum and report energy conservation.
#[derive(Parser, Debug)]
#[command(name = "double-pendulum", version)]
struct Args {
    /// TOML file with initial conditions and run length
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Inner rod angle (rad)
    #[arg(long, allow_negative_numbers = true)]
    x0: Option<f64>,
    /// Outer rod angle (rad)
    #[arg(long, allow_negative_numbers = true)]
    y0: Option<f64>,
    /// Inner rod angular velocity (rad/s)
    #[arg(long, allow_negative_numbers = true)]
    x_dot0: Option<f64>,
    /// Outer rod angular velocity (rad/s)
    #[arg(long, allow_negative_numbers = true)]
    y_dot0: Option<f64>,
    /// Integration step
    #[arg(long)]
    dt: Option<f64>,
    /// Number of steps
    #[arg(short = 'n', long)]
    steps: Option<usize>,

    /// Write the full history as CSV
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,
    /// Write a JSON run summary
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

impl Args {
    fn resolve(&self) -> Result<SimConfig, SimError> {
        let mut cfg = match &self.config {
            Some(path) => config::load(path)?,
            None => SimConfig::default(),
        };
        if let Some(v) = self.x0 { cfg.x0 = v; }
        if let Some(v) = self.y0 { cfg.y0 = v; }
        if let Some(v) = self.x_dot0 { cfg.x_dot0 = v; }
        if let Some(v) = self.y_dot0 { cfg.y_dot0 = v; }
        if let Some(v) = self.dt { cfg.dt = v; }
        if let Some(v) = self.steps { cfg.steps = v; }
        Ok(cfg)
    }
}

fn main() -> Result<(), SimError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = args.resolve()?;

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let start = std::time::Instant::now();
    let run = sim::simulate(&config)?;
    let elapsed = start.elapsed();

    let sim = &run.simulation;
    let summary = json::RunSummary::from_run(&run);

    // -----------------------------------------------------------------------
    // Print results
    // -----------------------------------------------------------------------
    println!();
    println!("====================================================================");
    println!("  DOUBLE PENDULUM — Heun RK2, dt = {}", config.dt);
    println!("====================================================================");
    println!();
    println!("  Initial Conditions");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  x0:      {:>9.4} rad     y0:      {:>9.4} rad",
        config.x0, config.y0
    );
    println!(
        "  x_dot0:  {:>9.4} rad/s   y_dot0:  {:>9.4} rad/s",
        config.x_dot0, config.y_dot0
    );
    println!(
        "  Steps:   {:>9}         Duration: {:>8.2}",
        config.steps,
        config.duration()
    );
    println!();

    println!("  Energy");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  E(0):    {:>12.8}       E(end):  {:>12.8}",
        summary.energy_initial, summary.energy_final
    );
    match summary.drift_rate {
        Some(d) => println!("  dE/E0/dt = {:.2e}", d),
        None => println!("  dE/E0/dt = n/a"),
    }
    println!();

    println!("  Motion");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Flips:   inner {:>4}   outer {:>4}",
        summary.inner_flips, summary.outer_flips
    );
    println!(
        "  Peak |x_dot|: {:>8.3} rad/s   Peak |y_dot|: {:>8.3} rad/s",
        summary.max_x_dot, summary.max_y_dot
    );
    if let Some(e) = run
        .events
        .iter()
        .find(|e| matches!(e.kind, EventKind::DriftExceeded { .. }))
    {
        if let EventKind::DriftExceeded { rate } = e.kind {
            println!(
                "  Drift rate {:.2e} above tolerance {:.0e} at t={:.2}",
                rate, config.drift_tolerance, e.time
            );
        }
    }
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>8}  {:>9}  {:>9}  {:>9}  {:>9}  {:>10}",
        "t", "x", "y", "x_dot", "y_dot", "E"
    );
    println!("  {}", "─".repeat(62));

    let samples = sim.samples();
    let sample_interval = (samples.len() / 30).max(1);
    for (i, s) in samples.iter().enumerate() {
        if i % sample_interval != 0 && i != samples.len() - 1 {
            continue;
        }
        println!(
            "  {:>8.3}  {:>9.4}  {:>9.4}  {:>9.4}  {:>9.4}  {:>10.6}",
            s.time,
            s.x(),
            s.y(),
            s.x_dot(),
            s.y_dot(),
            energy::total(s)
        );
    }

    println!();
    println!(
        "  Solved {} steps in {:.2} s",
        config.steps,
        elapsed.as_secs_f64()
    );
    println!("====================================================================");
    println!();

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------
    if let Some(path) = &args.csv {
        csv::write_history_file(path, sim)?;
        tracing::info!(path = %path.display(), "wrote history");
    }
    if let Some(path) = &args.json {
        json::write_summary_file(path, &summary)?;
        tracing::info!(path = %path.display(), "wrote summary");
    }

    Ok(())
}
