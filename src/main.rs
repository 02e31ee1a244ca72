//! Workout Stats - workout statistics calculator
//!
//! Main entry point: prints one summary or error line per configured package.

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use workout_stats::storage::config::load_config;
use workout_stats::workouts::batch::{process_packages, render_outcome};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only summary lines
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting workout-stats v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().context("failed to load configuration")?;
    let packages = config.packages();

    let outcomes = process_packages(&packages);
    for outcome in &outcomes {
        println!(
            "{}",
            render_outcome(outcome, config.output.format, config.output.locale)
        );
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    tracing::info!(total = outcomes.len(), failed, "Processed workout packages");

    Ok(())
}
