//! Verdant headless runner.
//!
//! Usage: `verdant [config.toml]`

mod demo;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use verdant_gameplay::{VerdantConfig, CONFIG_FILE_NAME};

/// Main entry point.
fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("verdant=info,verdant_world=info,verdant_gameplay=info"));
    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    info!("Verdant starting...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let config = VerdantConfig::load_from(&path)?;

    let report = demo::run(&config)?;
    info!(
        greenhouse = report.greenhouse_size,
        particles = report.particles,
        growth = ?report.growth,
        "scenario complete"
    );
    Ok(())
}
