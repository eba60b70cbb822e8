//! Command-line demo: generate a level and print its text dump.

use anyhow::{Context, Result};
use cavegen_core::GeneratorConfig;
use cavegen_level::LevelGenerator;
use std::fs::File;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    // Optional argument: path to a JSON GeneratorConfig.
    let config = match std::env::args().nth(1) {
        Some(path) => {
            let file =
                File::open(&path).with_context(|| format!("failed to open config {path}"))?;
            serde_json::from_reader(file)
                .with_context(|| format!("failed to parse config {path}"))?
        }
        None => GeneratorConfig::default(),
    };

    info!(
        width = config.level.width,
        height = config.level.height,
        seed = config.seed,
        "generating level"
    );

    let mut generator = LevelGenerator::new(config);
    let level = generator.generate()?;

    print!("{level}");

    Ok(())
}
