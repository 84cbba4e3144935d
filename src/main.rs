//! Chunker demo - Main Entry Point
//!
//! Creates random groups of people such that the first names within a
//! group add up to at most the configured number of characters.

mod names;

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chunker::{ChunkingConfig, GreedyChunker, MaxLength};

use names::{FEMALE_FIRST_NAMES, MALE_FIRST_NAMES};

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "chunker=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = ChunkingConfig::from_env();

    info!(
        max_length = config.max_length,
        strict = config.options.strict,
        metric = %config.options.metric,
        "Starting chunker demo v{}",
        env!("CARGO_PKG_VERSION")
    );

    let mut people: Vec<&str> = MALE_FIRST_NAMES
        .iter()
        .chain(FEMALE_FIRST_NAMES.iter())
        .copied()
        .collect();
    people.shuffle(&mut rand::rng());

    let max_length = MaxLength::new(config.max_length)?;
    let groups = GreedyChunker::new(max_length)
        .with_options(config.options)
        .chunk(&people)
        .context("failed to group names")?;

    for group in &groups {
        println!("{}", group.join(","));
    }

    info!(people = people.len(), groups = groups.len(), "Done");

    Ok(())
}
