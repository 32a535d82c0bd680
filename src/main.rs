//! LRU Store - A bounded in-memory key/value store
//!
//! Reads commands from stdin and writes one JSON response per line to stdout.

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lru_store::command::handle_line;
use lru_store::{Config, SharedCache};

/// Main entry point for the LRU store driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber (stderr, so stdout stays machine-readable)
/// 2. Load configuration from environment variables
/// 3. Create the cache with the configured capacity
/// 4. Process stdin until end of input or Ctrl+C
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lru_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting LRU store");

    let config = Config::from_env();
    info!("Configuration loaded: capacity={}", config.capacity);

    let cache: SharedCache<String, String> =
        SharedCache::from_config(&config).context("failed to create cache")?;
    info!("Cache initialized");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("failed to read stdin")? else {
                    info!("End of input");
                    break;
                };
                if let Some(output) = handle_line(&cache, &line).await? {
                    println!("{}", output);
                }
            }
            _ = signal::ctrl_c() => {
                warn!("Received Ctrl+C, stopping");
                break;
            }
        }
    }

    let stats = cache.stats().await;
    info!(
        "Final stats: entries={}, hits={}, misses={}, evictions={}, hit_rate={:.3}",
        stats.total_entries,
        stats.hits,
        stats.misses,
        stats.evictions,
        stats.hit_rate()
    );

    Ok(())
}
