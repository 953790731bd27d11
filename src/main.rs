//! Bounded Cache - interactive driver
//!
//! Reads commands from stdin, one per line, and prints results to stdout.
//! See [`bounded_cache::cli`] for the command set.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bounded_cache::cli::Session;
use bounded_cache::Config;

/// Main entry point for the cache driver.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging (stderr)
/// 2. Load configuration from environment variables
/// 3. Create the cache and the dataset paginators
/// 4. Execute stdin commands until end of input
fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bounded_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = Config::from_env().context("failed to load configuration")?;
    info!(
        "Configuration loaded: policy={}, capacity={}, data_file={}, page_size={}",
        config.policy,
        config.capacity,
        config.data_file.display(),
        config.page_size
    );

    let mut session = Session::from_config(&config).context("failed to create session")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match session.handle_line(&line) {
            Ok(output) => {
                for text in output {
                    writeln!(out, "{}", text)?;
                }
            }
            Err(err) => {
                warn!(command = %line.trim(), "{}", err);
                writeln!(out, "ERROR: {}", err)?;
            }
        }
    }

    info!("End of input, {} entries cached", session.cache().len());
    Ok(())
}
