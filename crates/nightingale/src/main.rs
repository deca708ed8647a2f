//! Nightingale binary: Gemini chat and staffing action plans in the terminal.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use nightingale_error::ConfigError;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Opens the log file and wires tracing to it.
///
/// The TUI owns the terminal, so log output goes to a file under the user's
/// local data directory; `RUST_LOG` raises verbosity the usual way.
fn init_logging() -> Result<PathBuf, ConfigError> {
    let dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nightingale");
    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::new(format!("failed to create log directory: {e}")))?;

    let path = dir.join("nightingale.log");
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| ConfigError::new(format!("failed to open {}: {e}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_path = init_logging()?;

    let cli = Cli::parse();
    info!(log = %log_path.display(), "Starting nightingale");

    match cli.command {
        Commands::Chat => cli::launch_chat().await?,
        Commands::Plan => cli::launch_plan().await?,
    }
    Ok(())
}
