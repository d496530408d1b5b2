use anyhow::Result;
use clap::Command;
use tracing_subscriber::EnvFilter;

/// Log filter used when `RUST_LOG` is unset: garden warnings only.
pub const DEFAULT_LOG_FILTER: &str = "garden=warn,garden_core=warn";

pub fn build_cli() -> Command {
    Command::new("garden")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Scripted walk through garden management and its error handling")
        .after_help("Diagnostics go to stderr; set RUST_LOG=garden_core=info to see them.")
}

/// Filter from `RUST_LOG`, falling back to [`DEFAULT_LOG_FILTER`].
fn log_filter() -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(DEFAULT_LOG_FILTER))
        .map_err(|e| anyhow::anyhow!("Invalid log filter: {e}"))
}

/// Initialize tracing on stderr so stdout carries only the transcript.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter()?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing subscriber: {e}"))
}
