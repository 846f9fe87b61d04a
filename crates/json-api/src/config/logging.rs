//! Logging Config

use clap::Args;

/// Logging output settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level filter, overridden by `RUST_LOG` when set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
