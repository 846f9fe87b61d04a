//! Store Config

use clap::Args;

/// Cart store settings.
#[derive(Debug, Args)]
pub struct StoreConfig {
    /// Redis connection string
    #[arg(long, env = "REDIS_URL", default_value = "redis://127.0.0.1:6379")]
    pub redis_url: String,
}
