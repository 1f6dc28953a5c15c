//! Configuration for Starlore
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;
use std::time::Duration;

/// Default NASA API key used when none is configured.
///
/// A plain opaque string per the upstream API contract; NASA's `DEMO_KEY`
/// also works here but is rate-limited more aggressively.
pub const DEFAULT_API_KEY: &str = "A42fQrehHvuqcEgd60Sy1a5BscuwJgnoIyne2VNM";

/// Starlore - Astronomy fact explorer
///
/// "The heavens declare the glory of God" - Psalm 19:1
#[derive(Parser, Debug, Clone)]
#[command(name = "starlore")]
#[command(about = "Astronomy fact explorer backed by NASA's Astronomy Picture of the Day")]
pub struct Args {
    /// Base URL of the NASA planetary API
    #[arg(long, env = "APOD_API_URL", default_value = "https://api.nasa.gov/planetary")]
    pub api_url: String,

    /// NASA API key (falls back to the built-in key when unset)
    #[arg(long, env = "NASA_API_KEY")]
    pub api_key: Option<String>,

    /// Number of facts to fetch per session
    #[arg(long, env = "FACT_COUNT", default_value = "5")]
    pub count: usize,

    /// Fetch the most recent entries instead of random historical dates
    #[arg(long, env = "FETCH_RECENT", default_value = "false")]
    pub recent: bool,

    /// Request timeout in milliseconds
    #[arg(long, env = "REQUEST_TIMEOUT_MS", default_value = "10000")]
    pub request_timeout_ms: u64,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Get effective API key (falls back to the built-in default if not set)
    pub fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or(DEFAULT_API_KEY)
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.count == 0 {
            return Err("FACT_COUNT must be at least 1".to_string());
        }

        if self.request_timeout_ms == 0 {
            return Err("REQUEST_TIMEOUT_MS must be greater than 0".to_string());
        }

        Ok(())
    }
}
