//! Starlore - Astronomy fact explorer
//!
//! "The heavens declare the glory of God" - Psalm 19:1

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use starlore::apod::{ApodClient, ApodClientConfig};
use starlore::config::Args;
use starlore::view::{run_session, FetchMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Parse command line arguments
    let args = Args::parse();

    // Initialize tracing/logging
    let log_level = args.log_level.clone();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("starlore={},warn", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Validate configuration
    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    // Print startup banner
    info!("======================================");
    info!("  Starlore - Astronomy Fact Explorer");
    info!("  \"The heavens declare the glory\"");
    info!("======================================");
    info!("Build: {} ({})", env!("GIT_COMMIT_SHORT"), env!("BUILD_TIMESTAMP"));
    info!("API: {}", args.api_url);
    info!("Facts per session: {}", args.count);
    info!("Mode: {}", if args.recent { "RECENT" } else { "RANDOM" });
    info!("======================================");

    let client = ApodClient::with_config(ApodClientConfig {
        base_url: args.api_url.clone(),
        api_key: args.api_key().to_string(),
        request_timeout: args.request_timeout(),
    });

    let mode = if args.recent {
        FetchMode::Recent
    } else {
        FetchMode::Random
    };

    run_session(&client, args.count, mode).await
}
