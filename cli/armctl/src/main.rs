//! armctl - CLI for Azure Resource Manager IDs
//!
//! Parses and formats resource IDs, runs field validators, and resolves
//! policy definitions by display name.

use anyhow::Result;
use arm_client::ClientConfig;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;
mod output;

use commands::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error::print_error(&anyhow::Error::from(e));
            std::process::exit(1);
        }
    };

    // Prefer RUST_LOG, fall back to ARM_LOG_LEVEL
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| config.log_level.clone().into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.run(config).await {
        error::print_error(&e);
        std::process::exit(1);
    }

    Ok(())
}
