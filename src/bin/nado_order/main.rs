//! Order tool for Nado.
//!
//! This binary packs and inspects order appendices, generates nonces and
//! computes digests and signatures of orders without sending them.

mod commands;
mod config;
mod error;

use clap::Parser;
use std::process::exit;
use tracing::error;

use config::{CliConfig, EnvConfig};

#[tokio::main]
async fn main() {
    // Load .env file
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Warning: Failed to load .env file: {}", e);
    }

    // Parse environment configuration
    let env_config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to parse environment configuration: {}", e);
            exit(1);
        }
    };

    // Parse CLI arguments
    let cli_config = CliConfig::parse();

    // Set up logging
    if std::env::var("RUST_LOG").is_err() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match commands::run(cli_config.command, &env_config).await {
        Ok(output) => println!("{output:#}"),
        Err(e) => {
            error!(%e, "Command failed");
            exit(1);
        }
    }
}
