//! Fundraise portal backend.
//!
//! Usage:
//!   fundraise serve              - Start the HTTP API
//!   fundraise leaderboard        - Print the leaderboard
//!   fundraise rewards <user-id>  - Print reward status
//!   fundraise stats <user-id>    - Print dashboard statistics

use clap::Parser;
use fundraise::cli::{self, Cli};
use fundraise::config::AppConfig;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match cli::run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
