//! Pulse CLI
//!
//! Command-line interface for the dashboard backend: trigger and watch
//! data refreshes, and manage sharing settings for the GitHub analysis and
//! resume pages.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "Dashboard refresh watcher and sharing settings CLI", long_about = None)]
struct Cli {
    /// Dashboard API URL
    #[arg(long, env = "PULSE_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    /// Account login, used for simplified resume share URLs
    #[arg(long, env = "PULSE_LOGIN")]
    login: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pulse_cli=info,pulse_watch=info,pulse_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
        login: cli.login,
    };

    handle_command(cli.command, &config).await
}
