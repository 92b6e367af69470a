//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod refresh;
mod share;
mod status;

pub use share::ShareCommands;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Trigger a data refresh and wait for it to finish
    Refresh {
        /// Probe interval in milliseconds
        #[arg(long, default_value = "3000")]
        interval_ms: u64,
    },
    /// Show the current refresh status
    Status,
    /// Manage sharing settings
    Share {
        #[command(subcommand)]
        command: ShareCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The command to execute
/// * `config` - The CLI configuration
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Refresh { interval_ms } => refresh::run(config, interval_ms).await,
        Commands::Status => status::run(config).await,
        Commands::Share { command } => share::handle_share_command(command, config).await,
    }
}

/// Human-readable "time ago" form of a timestamp.
pub(crate) fn relative_time(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - time).num_seconds().max(0);
    if seconds < 60 {
        format!("{} seconds ago", seconds)
    } else if seconds < 3600 {
        format!("{} minutes ago", seconds / 60)
    } else if seconds < 86400 {
        format!("{} hours ago", seconds / 3600)
    } else {
        format!("{} days ago", seconds / 86400)
    }
}
