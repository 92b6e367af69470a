//! `share` command handlers
//!
//! Displays and toggles sharing settings for the GitHub analysis and
//! resume pages.

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use colored::*;
use pulse_client::DashboardClient;
use pulse_core::dto::share::ResumeInfoPatch;

use crate::config::Config;

/// Sharing subcommands
#[derive(Subcommand)]
pub enum ShareCommands {
    /// Show sharing settings and share URLs
    Show,
    /// Toggle sharing of the GitHub analysis page
    Github { state: ShareState },
    /// Toggle sharing of the resume page
    Resume { state: ShareState },
    /// Toggle the simplified resume share URL
    SimplifyUrl { state: ShareState },
}

/// On/off switch argument
#[derive(Clone, Copy, ValueEnum)]
pub enum ShareState {
    On,
    Off,
}

impl ShareState {
    fn enabled(self) -> bool {
        matches!(self, ShareState::On)
    }
}

/// Handle share commands
///
/// Routes share subcommands to their respective handlers.
///
/// # Arguments
/// * `command` - The share command to execute
/// * `config` - The CLI configuration
pub async fn handle_share_command(command: ShareCommands, config: &Config) -> Result<()> {
    let client = DashboardClient::new(&config.api_url);

    match command {
        ShareCommands::Show => show(&client, config).await,
        ShareCommands::Github { state } => {
            client.set_github_share(state.enabled()).await?;
            println!("GitHub analysis sharing {}", state_label(state.enabled()));
            Ok(())
        }
        ShareCommands::Resume { state } => {
            client
                .patch_resume_info(&ResumeInfoPatch::share(state.enabled()))
                .await?;
            println!("Resume sharing {}", state_label(state.enabled()));
            Ok(())
        }
        ShareCommands::SimplifyUrl { state } => {
            client
                .patch_resume_info(&ResumeInfoPatch::simplify(state.enabled()))
                .await?;
            println!("Simplified resume URL {}", state_label(state.enabled()));
            Ok(())
        }
    }
}

fn state_label(enabled: bool) -> ColoredString {
    if enabled {
        "enabled".green()
    } else {
        "disabled".yellow()
    }
}

/// Print share state and public URLs for both pages.
async fn show(client: &DashboardClient, config: &Config) -> Result<()> {
    let host = config.display_host();

    match client.share_records().await? {
        Some(records) => {
            println!("{}", "GitHub analysis".bold());
            println!("  sharing: {}", state_label(records.open_share));
            println!("  url:     {}", records.share_url(host));
        }
        None => println!("{}", "No GitHub share records yet.".yellow()),
    }

    println!();

    match client.resume_info().await? {
        Some(info) => {
            println!("{}", "Resume".bold());
            println!("  sharing:        {}", state_label(info.open_share));
            println!(
                "  simplified url: {}",
                if info.simplify_url { "on" } else { "off" }
            );
            match (info.simplify_url, config.login.as_deref()) {
                (true, None) => println!(
                    "  url:            {}",
                    "set --login to print the simplified URL".dimmed()
                ),
                (_, login) => println!(
                    "  url:            {}",
                    info.share_url(host, login.unwrap_or_default())
                ),
            }
        }
        None => println!("{}", "No resume uploaded yet.".yellow()),
    }

    Ok(())
}
