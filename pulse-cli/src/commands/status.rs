//! `status` command handler
//!
//! One-shot fetch and display of the refresh job status.

use anyhow::Result;
use colored::*;
use pulse_client::DashboardClient;

use crate::config::Config;

/// Fetch and display the current refresh status.
pub async fn run(config: &Config) -> Result<()> {
    let client = DashboardClient::new(&config.api_url);
    let status = client.update_status().await?;

    if status.is_complete() {
        println!("{}", "Refresh complete".green().bold());
    } else {
        println!("{}", "Refresh in progress".yellow().bold());
    }

    match status.last_update_time {
        Some(t) => println!(
            "Last update: {}",
            super::relative_time(t, chrono::Utc::now()).bold()
        ),
        None => println!("Last update: {}", "unknown".dimmed()),
    }

    if !status.refresh_enable {
        println!("{}", "Refreshing is currently disabled".dimmed());
    }

    Ok(())
}
