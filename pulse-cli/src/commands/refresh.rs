//! `refresh` command handler
//!
//! Triggers a server-side data refresh and watches it to completion.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use colored::*;
use pulse_client::DashboardClient;
use pulse_watch::RefreshMonitor;

use crate::config::Config;

/// Trigger a refresh and poll until the job reports completion.
pub async fn run(config: &Config, interval_ms: u64) -> Result<()> {
    let client = DashboardClient::new(&config.api_url);

    let status = client
        .update_status()
        .await
        .context("Failed to check refresh status")?;
    if !status.refresh_enable {
        anyhow::bail!("the server is not accepting refreshes right now");
    }

    let monitor =
        RefreshMonitor::new(Arc::new(client)).with_interval(Duration::from_millis(interval_ms));

    println!("{}", "Refreshing data...".bold());
    let watch = monitor
        .launch()
        .await
        .context("Failed to trigger refresh")?;

    tokio::select! {
        result = watch.wait() => {
            let status = result.context("Refresh watch ended unexpectedly")?;
            println!("{}", "Refresh complete".green().bold());
            if let Some(t) = status.last_update_time {
                println!("Last update: {}", super::relative_time(t, chrono::Utc::now()));
            }
        }
        _ = tokio::signal::ctrl_c() => {
            // Dropping the watch disarms the poller; no timer outlives us.
            println!();
            println!("{}", "Interrupted; the refresh continues server-side".yellow());
        }
    }

    Ok(())
}
