//! Data refresh and GitHub sharing endpoints

use crate::DashboardClient;
use crate::error::Result;
use pulse_core::domain::share::ShareRecords;
use pulse_core::domain::status::UpdateStatus;
use pulse_core::dto::share::SetShare;

impl DashboardClient {
    // =============================================================================
    // Data Refresh
    // =============================================================================

    /// Trigger a server-side refresh of the synced GitHub data
    ///
    /// The request carries no body and the response carries no payload;
    /// completion is observed by polling [`update_status`](Self::update_status).
    ///
    /// # Example
    /// ```no_run
    /// # use pulse_client::DashboardClient;
    /// # async fn example() -> pulse_client::Result<()> {
    /// let client = DashboardClient::new("http://localhost:8080");
    /// client.trigger_refresh().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn trigger_refresh(&self) -> Result<()> {
        let url = format!("{}/api/github/refresh", self.base_url);
        let response = self.client.post(&url).send().await?;

        self.handle_empty_response(response).await
    }

    /// Fetch the current refresh job status
    ///
    /// # Returns
    /// The status snapshot, including the numeric job status and the last
    /// update time
    pub async fn update_status(&self) -> Result<UpdateStatus> {
        let url = format!("{}/api/github/refresh/status", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    // =============================================================================
    // GitHub Sharing
    // =============================================================================

    /// Fetch the sharing state of the GitHub analysis page
    ///
    /// # Returns
    /// `None` if no share records exist yet for this account
    pub async fn share_records(&self) -> Result<Option<ShareRecords>> {
        let url = format!("{}/api/github/share", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_optional_response(response).await
    }

    /// Toggle public sharing of the GitHub analysis page
    ///
    /// # Arguments
    /// * `enable` - The new share state
    pub async fn set_github_share(&self, enable: bool) -> Result<()> {
        let url = format!("{}/api/github/share", self.base_url);
        let response = self
            .client
            .patch(&url)
            .json(&SetShare { enable })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
