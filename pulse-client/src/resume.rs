//! Resume settings endpoints

use crate::DashboardClient;
use crate::error::Result;
use pulse_core::domain::share::ResumeInfo;
use pulse_core::dto::share::ResumeInfoPatch;

impl DashboardClient {
    /// Fetch the resume settings
    ///
    /// # Returns
    /// `None` if no resume has been uploaded for this account
    pub async fn resume_info(&self) -> Result<Option<ResumeInfo>> {
        let url = format!("{}/api/resume/info", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_optional_response(response).await
    }

    /// Apply a partial update to the resume settings
    ///
    /// # Arguments
    /// * `patch` - The fields to change; unset fields are left untouched
    ///
    /// # Returns
    /// The updated resume settings
    pub async fn patch_resume_info(&self, patch: &ResumeInfoPatch) -> Result<ResumeInfo> {
        let url = format!("{}/api/resume/info", self.base_url);
        let response = self.client.patch(&url).json(patch).send().await?;

        self.handle_response(response).await
    }
}
