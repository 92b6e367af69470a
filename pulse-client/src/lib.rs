//! Dashboard API client
//!
//! A typed HTTP client for the dashboard backend API: the data refresh
//! surface (trigger + status) and sharing settings for the GitHub analysis
//! and resume pages.
//!
//! # Example
//!
//! ```no_run
//! use pulse_client::DashboardClient;
//!
//! # async fn example() -> pulse_client::Result<()> {
//! let client = DashboardClient::new("http://localhost:8080");
//!
//! let status = client.update_status().await?;
//! println!("refresh status: {}", status.status);
//! # Ok(())
//! # }
//! ```

pub mod error;
mod github;
mod resume;

// Re-export commonly used types
pub use error::{ClientError, Result};

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

/// HTTP client for the dashboard API
///
/// One method per endpoint, organized into two groups:
/// - Data refresh (trigger, status)
/// - Sharing settings (GitHub analysis, resume)
#[derive(Debug, Clone)]
pub struct DashboardClient {
    /// Base URL of the dashboard backend (e.g., "http://localhost:8080")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl DashboardClient {
    /// Create a new dashboard client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the dashboard API (e.g., "http://localhost:8080")
    ///
    /// # Example
    /// ```
    /// use pulse_client::DashboardClient;
    ///
    /// let client = DashboardClient::new("http://localhost:8080");
    /// ```
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new dashboard client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the dashboard API
    /// * `client` - A configured reqwest Client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the dashboard API
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            debug!(status = status.as_u16(), "API request failed");
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response whose body is not consumed (e.g., the refresh
    /// trigger)
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }

    /// Handle an API response for a resource that may not exist yet
    ///
    /// A 404 maps to `Ok(None)`; any other failure is an error.
    async fn handle_optional_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<Option<T>> {
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        self.handle_response(response).await.map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = DashboardClient::new("http://localhost:8080");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = DashboardClient::new("http://localhost:8080/");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = DashboardClient::with_client("http://localhost:8080", http_client);
        assert_eq!(client.base_url(), "http://localhost:8080");
    }
}
