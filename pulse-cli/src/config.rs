//! Configuration module
//!
//! CLI configuration shared by all subcommands. The account login is an
//! explicit parameter here; library code never reads it from the ambient
//! environment.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the dashboard API
    pub api_url: String,
    /// Account login for simplified resume share URLs
    pub login: Option<String>,
}

impl Config {
    /// Host portion of the API URL, used when printing share URLs.
    pub fn display_host(&self) -> &str {
        self.api_url
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
    }
}
