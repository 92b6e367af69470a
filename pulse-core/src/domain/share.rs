//! Sharing settings domain types

use serde::{Deserialize, Serialize};

/// Sharing state of the GitHub analysis page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareRecords {
    /// Path component of the public share URL.
    pub url: String,
    /// Locale the shared page is rendered in.
    pub locale: String,
    /// Whether the page is publicly visible.
    pub open_share: bool,
}

impl ShareRecords {
    /// Public share URL for the analysis page on the given host.
    pub fn share_url(&self, host: &str) -> String {
        format!("{}/{}", host, self.url)
    }
}

/// Sharing state of the resume page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInfo {
    /// Path component of the public share URL.
    pub url: String,
    /// Locale the shared page is rendered in.
    pub locale: String,
    /// Hash identifying the resume in the hash-based share URL.
    pub resume_hash: String,
    /// Whether the resume is publicly visible.
    pub open_share: bool,
    /// Whether the login-based short URL form is active.
    pub simplify_url: bool,
}

impl ResumeInfo {
    /// Public share URL for the resume.
    ///
    /// With `simplify_url` set, the login-based short form is used;
    /// otherwise the hash-based form.
    pub fn share_url(&self, host: &str, login: &str) -> String {
        if self.simplify_url {
            format!("{}/{}/resume?locale={}", host, login, self.locale)
        } else {
            format!("{}/resume/{}?locale={}", host, self.resume_hash, self.locale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_records_wire_shape() {
        let records: ShareRecords = serde_json::from_str(
            r#"{"url": "github/abc123", "locale": "en", "openShare": true}"#,
        )
        .unwrap();
        assert!(records.open_share);
        assert_eq!(records.share_url("dash.example.com"), "dash.example.com/github/abc123");
    }

    #[test]
    fn resume_share_url_forms() {
        let mut info = ResumeInfo {
            url: "resume/xyz".to_string(),
            locale: "en".to_string(),
            resume_hash: "xyz".to_string(),
            open_share: true,
            simplify_url: false,
        };
        assert_eq!(
            info.share_url("dash.example.com", "octocat"),
            "dash.example.com/resume/xyz?locale=en"
        );

        info.simplify_url = true;
        assert_eq!(
            info.share_url("dash.example.com", "octocat"),
            "dash.example.com/octocat/resume?locale=en"
        );
    }
}
