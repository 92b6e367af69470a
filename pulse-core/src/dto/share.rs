//! Sharing DTOs

use serde::{Deserialize, Serialize};

/// Request body for toggling the GitHub analysis share switch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetShare {
    pub enable: bool,
}

/// Partial update for resume settings.
///
/// Unset fields are left untouched by the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInfoPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_share: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simplify_url: Option<bool>,
}

impl ResumeInfoPatch {
    /// Patch that only toggles the share switch.
    pub fn share(enable: bool) -> Self {
        Self {
            open_share: Some(enable),
            ..Self::default()
        }
    }

    /// Patch that only toggles the simplified URL form.
    pub fn simplify(enable: bool) -> Self {
        Self {
            simplify_url: Some(enable),
            ..Self::default()
        }
    }
}
