//! Content API endpoint configuration.

use serde::{Deserialize, Serialize};

use crate::content::IMAGE_DETAILS;

/// Where the content API lives and how image sections are tagged.
///
/// Every field has a default, so a partial (or empty) config object is
/// accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Prefix for API paths. Empty means same origin (proxied).
    pub base_url: String,
    /// `content_type` written with image sections.
    pub content_type: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            content_type: IMAGE_DETAILS.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Path of a single content record.
    pub fn content_path(&self, key: &str) -> String {
        format!("{}/api/content/{}", self.base(), key)
    }

    /// Path files are uploaded to.
    pub fn upload_path(&self) -> String {
        format!("{}/api/upload", self.base())
    }

    fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
