use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_BASE_URL: &str = "https://api.quran.com/api/v4";

/// Translation resource 33: Indonesian Ministry of Religious Affairs.
pub const DEFAULT_TRANSLATION_ID: u32 = 33;

pub const DEFAULT_LANGUAGE: &str = "id";

/// Settings for [`QuranClient`](super::QuranClient).
///
/// Fields missing from a configuration file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub base_url: String,
    /// Translation resource used for verse and chapter translations.
    pub translation_id: u32,
    /// Language for chapter and juz listings.
    pub language: String,
    /// Per-request timeout; no timeout when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            translation_id: DEFAULT_TRANSLATION_ID,
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_translation(mut self, translation_id: u32) -> Self {
        self.translation_id = translation_id;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = Some(timeout.as_secs());
        self
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
