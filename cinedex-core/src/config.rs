//! Provider configuration: API key, endpoints, language, request timeout.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

/// Environment variable consulted for the provider API key.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";
const DEFAULT_LANGUAGE: &str = "en-US";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the metadata provider client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub api_key: String,
    pub base_url: String,
    pub image_base_url: String,
    pub language: String,
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    /// Load configuration: defaults, then the config file if present, then
    /// the `TMDB_API_KEY` environment variable overriding the key.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("cinedex").join("config.json");
            if let Some(loaded) = Self::from_file(&config_path) {
                config = loaded;
            }
        }

        if let Ok(api_key) = std::env::var(API_KEY_ENV) {
            config.api_key = api_key;
        }

        config
    }

    /// Read a config file; absent or unreadable files yield `None`.
    pub fn from_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        match serde_json::from_str(&content) {
            Ok(config) => Some(config),
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "ignoring unreadable provider config"
                );
                None
            }
        }
    }

    /// Write this configuration to the given path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
    }

    /// Check that both base URLs parse as absolute URLs.
    pub fn validate(&self) -> Result<(), url::ParseError> {
        Url::parse(&self.base_url)?;
        Url::parse(&self.image_base_url)?;
        Ok(())
    }
}
