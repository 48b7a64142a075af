//! Client configuration. The backend base URL is a fixed default; native
//! builds may override it from a `.litpath.toml` file:
//!
//! ```toml
//! [backend]
//! base_url = "http://10.0.0.5:5000"
//! ```

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use crate::error::ConfigError;

/// Where the search backend listens unless configured otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".litpath.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    backend: BackendSection,
}

#[derive(Deserialize, Default)]
struct BackendSection {
    base_url: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Load from `path`. A missing file yields the defaults; an unreadable or
    /// malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(match file.backend.base_url {
            Some(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Self::default(),
        })
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}
