//! Client-side settings.
//!
//! Reads `~/.impact-explorer/config.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Client configuration file. Every key is optional; CLI flags win.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Catalog file used instead of the built-in endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,

    /// Base URL written into snippets (e.g. "https://api.impact.com").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ClientConfig {
    /// Default config file path: ~/.impact-explorer/config.toml.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Catalog file to use: the flag, then the config file, else built-in.
    pub fn catalog_path(&self, flag: Option<&str>) -> Option<PathBuf> {
        flag.or(self.catalog.as_deref()).map(PathBuf::from)
    }
}

/// Return the config directory (~/.impact-explorer).
fn dirs_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(".impact-explorer")
}
