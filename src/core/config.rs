//! CLI configuration - API endpoint and cache policy
//!
//! Precedence: `--api-url` flag / `TENPO_API_URL` env (handled by clap),
//! then `config.yaml` under the user config dir, then built-in defaults.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the Tenpo REST API
    pub api_url: String,
    /// How long a cached collection snapshot stays fresh
    pub cache_ttl_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl Config {
    /// Load the user config file, falling back to defaults when it is
    /// missing or unreadable
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| fs::read_to_string(path).ok())
            .map(|content| Self::from_yaml(&content))
            .unwrap_or_default()
    }

    fn from_yaml(content: &str) -> Self {
        serde_yml::from_str(content).unwrap_or_default()
    }

    /// Apply a flag/env override for the API URL
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url {
            self.api_url = url;
        }
        self
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "tenpo", "tat")
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Directory for collection cache snapshots
    pub fn cache_dir() -> PathBuf {
        Self::project_dirs()
            .map(|dirs| dirs.cache_dir().to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("tat-cache"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_url, "http://localhost:8080");
        assert_eq!(config.cache_ttl_secs, 60);
    }

    #[test]
    fn test_from_yaml_partial_file_keeps_defaults() {
        let config = Config::from_yaml("api_url: https://api.tenpo.cl\n");
        assert_eq!(config.api_url, "https://api.tenpo.cl");
        assert_eq!(config.cache_ttl_secs, 60);
    }

    #[test]
    fn test_from_yaml_garbage_falls_back_to_defaults() {
        let config = Config::from_yaml(": not yaml :");
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_flag_override_wins() {
        let config = Config::default().with_api_url(Some("http://staging:9090".to_string()));
        assert_eq!(config.api_url, "http://staging:9090");

        let config = Config::default().with_api_url(None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
