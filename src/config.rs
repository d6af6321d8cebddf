//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::endpoint::DEFAULT_API_BASE;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// API credential configuration.
    #[serde(default)]
    pub auth: AuthConfig,

    /// Endpoint overrides.
    #[serde(default)]
    pub endpoints: EndpointsConfig,
}

/// API credential configuration.
#[derive(Debug, Default, Deserialize)]
pub struct AuthConfig {
    /// Hugging Face API token. There is no built-in default; the token
    /// must come from here or from `HF_API_TOKEN`.
    pub token: Option<String>,
}

/// Endpoint overrides.
#[derive(Debug, Default, Deserialize)]
pub struct EndpointsConfig {
    /// Base URL of the inference API.
    pub base_url: Option<String>,
}

impl Config {
    /// Load configuration from the given path, or return defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }

    /// Get the API token, preferring the `HF_API_TOKEN` environment variable.
    #[must_use]
    pub fn api_token(&self) -> Option<String> {
        std::env::var("HF_API_TOKEN").ok().or_else(|| self.auth.token.clone())
    }

    /// Get the API base URL, preferring the `TRIPTYCH_API_BASE` environment
    /// variable and falling back to the public inference host.
    #[must_use]
    pub fn api_base(&self) -> String {
        std::env::var("TRIPTYCH_API_BASE")
            .ok()
            .or_else(|| self.endpoints.base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string())
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `TRIPTYCH_CONFIG` environment variable
/// 3. `~/.config/triptych/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("TRIPTYCH_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/triptych/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/triptych/config.toml")
    } else {
        PathBuf::from("triptych.toml")
    }
}
