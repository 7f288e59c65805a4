use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, env, fs, path::PathBuf};

use crate::provider::ProviderId;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "BRIEFING_CONFIG";

/// Per-provider settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfig {
    /// Full endpoint URL, replacing the provider's public one.
    pub base_url: Option<String>,
}

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Example TOML:
    /// [providers.openweather]
    /// base_url = "..."
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parse config text, rejecting sections for providers we don't know.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(contents)?;

        for name in cfg.providers.keys() {
            ProviderId::try_from(name.as_str())?;
        }

        Ok(cfg)
    }

    /// Path to the config file; `BRIEFING_CONFIG` wins over the platform default.
    pub fn config_file_path() -> Result<PathBuf> {
        if let Some(path) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("dev", "briefing", "briefing")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn provider_config(&self, id: ProviderId) -> Option<&ProviderConfig> {
        self.providers.get(id.as_str())
    }

    /// Endpoint override for a provider, if one is configured.
    pub fn base_url(&self, id: ProviderId) -> Option<&str> {
        self.provider_config(id)
            .and_then(|cfg| cfg.base_url.as_deref())
            .filter(|url| !url.is_empty())
    }

    pub fn set_base_url(&mut self, id: ProviderId, url: String) {
        self.providers.entry(id.as_str().to_string()).or_default().base_url = Some(url);
    }
}
