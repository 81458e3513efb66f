use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::constants::GENERATION_TIMEOUT_SECS;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Generation service settings (OpenRouter)
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Offline fallback settings
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Generation service configuration (OpenRouter integration)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// API key for the generation service. Prefer the PENNA_API_KEY
    /// environment variable or the keyring over storing it here.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Model to use (default: anthropic/claude-3-haiku)
    #[serde(default = "default_model")]
    pub model: String,
    /// Timeout for a single generation request, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FallbackConfig {
    /// Apply the randomized humanizer to fallback drafts
    #[serde(default)]
    pub humanize: bool,
    /// Fixed humanizer seed; unset means a fresh OS seed per draft
    #[serde(default)]
    pub humanize_seed: Option<u64>,
}

fn default_model() -> String {
    "anthropic/claude-3-haiku".to_string()
}

fn default_timeout_secs() -> u64 {
    GENERATION_TIMEOUT_SECS
}

impl Config {
    pub fn config_dir() -> Result<PathBuf> {
        let dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("penna");
        Ok(dir)
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file, or defaults when none exists.
    ///
    /// A missing file is not an error: every setting has a default and the
    /// API key can arrive through the environment or keyring.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let dir = path.parent().unwrap();

        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }
}
