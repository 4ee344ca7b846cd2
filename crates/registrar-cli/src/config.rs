//! Configuration management for Registrar CLI
//!
//! Stores the API base URL and the session identifiers in
//! ~/.config/registrar/config.toml

use anyhow::{Context, Result};
use registrar::{FilingId, SessionContext};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "registrar";
const CONFIG_FILE: &str = "config.toml";
const BASE_URL_ENV: &str = "REGISTRAR_BASE_URL";

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub session: SessionContext,
}

fn default_base_url() -> String {
    "http://localhost:5000/api/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            session: SessionContext::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Base URL to use, with `REGISTRAR_BASE_URL` taking precedence
    pub fn effective_base_url(&self) -> String {
        std::env::var(BASE_URL_ENV).unwrap_or_else(|_| self.base_url.clone())
    }

    /// Load config from a file, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Save config to a file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory {:?}", dir))?;
        }

        let content = self.to_toml()?;

        fs::write(path, content).with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Render the config as it is written to disk
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Set session identifiers; `None` leaves a value unchanged
    pub fn set_session(
        &mut self,
        business_id: Option<String>,
        temp_id: Option<String>,
        filing_id: Option<FilingId>,
    ) {
        if let Some(id) = business_id {
            self.session.business_id = Some(id);
        }
        if let Some(id) = temp_id {
            self.session.temp_id = Some(id);
        }
        if let Some(id) = filing_id {
            self.session.filing_id = Some(id);
        }
    }

    /// Forget all session identifiers
    pub fn clear_session(&mut self) {
        self.session = SessionContext::default();
    }
}
