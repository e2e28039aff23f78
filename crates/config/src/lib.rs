//! Configuration management for the CellRepair.AI client
//!
//! Handles loading and saving collaboration settings from the local data directory.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

pub mod paths;

pub use paths::{config_path, data_dir};

/// Environment variable consulted for the API key
pub const API_KEY_ENV: &str = "CELLREPAIR_API_KEY";

/// Where users obtain an API key
pub const API_KEY_URL: &str = "https://cellrepair.ai/api/";

/// Errors in configuration handling
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("CONFIG IO ERROR: {0}")]
    Io(#[from] std::io::Error),

    #[error("CONFIG PARSE ERROR: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// What to do when no API key can be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CredentialPolicy {
    /// Refuse to build a client without a key
    Strict,
    /// Build the client anyway; every call reports the missing key
    #[default]
    Lenient,
}

/// Layout of the rendered collaboration result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStyle {
    /// Recommendation, whole-percent confidence, agent count
    #[default]
    Compact,
    /// Adds implementation time and ROI estimate, one-decimal confidence
    Detailed,
}

/// Collaborate endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaborateConfig {
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_system")]
    pub system: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub credential_policy: CredentialPolicy,
    #[serde(default)]
    pub report_style: ReportStyle,
}

impl Default for CollaborateConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_url: default_api_url(),
            system: default_system(),
            timeout_secs: default_timeout_secs(),
            credential_policy: CredentialPolicy::default(),
            report_style: ReportStyle::default(),
        }
    }
}

fn default_api_url() -> String {
    "https://cellrepair.ai/api/v1/collaborate".to_string()
}

fn default_system() -> String {
    "LangChain".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Root configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub collaborate: CollaborateConfig,
}

impl Config {
    /// Load configuration from the default location
    pub async fn load() -> Result<Self> {
        let path = config_path();
        Self::load_from(&path).await
    }

    /// Load from specific location
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("◆ NO CONFIG FOUND AT {:?}, USING DEFAULTS", path);
            return Ok(Config::default());
        }

        debug!("◆ READING CONFIG FROM {:?}", path);
        let content = tokio::fs::read_to_string(path).await?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save to specific location
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        debug!("◆ WRITING CONFIG TO {:?}", path);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        tokio::fs::write(path, content).await?;
        Ok(())
    }

    /// Stored API key, if one is set
    pub fn api_key(&self) -> Option<String> {
        let key = &self.collaborate.api_key;
        if key.is_empty() {
            None
        } else {
            Some(key.clone())
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key().is_some()
    }

    /// Collaborate endpoint URL
    pub fn api_url(&self) -> &str {
        &self.collaborate.api_url
    }
}

/// Initialize the data directory with a default config
pub async fn init() -> Result<Config> {
    init_at(&config_path()).await
}

/// Initialize a config file at the given path
pub async fn init_at(path: &Path) -> Result<Config> {
    if path.exists() {
        warn!("◆ CONFIG ALREADY PRESENT AT {:?}", path);
    } else {
        let config = Config::default();
        config.save_to(path).await?;
        info!("◆ CONFIG CREATED AT {:?}", path);
    }

    Config::load_from(path).await
}
