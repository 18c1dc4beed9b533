mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::QuoteVibeError;
use defaults::*;

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
    #[serde(default)]
    pub geo: GeoConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// Backend API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the backend, without the `/api` suffix.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Locale fallback settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Language used when nothing else wins and for translation fallback.
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_country")]
    pub default_country: String,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            default_country: default_country(),
        }
    }
}

/// IP geolocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoConfig {
    /// Whether to consult the geolocation service at startup.
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_geo_endpoint")]
    pub endpoint: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            endpoint: default_geo_endpoint(),
        }
    }
}

/// Preference store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_db_path")]
    pub db_path: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
        }
    }
}

/// Load configuration from a TOML file, falling back to defaults when the
/// file does not exist.
pub fn load(path: &str) -> Result<Config, QuoteVibeError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| QuoteVibeError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| QuoteVibeError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
