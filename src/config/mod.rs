//! Configuration management.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the RapidAPI key.
pub const API_KEY_ENV: &str = "JSEARCH_API_KEY";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// JSearch API settings
    #[serde(default)]
    pub jsearch: JSearchConfig,
}

/// Read-only settings for the JSearch API, established once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JSearchConfig {
    /// Search endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Value for the X-RapidAPI-Host header
    #[serde(default = "default_host")]
    pub host: String,

    /// RapidAPI key; a search fails fast when this is missing or blank
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for JSearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            host: default_host(),
            api_key: std::env::var(API_KEY_ENV).ok(),
        }
    }
}

fn default_endpoint() -> String {
    "https://jsearch.p.rapidapi.com/search".to_string()
}

fn default_host() -> String {
    "jsearch.p.rapidapi.com".to_string()
}

/// Load configuration from a file, with `JOBSCOUT_`-prefixed environment
/// variables layered on top.
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("JOBSCOUT").separator("__"))
        .build()?;

    let mut config: Config = settings.try_deserialize()?;
    if config.jsearch.api_key.is_none() {
        config.jsearch.api_key = std::env::var(API_KEY_ENV).ok();
    }
    Ok(config)
}

/// Get the default configuration (from env vars or defaults)
pub fn get_config() -> Config {
    Config::default()
}
