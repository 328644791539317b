use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

fn default_port() -> u16 { 8080 }
fn default_static_dir() -> String { "static".to_string() }

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory served for every path the API does not claim
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    #[serde(default)]
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
            cors_permissive: false,
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct PreferencesConfig {
    /// JSON file backing the language/theme flags. In-memory when unset.
    pub store_path: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            Self::load(path)
        } else {
            tracing::warn!(path, "config file not found, using defaults");
            Ok(Self::default())
        }
    }
}
