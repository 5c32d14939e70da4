//! Configuration module
//!
//! Settings are read from a TOML file (default
//! `~/.config/restaurant-voice/config.toml`, overridable with
//! `RESTAURANT_CONFIG`). Every section falls back to defaults, so an empty
//! file is a valid configuration. Secrets come from the environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Environment variable holding the realtime provider API key.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("restaurant-voice")
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub cache: CacheConfig,
    pub restaurant: RestaurantConfig,
    pub voice: VoiceConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and apply environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut cfg = Self::from_toml(&raw)?;
        cfg.apply_env_overrides();
        Ok(cfg)
    }

    pub fn from_toml(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// `OPENAI_API_KEY` and `DATABASE_URL` win over file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            self.voice.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("DATABASE_URL") {
            self.database.url = url;
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory with the static frontend (index.html, js, css).
    pub public_dir: PathBuf,
    /// Seconds to wait for in-flight work on shutdown
    pub shutdown_timeout: u64,
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            public_dir: PathBuf::from("public"),
            shutdown_timeout: 30,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SeaORM connection URL (e.g. "sqlite://./restaurant.db?mode=rwc")
    pub url: String,
    /// Insert the demo menu and availability slots into an empty database.
    pub seed_demo_data: bool,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            url: "sqlite://./restaurant.db?mode=rwc".to_string(),
            seed_demo_data: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub availability_ttl_secs: u64,
    pub menu_ttl_secs: u64,
    /// How often expired entries are swept from memory
    pub sweep_interval_secs: u64,
}

impl CacheConfig {
    pub fn availability_ttl(&self) -> Duration {
        Duration::from_secs(self.availability_ttl_secs)
    }

    pub fn menu_ttl(&self) -> Duration {
        Duration::from_secs(self.menu_ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            availability_ttl_secs: 120,
            menu_ttl_secs: 3600,
            sweep_interval_secs: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RestaurantConfig {
    pub name: String,
    pub city: String,
    /// Human fallback contact quoted in error messages
    pub phone: String,
    /// Flat surcharge added to delivery orders
    pub delivery_fee: Decimal,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            name: "Il-Barri Restaurant".to_string(),
            city: "Valletta".to_string(),
            phone: "+356 2133 7367".to_string(),
            delivery_fee: Decimal::new(300, 2),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Provider credential; normally supplied through `OPENAI_API_KEY`.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub voice: String,
    pub max_sessions_per_address: u32,
    pub rate_limit_window_secs: u64,
    pub request_timeout_secs: u64,
}

impl VoiceConfig {
    pub fn rate_limit_window(&self) -> Duration {
        Duration::from_secs(self.rate_limit_window_secs)
    }
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-realtime-preview-2024-12-17".to_string(),
            voice: "alloy".to_string(),
            max_sessions_per_address: 10,
            rate_limit_window_secs: 3600,
            request_timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
