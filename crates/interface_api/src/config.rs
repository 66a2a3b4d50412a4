//! API configuration
//!
//! Settings are layered: built-in defaults, then an optional
//! `config/biztime.toml`, then `BIZTIME_*` environment variables. A plain
//! `DATABASE_URL` wins over everything for the connection string.

use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use infra_db::DatabaseConfig;

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Database URL
    pub database_url: String,
    /// Log filter directive (trace, debug, info, warn, error or a full EnvFilter)
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Upper bound of the connection pool
    pub max_connections: u32,
    /// Idle connections kept open
    pub min_connections: u32,
    /// Seconds a request waits for a pooled connection
    pub acquire_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "postgres://localhost/biztime".to_string(),
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            max_connections: 10,
            min_connections: 2,
            acquire_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the config file and environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder(std::env::var("DATABASE_URL").ok())?
            .build()?
            .try_deserialize()
    }

    /// Configuration built from defaults only
    pub fn with_defaults() -> Self {
        Self::default()
    }

    fn builder(
        database_url: Option<String>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Self::default();

        Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", defaults.port)?
            .set_default("database_url", defaults.database_url)?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("max_connections", defaults.max_connections)?
            .set_default("min_connections", defaults.min_connections)?
            .set_default("acquire_timeout_secs", defaults.acquire_timeout_secs)?
            .add_source(File::with_name("config/biztime").required(false))
            .add_source(Environment::with_prefix("BIZTIME").try_parsing(true))
            .set_override_option("database_url", database_url)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool settings derived from this configuration
    pub fn database_config(&self) -> DatabaseConfig {
        DatabaseConfig::new(&self.database_url)
            .max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
    }
}
