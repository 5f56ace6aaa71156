//! API configuration
//!
//! Server settings come from `API_*` environment variables through the
//! `config` crate. Connection strings follow their own naming: `URL_BD` is
//! the "principal" database and `URL_BD_<NAME>` registers the logical
//! database `<name>` (so `URL_BD_FILME` becomes "filme").

use std::collections::BTreeMap;
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use infra_db::DatabaseConfig;

/// Logical name of the default database
pub const PRIMARY_DATABASE: &str = "principal";

/// Logical name of the movie database
pub const MOVIE_DATABASE: &str = "filme";

const URL_VAR: &str = "URL_BD";
const URL_VAR_PREFIX: &str = "URL_BD_";
const FALLBACK_URL_VAR: &str = "DATABASE_URL";

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable lines
    #[default]
    Text,
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
    /// Log level
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Message shown by the status endpoint
    pub message: String,
    /// Author shown by the status endpoint
    pub author: String,
    /// Maximum connections per pool
    pub max_connections: u32,
    /// Seconds a query waits for a free connection
    pub acquire_timeout_secs: u64,
    /// Create every pool at startup instead of on first request
    pub eager_pools: bool,
    /// Connection string per logical database name
    #[serde(skip)]
    pub databases: BTreeMap<String, String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            message: "API de questões e filmes".to_string(),
            author: String::new(),
            max_connections: 10,
            acquire_timeout_secs: 30,
            eager_pools: false,
            databases: BTreeMap::new(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_sources(
            Environment::with_prefix("API").try_parsing(true),
            std::env::vars(),
        )
    }

    /// Loads configuration from an `API_*` source and a set of variables
    /// holding connection strings
    pub fn from_sources<I>(api: Environment, vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let defaults = Self::default();
        let mut config: ApiConfig = Config::builder()
            .set_default("host", defaults.host)?
            .set_default("port", i64::from(defaults.port))?
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "text")?
            .set_default("message", defaults.message)?
            .set_default("author", defaults.author)?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("acquire_timeout_secs", defaults.acquire_timeout_secs as i64)?
            .set_default("eager_pools", defaults.eager_pools)?
            .add_source(api)
            .build()?
            .try_deserialize()?;

        config.databases = database_urls(vars);
        Ok(config)
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Pool configuration for every configured database
    pub fn database_configs(&self) -> Vec<(String, DatabaseConfig)> {
        self.databases
            .iter()
            .map(|(name, url)| {
                let config = DatabaseConfig::new(url.clone())
                    .max_connections(self.max_connections)
                    .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs));
                (name.clone(), config)
            })
            .collect()
    }
}

/// Maps connection string variables to logical database names
///
/// `URL_BD` wins over `DATABASE_URL` for the primary database; empty values
/// are ignored.
pub fn database_urls<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut urls = BTreeMap::new();
    let mut primary = None;
    let mut fallback = None;

    for (key, value) in vars {
        if value.trim().is_empty() {
            continue;
        }
        if key == URL_VAR {
            primary = Some(value);
        } else if key == FALLBACK_URL_VAR {
            fallback = Some(value);
        } else if let Some(suffix) = key.strip_prefix(URL_VAR_PREFIX) {
            if !suffix.is_empty() {
                urls.insert(suffix.to_lowercase(), value);
            }
        }
    }

    if let Some(url) = primary.or(fallback) {
        urls.insert(PRIMARY_DATABASE.to_string(), url);
    }
    urls
}
