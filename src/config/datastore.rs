use serde::{Deserialize, Serialize};

use super::{ConfigError, Validate, WithDefaults};

/// Top-level datastore configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatastoreConfig {
    /// Postgres connection settings
    #[serde(default)]
    pub postgres: PostgresConfig,
    /// Cache connection settings
    #[serde(default)]
    pub cache: CacheConfig,
}

/// Postgres connection settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostgresConfig {
    /// Connection string handed to the driver
    #[serde(default)]
    pub dsn: String,
    /// Extra read-only statements run after connecting
    #[serde(default)]
    pub checks: Vec<String>,
}

/// Cache connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Connection string handed to the cache connector
    #[serde(default)]
    pub dsn: String,
    /// Seconds the cache connector may spend connecting
    #[serde(default = "default_cache_timeout_seconds")]
    pub timeout_seconds: u64,
}

fn default_cache_timeout_seconds() -> u64 {
    5
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            dsn: String::new(),
            timeout_seconds: default_cache_timeout_seconds(),
        }
    }
}

impl Validate for PostgresConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.dsn.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "postgres.dsn cannot be empty".to_string(),
            ));
        }
        if self.checks.iter().any(|stmt| stmt.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "postgres.checks cannot contain empty statements".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for CacheConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.dsn.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "cache.dsn cannot be empty".to_string(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::ValidationError(
                "cache.timeout_seconds must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for DatastoreConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.postgres.validate()?;
        self.cache.validate()?;
        Ok(())
    }
}

impl WithDefaults for DatastoreConfig {
    fn with_defaults() -> Self {
        Self {
            postgres: PostgresConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

/// Load configuration from files and environment variables
///
/// Configuration loading follows this precedence (highest to lowest):
/// 1. Environment variables: LIGHTER_DATASTORE__POSTGRES__DSN=postgres://...
///    (`POSTGRES__CHECKS` takes statements separated by `;`)
/// 2. config/local.toml (git-ignored, developer overrides)
/// 3. config/{APP_ENV}.toml (development/staging/production)
/// 4. config/default.toml (base defaults)
pub fn load_config() -> Result<DatastoreConfig, ConfigError> {
    use config::{Config, Environment, File};

    let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

    let config = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(File::with_name(&format!("config/{}", env)).required(false))
        .add_source(File::with_name("config/local").required(false))
        .add_source(
            Environment::with_prefix("LIGHTER_DATASTORE")
                .separator("__")
                .try_parsing(true)
                .list_separator(";")
                .with_list_parse_key("postgres.checks")
        )
        .build()?;

    let datastore_config: DatastoreConfig = config.try_deserialize()?;

    datastore_config.validate()?;

    Ok(datastore_config)
}
