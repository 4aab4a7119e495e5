pub mod datastore;

pub use datastore::{CacheConfig, DatastoreConfig, PostgresConfig};

use thiserror::Error;

/// Configuration loading or validation failure
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A source could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    /// A value was loaded but is not acceptable
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Checks a configuration section for invalid values
pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Builds a configuration section from its defaults
pub trait WithDefaults {
    fn with_defaults() -> Self;
}

/// Load the datastore configuration from files and environment variables
pub fn load() -> Result<DatastoreConfig, ConfigError> {
    datastore::load_config()
}
