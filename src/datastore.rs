//! Datastore built from configuration
//!
//! Connects Postgres first and the cache second. Either failure aborts the
//! whole construction; nothing half-connected is returned.

use thiserror::Error;

use crate::cache::{self, CacheConnector, CacheError};
use crate::config::{ConfigError, DatastoreConfig, Validate};
use crate::database::{self, DatabaseError, PostgresConnection, TracingObserver};

#[derive(Error, Debug)]
pub enum DatastoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("postgres: {0}")]
    Database(#[from] DatabaseError),

    #[error(transparent)]
    Cache(#[from] CacheError),
}

/// Verified Postgres connection paired with a cache handle
#[derive(Debug)]
pub struct Datastore<H> {
    postgres: PostgresConnection,
    cache: H,
}

impl<H> Datastore<H> {
    /// Connect every backend named in `config`
    ///
    /// Configured `postgres.checks` run once the connection is verified, with
    /// each statement logged before it executes.
    #[tracing::instrument(skip_all)]
    pub async fn connect<C>(
        config: &DatastoreConfig,
        connector: &C,
    ) -> Result<Self, DatastoreError>
    where
        C: CacheConnector<Handle = H>,
    {
        config.validate()?;

        let postgres = database::connect(&config.postgres.dsn).await?;

        if !config.postgres.checks.is_empty() {
            let checks: Vec<&str> = config.postgres.checks.iter().map(String::as_str).collect();
            postgres.check_with(&checks, &TracingObserver).await?;
        }

        let cache =
            cache::connect_cache(connector, &config.cache.dsn, config.cache.timeout_seconds)
                .await?;

        tracing::info!("Datastore connected");
        Ok(Self { postgres, cache })
    }

    pub fn postgres(&self) -> &PostgresConnection {
        &self.postgres
    }

    pub fn cache(&self) -> &H {
        &self.cache
    }

    /// Run liveness probes against Postgres, see [`PostgresConnection::check`]
    pub async fn check(&self, statements: &[&str]) -> Result<(), DatastoreError> {
        self.postgres.check(statements).await?;
        Ok(())
    }

    pub fn into_parts(self) -> (PostgresConnection, H) {
        (self.postgres, self.cache)
    }
}
