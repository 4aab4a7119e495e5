//! Cache connection contract
//!
//! The datastore does not ship a cache client. Applications plug one in by
//! implementing [`CacheConnector`], which follows the same open-then-verify
//! shape as the database connection: either a ready handle comes back within
//! `timeout_seconds`, or an error does.

use async_trait::async_trait;
use std::fmt::Debug;
use thiserror::Error;

use crate::metrics;

/// Failure reported while connecting to the cache
#[derive(Error, Debug)]
pub enum CacheError {
    /// The connector could not produce a ready handle
    #[error("could not connect to cache: {0}")]
    Connect(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Opens and verifies a cache connection
#[async_trait]
pub trait CacheConnector: Send + Sync + Debug {
    /// Ready-to-use cache handle
    type Handle: Send;

    /// Error reported by the underlying cache client
    type Error: std::error::Error + Send + Sync + 'static;

    /// Connect to the cache at `dsn`, giving up after `timeout_seconds`
    async fn connect(&self, dsn: &str, timeout_seconds: u64) -> Result<Self::Handle, Self::Error>;
}

/// Connect to the cache through `connector`
#[tracing::instrument(skip(connector, dsn))]
pub async fn connect_cache<C>(
    connector: &C,
    dsn: &str,
    timeout_seconds: u64,
) -> Result<C::Handle, CacheError>
where
    C: CacheConnector,
{
    match connector.connect(dsn, timeout_seconds).await {
        Ok(handle) => {
            tracing::debug!("Cache connection ready");
            metrics::record_connection("cache", true);
            Ok(handle)
        }
        Err(e) => {
            tracing::error!(error = %e, "Could not connect to cache");
            metrics::record_connection("cache", false);
            Err(CacheError::Connect(Box::new(e)))
        }
    }
}
