#![deny(warnings)]

pub mod cache;
pub mod config;
pub mod database;
pub mod datastore;
pub mod metrics;

// Re-export commonly used types for convenience
pub use cache::{CacheConnector, CacheError, connect_cache};
pub use database::{ConnectPhase, DatabaseError, PostgresConnection, connect};
pub use datastore::{Datastore, DatastoreError};
