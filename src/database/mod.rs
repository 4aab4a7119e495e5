//! Database connection module
//!
//! Opens a driver connection from a DSN and only returns it once a liveness
//! probe succeeded. Pooling, retries and queries are left to the caller.

mod connection;
mod error;
mod observer;

pub use connection::{CHECK_TIMEOUT, DEFAULT_PROBE, PostgresConnection, connect};
pub use error::{ConnectPhase, DatabaseError};
pub use observer::{CheckObserver, NoopObserver, TracingObserver};
