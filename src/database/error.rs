use std::fmt;
use std::time::Duration;

use sea_orm::DbErr;
use thiserror::Error;

/// Phase of [`connect`](super::connect) that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectPhase {
    /// The driver refused to build a connection from the DSN
    Open,
    /// The connection was built but the liveness probe failed
    Check,
}

impl fmt::Display for ConnectPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectPhase::Open => write!(f, "could not open connection"),
            ConnectPhase::Check => write!(f, "connection check failed"),
        }
    }
}

/// Errors raised while opening or checking a database connection
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Opening or verifying a new connection failed
    #[error("{phase}: {source}")]
    Connection {
        phase: ConnectPhase,
        #[source]
        source: Box<DatabaseError>,
    },

    /// A caller supplied probe statement failed
    #[error("failed check on statement {statement}: {source}")]
    Check {
        statement: String,
        #[source]
        source: Box<DatabaseError>,
    },

    /// The statement did not complete before its deadline
    #[error("statement did not complete within {0:?}")]
    Timeout(Duration),

    /// Error reported by the driver
    #[error(transparent)]
    Driver(#[from] DbErr),
}

impl DatabaseError {
    pub(crate) fn connection(phase: ConnectPhase, source: DatabaseError) -> Self {
        DatabaseError::Connection {
            phase,
            source: Box::new(source),
        }
    }

    pub(crate) fn check(statement: &str, source: DatabaseError) -> Self {
        DatabaseError::Check {
            statement: statement.to_string(),
            source: Box::new(source),
        }
    }

    /// Phase of `connect` that failed, if this is a connection error
    pub fn phase(&self) -> Option<ConnectPhase> {
        match self {
            DatabaseError::Connection { phase, .. } => Some(*phase),
            _ => None,
        }
    }

    /// Statement that failed, if this is (or wraps) a check error
    pub fn statement(&self) -> Option<&str> {
        match self {
            DatabaseError::Check { statement, .. } => Some(statement),
            DatabaseError::Connection { source, .. } => source.statement(),
            _ => None,
        }
    }

    /// Whether a probe timeout is anywhere in the chain
    pub fn is_timeout(&self) -> bool {
        match self {
            DatabaseError::Timeout(_) => true,
            DatabaseError::Connection { source, .. } | DatabaseError::Check { source, .. } => {
                source.is_timeout()
            }
            DatabaseError::Driver(_) => false,
        }
    }
}
