//! Observability sinks for probe statements
//!
//! `PostgresConnection::check_with` notifies an observer before each caller
//! supplied statement runs. The notification is informational only and can
//! never fail the check.

use std::fmt::Debug;

/// Receives a note before each probe statement executes
pub trait CheckObserver: Send + Sync + Debug {
    /// Called with the statement that is about to run
    fn on_statement(&self, statement: &str);
}

/// Observer that discards every note
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl CheckObserver for NoopObserver {
    fn on_statement(&self, _statement: &str) {}
}

/// Observer that emits each note as a `tracing` info event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CheckObserver for TracingObserver {
    fn on_statement(&self, statement: &str) {
        tracing::info!(statement = %statement, "Checking postgres with statement");
    }
}
