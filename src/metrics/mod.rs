//! Connection metrics
//!
//! Recorded through the `metrics` facade. Installing a recorder or exporter is
//! up to the application embedding this crate.

use std::time::Duration;

use metrics::{counter, describe_counter, describe_histogram, histogram};

pub const CONNECTIONS_TOTAL: &str = "datastore_connections_total";
pub const CHECKS_TOTAL: &str = "datastore_checks_total";
pub const CHECK_DURATION_SECONDS: &str = "datastore_check_duration_seconds";

/// Register metric descriptions with the installed recorder
pub fn describe() {
    describe_counter!(
        CONNECTIONS_TOTAL,
        "Total number of connection attempts by backend and outcome"
    );
    describe_counter!(
        CHECKS_TOTAL,
        "Total number of liveness probe statements by outcome"
    );
    describe_histogram!(
        CHECK_DURATION_SECONDS,
        "Liveness probe statement duration in seconds"
    );
}

fn outcome(success: bool) -> &'static str {
    if success { "success" } else { "failure" }
}

pub(crate) fn record_connection(backend: &'static str, success: bool) {
    counter!(CONNECTIONS_TOTAL, "backend" => backend, "outcome" => outcome(success)).increment(1);
}

pub(crate) fn record_check(success: bool, duration: Duration) {
    counter!(CHECKS_TOTAL, "outcome" => outcome(success)).increment(1);
    histogram!(CHECK_DURATION_SECONDS).record(duration.as_secs_f64());
}
