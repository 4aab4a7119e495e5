use lighter_datastore::database::{
    self, CHECK_TIMEOUT, CheckObserver, ConnectPhase, DatabaseError, TracingObserver,
};
use sea_orm::ConnectionTrait;
use std::sync::Mutex;

#[derive(Debug, Default)]
struct Notes(Mutex<Vec<String>>);

impl CheckObserver for Notes {
    fn on_statement(&self, statement: &str) {
        self.0.lock().unwrap().push(statement.to_string());
    }
}

#[tokio::test]
async fn test_connected_handle_accepts_direct_queries() {
    let conn = database::connect("sqlite::memory:").await.unwrap();

    let result = conn.connection().execute_unprepared("SELECT 42").await;

    assert!(result.is_ok());
}

#[tokio::test]
async fn test_unsupported_scheme_fails_to_open() {
    let err = database::connect("nosuchdb://localhost/app").await.unwrap_err();

    assert_eq!(err.phase(), Some(ConnectPhase::Open));
    assert!(!err.is_timeout());
}

#[tokio::test]
async fn test_check_reports_each_statement_in_order() {
    let conn = database::connect("sqlite::memory:").await.unwrap();
    let notes = Notes::default();

    conn.check_with(&["SELECT 1", "SELECT 2", "SELECT 3"], &notes)
        .await
        .unwrap();

    assert_eq!(*notes.0.lock().unwrap(), vec!["SELECT 1", "SELECT 2", "SELECT 3"]);
}

#[tokio::test]
async fn test_failing_statement_is_named() {
    let conn = database::connect("sqlite::memory:").await.unwrap();
    conn.check(&["SELECT 1"]).await.unwrap();

    let statement = "SELECT nope FROM nowhere";
    let err = conn
        .check_with(&[statement], &TracingObserver)
        .await
        .unwrap_err();

    assert!(matches!(err, DatabaseError::Check { statement: ref s, .. } if s == statement));
    assert!(err.to_string().contains(statement));
}

#[test]
fn test_check_timeout_is_five_seconds() {
    assert_eq!(CHECK_TIMEOUT.as_secs(), 5);
}
