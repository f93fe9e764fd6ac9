//! Startup without `DATABASE_URL`
//!
//! Own test binary: it mutates the process environment.

use vzale_db::{global, DbError, PoolAccessor};

#[tokio::test]
async fn init_db_without_url_is_config_error() {
    // Keep dotenvy away from any .env in the crate's ancestors
    std::env::set_current_dir(std::env::temp_dir()).expect("chdir failed");
    std::env::remove_var("DATABASE_URL");

    let err = global::init_db().await.unwrap_err();
    match err {
        DbError::Config { reason } => assert!(reason.contains("DATABASE_URL")),
        other => panic!("expected config error, got {other:?}"),
    }

    assert!(!global::is_initialized());
    assert!(matches!(global::ensure_pool(), Err(DbError::NotInitialized)));

    let err = PoolAccessor::from_env().unwrap_err();
    assert!(matches!(err, DbError::Config { .. }));
}
