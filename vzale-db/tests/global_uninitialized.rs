//! The process-wide helpers before `init_db()` has run
//!
//! Kept in its own test binary so no other test can initialize the static pool.

use vzale_db::{global, DbError, Params};

#[tokio::test]
async fn helpers_fail_before_init_db() {
    assert!(!global::is_initialized());
    assert!(matches!(global::ensure_pool(), Err(DbError::NotInitialized)));

    let fetch = global::fetch("SELECT 1", Params::new()).await;
    assert!(matches!(fetch, Err(DbError::NotInitialized)));

    let fetchrow = global::fetchrow("SELECT 1", Params::new()).await;
    assert!(matches!(fetchrow, Err(DbError::NotInitialized)));

    let execute = global::execute("UPDATE t SET x = 1 WHERE 1 = 0", Params::new()).await;
    let err = execute.unwrap_err();
    assert!(err.is_not_initialized());
    assert_eq!(err.to_string(), "DB pool is not initialized");

    // Asking for the pool never creates it
    assert!(!global::is_initialized());
}
