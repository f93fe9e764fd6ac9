//! Process-wide pool
//!
//! The same contract as [`PoolAccessor`](crate::PoolAccessor), backed by one
//! static once-cell, for code that would rather call free functions than
//! carry a handle around. Call [`init_db`] once at startup.

use sqlx::postgres::{PgPool, PgQueryResult, PgRow};
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::{load_dotenv, DbConfig};
use crate::error::{DbError, DbResult};
use crate::params::Params;
use crate::pool::{open_pool, PgConnector};
use crate::query;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Create the process-wide pool from `DATABASE_URL`. Idempotent.
///
/// Loads `.env` first. A missing `DATABASE_URL` is [`DbError::Config`];
/// a failed connection is returned as-is and leaves the pool unset.
pub async fn init_db() -> DbResult<&'static PgPool> {
    if let Some(pool) = POOL.get() {
        debug!("Database pool already initialized");
        return Ok(pool);
    }

    load_dotenv();
    let config = DbConfig::from_env()?;

    POOL.get_or_try_init(|| async { open_pool(&PgConnector, &config).await })
        .await
}

pub fn is_initialized() -> bool {
    POOL.initialized()
}

/// The process-wide pool, or [`DbError::NotInitialized`] before [`init_db`].
pub fn ensure_pool() -> DbResult<&'static PgPool> {
    POOL.get().ok_or(DbError::NotInitialized)
}

pub async fn fetch(query: &str, params: Params) -> DbResult<Vec<PgRow>> {
    query::fetch(ensure_pool()?, query, params).await
}

pub async fn fetchrow(query: &str, params: Params) -> DbResult<Option<PgRow>> {
    query::fetchrow(ensure_pool()?, query, params).await
}

pub async fn execute(query: &str, params: Params) -> DbResult<PgQueryResult> {
    query::execute(ensure_pool()?, query, params).await
}
