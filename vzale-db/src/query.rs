//! The three query helpers, against an explicit pool
//!
//! One `sqlx::query_with` call each. No retry, no timeout override, no
//! statement caching beyond what sqlx already does per connection.

use sqlx::postgres::{PgPool, PgQueryResult, PgRow};
use tracing::debug;

use crate::error::DbResult;
use crate::params::Params;

/// Run `query` and collect every row, possibly none.
pub async fn fetch(pool: &PgPool, query: &str, params: Params) -> DbResult<Vec<PgRow>> {
    let rows = sqlx::query_with(query, params.into_arguments())
        .fetch_all(pool)
        .await?;

    debug!(op = "fetch", rows = rows.len(), query, "query complete");
    Ok(rows)
}

/// Run `query` and return its first row, or `None` when it matched nothing.
pub async fn fetchrow(pool: &PgPool, query: &str, params: Params) -> DbResult<Option<PgRow>> {
    let row = sqlx::query_with(query, params.into_arguments())
        .fetch_optional(pool)
        .await?;

    debug!(op = "fetchrow", found = row.is_some(), query, "query complete");
    Ok(row)
}

/// Run a statement for its effect; the result carries `rows_affected()`.
pub async fn execute(pool: &PgPool, query: &str, params: Params) -> DbResult<PgQueryResult> {
    let result = sqlx::query_with(query, params.into_arguments())
        .execute(pool)
        .await?;

    debug!(
        op = "execute",
        rows_affected = result.rows_affected(),
        query,
        "query complete"
    );
    Ok(result)
}
