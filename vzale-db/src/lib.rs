//! vzale-db: one lazily-created PostgreSQL pool and three query helpers
//!
//! The VZALE bot talks to Postgres through `fetch`, `fetchrow` and
//! `execute`. There is no query builder, no transactions, no retries and no
//! migrations here; everything past "create the pool once" is sqlx.
//!
//! Two ways in:
//!
//! - [`PoolAccessor`]: build one at startup and pass it (or an `Arc` of it)
//!   to whatever needs the database.
//! - [`global`]: `init_db()` once, then the free functions anywhere.
//!
//! ```ignore
//! use vzale_db::{params, PoolAccessor, Row};
//!
//! let db = PoolAccessor::from_env()?;
//! db.initialize().await?;
//!
//! let team = db
//!     .fetchrow("SELECT name FROM teams WHERE id = $1", params![team_id]?)
//!     .await?;
//! if let Some(row) = team {
//!     let name: String = row.try_get("name")?;
//! }
//! ```

pub mod config;
pub mod error;
pub mod global;
pub mod params;
pub mod pool;
pub mod query;

pub use config::{load_dotenv, DbConfig};
pub use error::{DbError, DbResult};
pub use params::Params;
pub use pool::{create_pool, Connector, PgConnector, PoolAccessor};

pub use sqlx::postgres::{PgPool, PgQueryResult, PgRow};
pub use sqlx::Row;
