//! Lazily-created connection pool
//!
//! [`PoolAccessor`] owns the config and a once-cell for the pool. The first
//! successful [`PoolAccessor::initialize`] creates the pool; every later call
//! (including concurrent ones racing the first) gets that same pool back.
//! A failed initialization leaves the accessor uninitialized and is not
//! retried here.

use std::fmt;

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgQueryResult, PgRow};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::config::{load_dotenv, DbConfig};
use crate::error::{DbError, DbResult};
use crate::params::Params;
use crate::query;

/// Creates pools from a config (testable)
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, config: &DbConfig) -> Result<PgPool, sqlx::Error>;
}

/// Real connector: opens a sqlx pool and its first connection eagerly, so an
/// unreachable host fails here rather than on the first query.
#[derive(Debug, Clone, Copy, Default)]
pub struct PgConnector;

#[async_trait]
impl Connector for PgConnector {
    async fn connect(&self, config: &DbConfig) -> Result<PgPool, sqlx::Error> {
        pool_options(config).connect(config.database_url()).await
    }
}

/// sqlx pool options for `config`; unset knobs keep the sqlx defaults.
pub fn pool_options(config: &DbConfig) -> PgPoolOptions {
    let mut options = PgPoolOptions::new();

    if let Some(max) = config.max_connections() {
        options = options.max_connections(max);
    }
    if let Some(min) = config.min_connections() {
        options = options.min_connections(min);
    }
    if let Some(timeout) = config.acquire_timeout() {
        options = options.acquire_timeout(timeout);
    }

    options
}

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns the driver error if the connection fails.
///
/// # Example
///
/// ```ignore
/// let config = DbConfig::new("postgres://localhost/vzale")?;
/// let pool = create_pool(&config).await?;
/// ```
pub async fn create_pool(config: &DbConfig) -> DbResult<PgPool> {
    open_pool(&PgConnector, config).await
}

pub(crate) async fn open_pool<C>(connector: &C, config: &DbConfig) -> DbResult<PgPool>
where
    C: Connector + ?Sized,
{
    match connector.connect(config).await {
        Ok(pool) => {
            info!(url = %config.redacted_url(), "Database pool created");
            Ok(pool)
        }
        Err(e) => {
            warn!(url = %config.redacted_url(), error = %e, "Failed to create database pool");
            Err(e.into())
        }
    }
}

/// Owns one lazily-created pool and forwards queries to it.
///
/// Share it by reference or behind an `Arc`; all methods take `&self`.
pub struct PoolAccessor<C = PgConnector> {
    config: DbConfig,
    connector: C,
    pool: OnceCell<PgPool>,
}

impl PoolAccessor<PgConnector> {
    pub fn new(config: DbConfig) -> Self {
        Self::with_connector(config, PgConnector)
    }

    /// Load `.env`, then read the config from the environment.
    ///
    /// Fails with [`DbError::Config`] when `DATABASE_URL` is missing, so a
    /// process that builds its accessor at startup cannot get any further.
    pub fn from_env() -> DbResult<Self> {
        load_dotenv();
        Ok(Self::new(DbConfig::from_env()?))
    }
}

impl<C: Connector> PoolAccessor<C> {
    pub fn with_connector(config: DbConfig, connector: C) -> Self {
        Self {
            config,
            connector,
            pool: OnceCell::new(),
        }
    }

    pub fn config(&self) -> &DbConfig {
        &self.config
    }

    /// Create the pool if it does not exist yet. Idempotent.
    pub async fn initialize(&self) -> DbResult<&PgPool> {
        if let Some(pool) = self.pool.get() {
            debug!("Database pool already initialized");
            return Ok(pool);
        }

        self.pool
            .get_or_try_init(|| open_pool(&self.connector, &self.config))
            .await
    }

    pub fn is_initialized(&self) -> bool {
        self.pool.initialized()
    }

    /// The pool, or [`DbError::NotInitialized`] before `initialize()` succeeded.
    pub fn pool(&self) -> DbResult<&PgPool> {
        self.pool.get().ok_or(DbError::NotInitialized)
    }

    pub async fn fetch(&self, query: &str, params: Params) -> DbResult<Vec<PgRow>> {
        query::fetch(self.pool()?, query, params).await
    }

    pub async fn fetchrow(&self, query: &str, params: Params) -> DbResult<Option<PgRow>> {
        query::fetchrow(self.pool()?, query, params).await
    }

    pub async fn execute(&self, query: &str, params: Params) -> DbResult<PgQueryResult> {
        query::execute(self.pool()?, query, params).await
    }
}

impl<C> fmt::Debug for PoolAccessor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolAccessor")
            .field("config", &self.config)
            .field("initialized", &self.pool.initialized())
            .finish()
    }
}
