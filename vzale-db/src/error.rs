//! Error types for vzale-db

use thiserror::Error;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Error, Debug)]
pub enum DbError {
    /// `DATABASE_URL` missing or empty, or a pool knob failed to parse
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// A query helper was called before `initialize()` succeeded
    #[error("DB pool is not initialized")]
    NotInitialized,

    /// Anything the driver raised, passed through as-is
    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

impl DbError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        DbError::Config {
            reason: reason.into(),
        }
    }

    pub fn is_not_initialized(&self) -> bool {
        matches!(self, DbError::NotInitialized)
    }
}
