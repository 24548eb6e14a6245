//! Gateway error taxonomy.
//!
//! Four failure classes cover every gateway outcome:
//! - `Validation` is rejected before any I/O and never retried
//! - `NotFound` is non-fatal; callers reconcile by dropping the stale id
//! - `Auth` forces re-authentication and is never retried silently
//! - `Transient` is a network or storage hiccup; the optimistic local
//!   mutation is rolled back and the user may retry

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("invalid input: {0}")]
    Validation(String),

    #[error("task not found: {0}")]
    NotFound(i64),

    #[error("authentication failed")]
    Auth,

    #[error("transient I/O failure: {0}")]
    Transient(String),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound(_))
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transient(err.to_string())
    }
}

impl From<rusqlite::Error> for GatewayError {
    fn from(err: rusqlite::Error) -> Self {
        GatewayError::Transient(err.to_string())
    }
}
