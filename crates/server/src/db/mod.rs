//! Database access for the payment-status catalog.
//!
//! # Tables
//!
//! - `payment_statuses` - Catalog of payment states
//!   (`id` BIGSERIAL, `code` unique, `name`, `description`, `category`,
//!   `color`, `is_active`)
//!
//! Rows are soft-deleted by toggling `is_active`; inactive rows remain
//! queryable when no `is_active` filter is applied.

pub mod payment_statuses;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use payment_statuses::PaymentStatusRepository;

/// Errors from repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested row does not exist.
    #[error("record not found")]
    NotFound,

    /// Connection, query, or driver failure. The cause chain is preserved.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// The pool is shared and thread-safe; repositories borrow it freely.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}
