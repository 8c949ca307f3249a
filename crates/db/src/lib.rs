//! MySQL access layer for the sakila rental dataset.
//!
//! Row models live in [`models`], the SQL in [`repositories`], and
//! [`catalog`] ties them together behind the [`Catalog`] trait so each
//! logical operation runs on one pooled connection.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

pub mod catalog;
pub mod models;
pub mod repositories;

pub use catalog::{Catalog, MySqlCatalog};

pub type DbPool = sqlx::MySqlPool;

/// Create a bounded connection pool. Checked-out connections return to the
/// pool when their guard drops.
pub async fn create_pool(
    options: MySqlConnectOptions,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<DbPool, sqlx::Error> {
    MySqlPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect_with(options)
        .await
}
