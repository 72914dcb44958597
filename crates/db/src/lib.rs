//! Database layer: sqlx models and repositories for the setforge schema.

pub mod error;
pub mod models;
pub mod repositories;

/// Connection pool alias used across crates.
pub type DbPool = sqlx::PgPool;

/// Embedded schema migrations (`crates/db/migrations`).
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();
