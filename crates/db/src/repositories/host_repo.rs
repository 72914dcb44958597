//! Repository for the `host` table.

use sqlx::PgPool;

use setforge_core::types::DbId;

use crate::models::host::Host;

const COLUMNS: &str = "id, object_name, zone_id, vars";

/// Provides query operations for hosts.
pub struct HostRepo;

impl HostRepo {
    /// Find a host by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Host>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM host WHERE id = $1");
        sqlx::query_as::<_, Host>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a host by object name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Host>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM host WHERE object_name = $1");
        sqlx::query_as::<_, Host>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// The full host inventory, ordered by name. Assign filters are
    /// evaluated against this list in the legacy dialect.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Host>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM host ORDER BY object_name, id");
        sqlx::query_as::<_, Host>(&query).fetch_all(pool).await
    }
}
