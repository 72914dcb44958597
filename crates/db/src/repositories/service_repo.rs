//! Repository for the `service` table.

use sqlx::PgPool;

use setforge_core::types::DbId;

use crate::models::service::Service;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, service_set_id, host_id, object_name, object_type, assign_filter, use_var_overrides, vars";

/// Provides query operations for service rows.
pub struct ServiceRepo;

impl ServiceRepo {
    /// Find a service by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// IDs of every service owned by a set.
    pub async fn ids_for_set(pool: &PgPool, set_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM service WHERE service_set_id = $1 ORDER BY id",
        )
        .bind(set_id)
        .fetch_all(pool)
        .await
    }

    /// All service rows owned by a set, in insertion (id) order.
    pub async fn list_for_set(pool: &PgPool, set_id: DbId) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM service WHERE service_set_id = $1 ORDER BY id");
        sqlx::query_as::<_, Service>(&query)
            .bind(set_id)
            .fetch_all(pool)
            .await
    }
}
