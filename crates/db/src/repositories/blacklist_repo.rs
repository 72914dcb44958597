//! Repository for the `host_service_blacklist` table.

use sqlx::PgPool;

use setforge_core::types::DbId;

use crate::models::blacklist::HostServiceBlacklistEntry;

/// Provides mutation and inspection operations for blacklist rows.
pub struct BlacklistRepo;

impl BlacklistRepo {
    /// Delete every blacklist row for `host_id` whose service is in
    /// `service_ids`. Returns the number of rows removed.
    pub async fn delete_for_host_services(
        pool: &PgPool,
        host_id: DbId,
        service_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        if service_ids.is_empty() {
            return Ok(0);
        }
        let result = sqlx::query(
            "DELETE FROM host_service_blacklist
             WHERE host_id = $1 AND service_id = ANY($2)",
        )
        .bind(host_id)
        .bind(service_ids)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// All blacklist rows for one host, ordered by service id.
    pub async fn list_for_host(
        pool: &PgPool,
        host_id: DbId,
    ) -> Result<Vec<HostServiceBlacklistEntry>, sqlx::Error> {
        sqlx::query_as::<_, HostServiceBlacklistEntry>(
            "SELECT host_id, service_id FROM host_service_blacklist
             WHERE host_id = $1 ORDER BY service_id",
        )
        .bind(host_id)
        .fetch_all(pool)
        .await
    }
}
