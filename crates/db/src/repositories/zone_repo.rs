//! Repository for the `zone` table.

use sqlx::PgPool;

use setforge_core::types::DbId;
use setforge_core::zones::ChainGuard;

use crate::error::StoreError;
use crate::models::zone::Zone;

const COLUMNS: &str = "id, object_name, parent_zone_id";

/// Provides query operations for zones, including the guarded
/// parent-chain walk used by rendering-zone resolution.
pub struct ZoneRepo;

impl ZoneRepo {
    /// Find a zone by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Zone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM zone WHERE id = $1");
        sqlx::query_as::<_, Zone>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a zone by object name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Zone>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM zone WHERE object_name = $1");
        sqlx::query_as::<_, Zone>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Walk the parent chain starting at `zone` and fail if it loops or
    /// exceeds the depth bound of [`ChainGuard`]. An acyclic chain passes
    /// unchanged; the guard only exists so a miswired parent edge cannot
    /// hang a compile run.
    pub async fn assert_chain_terminates(pool: &PgPool, zone: &Zone) -> Result<(), StoreError> {
        let mut guard = ChainGuard::new(zone.id);

        let mut next = zone.parent_zone_id;
        while let Some(parent_id) = next {
            if !guard.step(parent_id) {
                tracing::error!(zone_id = zone.id, parent_id, "zone parent chain loops");
                return Err(StoreError::ZoneChainLoop(zone.id));
            }
            let parent = Self::find_by_id(pool, parent_id)
                .await?
                .ok_or(StoreError::ZoneNotFound(parent_id))?;
            next = parent.parent_zone_id;
        }
        Ok(())
    }
}
