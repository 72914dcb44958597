//! Zone entity model.

use serde::Serialize;
use sqlx::FromRow;

use setforge_core::types::DbId;

/// A row from the `zone` table. Zones form a parent chain; the chain is
/// expected to be acyclic and is walked with an explicit guard.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Zone {
    pub id: DbId,
    pub object_name: String,
    pub parent_zone_id: Option<DbId>,
}
