//! Host/service blacklist entity model.

use serde::Serialize;
use sqlx::FromRow;

use setforge_core::types::DbId;

/// A row from the `host_service_blacklist` table: suppresses one service
/// on one host. Rows are pruned when their service disappears through a
/// service-set deletion.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HostServiceBlacklistEntry {
    pub host_id: DbId,
    pub service_id: DbId,
}
