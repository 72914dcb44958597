//! Host entity model.

use serde::Serialize;
use sqlx::FromRow;

use setforge_core::types::DbId;
use setforge_core::vars::{self, VarMap};

/// A row from the `host` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Host {
    pub id: DbId,
    pub object_name: String,
    pub zone_id: Option<DbId>,
    /// Custom variables, stored as JSONB. Assign filters match against these.
    pub vars: serde_json::Value,
}

impl Host {
    /// Decode the JSONB column into an ordered variable map.
    pub fn vars(&self) -> VarMap {
        vars::from_json(&self.vars)
    }
}
