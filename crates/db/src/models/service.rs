//! Service (check) entity model.

use serde::Serialize;
use sqlx::FromRow;

use setforge_core::types::DbId;
use setforge_core::vars::{self, VarMap};

/// A row from the `service` table: one check template or instance.
///
/// `service_set_id` is a non-owning back-reference to the owning set. The
/// resolver clears it when a row is materialised for rendering, so the
/// detached copy never re-enters set resolution.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Service {
    pub id: Option<DbId>,
    pub service_set_id: Option<DbId>,
    pub host_id: Option<DbId>,
    pub object_name: String,
    pub object_type: String,
    pub assign_filter: Option<String>,
    pub use_var_overrides: bool,
    /// Custom variables, stored as JSONB.
    pub vars: serde_json::Value,
}

impl Service {
    /// Decode the JSONB column into an ordered variable map.
    pub fn vars(&self) -> VarMap {
        vars::from_json(&self.vars)
    }

    /// Replace the variable map, re-encoding to the JSONB representation.
    pub fn set_vars(&mut self, vars: &VarMap) {
        self.vars = vars::to_json(vars);
    }
}
