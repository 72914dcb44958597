//! Service-set entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use setforge_core::types::{DbId, OBJECT_TYPE_APPLY, OBJECT_TYPE_OBJECT, OBJECT_TYPE_TEMPLATE};
use setforge_core::vars::{self, VarMap};

/// A row from the `service_set` table.
///
/// `id` is `None` only for sets constructed in memory and not yet stored;
/// an unsaved set owns no queryable members. A set with `host_id` set is a
/// concrete instance on that host; without it, the set is a reusable
/// template (enforced before store).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ServiceSet {
    pub id: Option<DbId>,
    pub host_id: Option<DbId>,
    pub object_name: String,
    pub object_type: String,
    pub description: Option<String>,
    pub assign_filter: Option<String>,
    /// Custom variables, stored as JSONB.
    pub vars: serde_json::Value,
}

impl ServiceSet {
    pub fn is_template(&self) -> bool {
        self.object_type == OBJECT_TYPE_TEMPLATE
    }

    pub fn is_object(&self) -> bool {
        self.object_type == OBJECT_TYPE_OBJECT
    }

    pub fn is_apply(&self) -> bool {
        self.object_type == OBJECT_TYPE_APPLY
    }

    /// Decode the JSONB column into an ordered variable map.
    pub fn vars(&self) -> VarMap {
        vars::from_json(&self.vars)
    }
}

/// DTO for creating a new service set.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateServiceSet {
    pub host_id: Option<DbId>,
    pub object_name: String,
    pub object_type: String,
    pub description: Option<String>,
    pub assign_filter: Option<String>,
    #[serde(default = "empty_vars")]
    pub vars: serde_json::Value,
}

fn empty_vars() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl CreateServiceSet {
    /// View the DTO as an unsaved row for pre-store validation.
    pub fn as_unsaved(&self) -> ServiceSet {
        ServiceSet {
            id: None,
            host_id: self.host_id,
            object_name: self.object_name.clone(),
            object_type: self.object_type.clone(),
            description: self.description.clone(),
            assign_filter: self.assign_filter.clone(),
            vars: self.vars.clone(),
        }
    }
}
