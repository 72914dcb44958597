//! Store lifecycle: key-based loading, pre-store validation and the
//! deletion cascade.

use setforge_core::error::CoreError;
use setforge_core::key::{self, ObjectKey};
use setforge_core::types::DbId;
use setforge_db::models::{CreateServiceSet, ServiceSet};

use crate::error::CompileError;
use crate::resolver;
use crate::store::ConfigStore;

/// Load a set by textual identity key.
pub async fn load_by_key(
    store: &dyn ConfigStore,
    raw_key: &str,
) -> Result<Option<ServiceSet>, CompileError> {
    let key: ObjectKey = key::parse_key(raw_key)?;
    Ok(store.find_set(&key).await?)
}

/// Validate a set before it is written.
///
/// A concrete object must be bound to a host, and a new template's name
/// must not collide with an already persisted template.
pub async fn before_store(store: &dyn ConfigStore, set: &ServiceSet) -> Result<(), CompileError> {
    if set.is_object() && set.host_id.is_none() {
        return Err(CoreError::ObjectWithoutHost(set.object_name.clone()).into());
    }

    if set.id.is_none() && set.is_template() && store.template_exists(&set.object_name).await? {
        return Err(CoreError::DuplicateTemplateName(set.object_name.clone()).into());
    }

    Ok(())
}

/// Validate and insert a new set.
pub async fn store_new(
    store: &dyn ConfigStore,
    input: &CreateServiceSet,
) -> Result<ServiceSet, CompileError> {
    before_store(store, &input.as_unsaved()).await?;
    Ok(store.insert_set(input).await?)
}

/// Delete a set, first pruning blacklist rows for every concrete service
/// it currently resolves to, so no orphaned suppression markers survive.
pub async fn delete(store: &dyn ConfigStore, set: &ServiceSet) -> Result<(), CompileError> {
    if let Some(host_id) = set.host_id {
        let members = resolver::resolve_members(store, set).await?;
        let service_ids: Vec<DbId> = members.values().filter_map(|s| s.id).collect();

        if !service_ids.is_empty() {
            let pruned = store.delete_blacklist(host_id, &service_ids).await?;
            tracing::debug!(
                host_id,
                pruned,
                set = %set.object_name,
                "pruned blacklist rows for deleted service set"
            );
        }
    }

    if let Some(id) = set.id {
        store.delete_set(id).await?;
    }
    Ok(())
}
