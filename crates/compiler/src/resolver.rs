//! Resolves the concrete service definitions a service set renders.

use std::collections::BTreeMap;

use setforge_core::types::OBJECT_TYPE_TEMPLATE;
use setforge_db::models::{Service, ServiceSet};

use crate::error::CompileError;
use crate::store::ConfigStore;

/// Resolve the members of `set`, indexed and ordered by object name.
///
/// A host-bound set owns no services of its own; it renders the members of
/// its imported template. NOTE: only the first import is consulted, any
/// further imports are silently ignored. This matches long-standing
/// behavior of the system this replaces and is deliberately preserved.
///
/// A set without a persisted id resolves to nothing: an unsaved set has no
/// queryable children yet.
pub async fn resolve_members(
    store: &dyn ConfigStore,
    set: &ServiceSet,
) -> Result<BTreeMap<String, Service>, CompileError> {
    if set.host_id.is_some() {
        let Some(id) = set.id else {
            return Ok(BTreeMap::new());
        };
        match store.imports_of(id).await?.into_iter().next() {
            Some(template) => members_of(store, &template).await,
            None => Ok(BTreeMap::new()),
        }
    } else {
        members_of(store, set).await
    }
}

/// Fetch the services directly owned by `set`, materialised as detached
/// template-typed copies with the owning-set back-reference cleared.
/// Duplicate names overwrite earlier entries (last write wins).
async fn members_of(
    store: &dyn ConfigStore,
    set: &ServiceSet,
) -> Result<BTreeMap<String, Service>, CompileError> {
    let Some(id) = set.id else {
        return Ok(BTreeMap::new());
    };

    let mut members = BTreeMap::new();
    for mut service in store.services_for_set(id).await? {
        service.object_type = OBJECT_TYPE_TEMPLATE.to_string();
        service.service_set_id = None;
        members.insert(service.object_name.clone(), service);
    }
    Ok(members)
}
