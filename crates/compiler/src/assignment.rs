//! Decides how a set's members are bound to hosts.
//!
//! The modern dialect delegates dynamic host matching to the target
//! system's own apply-rule engine: members of a filtered set become apply
//! objects carrying the filter verbatim. The legacy dialect has no apply
//! concept, so matching hosts are resolved here, up front.

use setforge_core::types::{DbId, OBJECT_TYPE_APPLY, OBJECT_TYPE_OBJECT};
use setforge_db::error::StoreError;
use setforge_db::models::{Service, ServiceSet};

use crate::error::CompileError;
use crate::matcher::HostMatcher;
use crate::store::ConfigStore;

/// Rendering target of a set's members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderTarget {
    /// Dynamically assigned; carries the set's filter verbatim.
    Apply { filter: String },
    /// Statically bound to a single host.
    Object { host_id: DbId },
}

/// Decide the rendering target for a set. A detached template set (no
/// filter, no host) has no target and renders nothing.
pub fn decide(set: &ServiceSet) -> Option<RenderTarget> {
    if let Some(filter) = &set.assign_filter {
        Some(RenderTarget::Apply {
            filter: filter.clone(),
        })
    } else {
        set.host_id
            .map(|host_id| RenderTarget::Object { host_id })
    }
}

/// Stamp the target onto a detached member copy. The canonical template
/// row is never touched.
pub fn apply_target(service: &mut Service, target: &RenderTarget) {
    match target {
        RenderTarget::Apply { filter } => {
            service.object_type = OBJECT_TYPE_APPLY.to_string();
            service.assign_filter = Some(filter.clone());
        }
        RenderTarget::Object { host_id } => {
            service.object_type = OBJECT_TYPE_OBJECT.to_string();
            service.use_var_overrides = true;
            service.host_id = Some(*host_id);
        }
    }
}

/// The concrete host names a set binds to in the legacy dialect.
///
/// A filtered set evaluates its filter against the full host inventory,
/// once per set; an unfiltered set binds exactly its own host.
pub async fn assigned_hosts(
    store: &dyn ConfigStore,
    matcher: &dyn HostMatcher,
    set: &ServiceSet,
) -> Result<Vec<String>, CompileError> {
    if let Some(filter) = &set.assign_filter {
        let inventory = store.host_inventory().await?;
        matcher.matching_hosts(filter, &inventory)
    } else if let Some(host_id) = set.host_id {
        let host = store
            .host(host_id)
            .await?
            .ok_or(StoreError::HostNotFound(host_id))?;
        Ok(vec![host.object_name])
    } else {
        Ok(Vec::new())
    }
}
