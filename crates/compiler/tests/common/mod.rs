//! In-memory `ConfigStore` fake and model builders shared by the
//! integration tests.

use std::sync::Mutex;

use async_trait::async_trait;

use setforge_core::key::ObjectKey;
use setforge_core::types::{DbId, OBJECT_TYPE_TEMPLATE};
use setforge_db::error::StoreError;
use setforge_db::models::{CreateServiceSet, Host, Service, ServiceSet, Zone};
use setforge_compiler::store::{ConfigStore, DEFAULT_GLOBAL_ZONE};

/// In-memory store with mutation recording for cascade assertions.
#[derive(Default)]
pub struct InMemoryStore {
    pub sets: Vec<ServiceSet>,
    pub services: Vec<Service>,
    /// (child set id, parent set id), in import order.
    pub imports: Vec<(DbId, DbId)>,
    pub hosts: Vec<Host>,
    pub zones: Vec<Zone>,
    pub blacklist: Mutex<Vec<(DbId, DbId)>>,
    pub deleted_sets: Mutex<Vec<DbId>>,
    pub inserted: Mutex<Vec<ServiceSet>>,
}

impl InMemoryStore {
    pub fn blacklist_rows(&self) -> Vec<(DbId, DbId)> {
        self.blacklist.lock().unwrap().clone()
    }

    pub fn deleted_set_ids(&self) -> Vec<DbId> {
        self.deleted_sets.lock().unwrap().clone()
    }
}

#[async_trait]
impl ConfigStore for InMemoryStore {
    async fn find_set(&self, key: &ObjectKey) -> Result<Option<ServiceSet>, StoreError> {
        let found = match key {
            ObjectKey::Id(id) => self.sets.iter().find(|s| s.id == Some(*id)),
            ObjectKey::TemplateName(name) => self
                .sets
                .iter()
                .find(|s| s.is_template() && s.object_name == *name),
            ObjectKey::HostServiceSet { host, name } => {
                let host_id = self
                    .hosts
                    .iter()
                    .find(|h| h.object_name == *host)
                    .map(|h| h.id);
                self.sets
                    .iter()
                    .find(|s| s.host_id == host_id && host_id.is_some() && s.object_name == *name)
            }
        };
        Ok(found.cloned())
    }

    async fn imports_of(&self, set_id: DbId) -> Result<Vec<ServiceSet>, StoreError> {
        Ok(self
            .imports
            .iter()
            .filter(|(child, _)| *child == set_id)
            .filter_map(|(_, parent)| self.sets.iter().find(|s| s.id == Some(*parent)))
            .cloned()
            .collect())
    }

    async fn services_for_set(&self, set_id: DbId) -> Result<Vec<Service>, StoreError> {
        Ok(self
            .services
            .iter()
            .filter(|s| s.service_set_id == Some(set_id))
            .cloned()
            .collect())
    }

    async fn dependent_sets(&self, parent_id: DbId) -> Result<Vec<ServiceSet>, StoreError> {
        Ok(self
            .imports
            .iter()
            .filter(|(_, parent)| *parent == parent_id)
            .filter_map(|(child, _)| self.sets.iter().find(|s| s.id == Some(*child)))
            .cloned()
            .collect())
    }

    async fn host(&self, host_id: DbId) -> Result<Option<Host>, StoreError> {
        Ok(self.hosts.iter().find(|h| h.id == host_id).cloned())
    }

    async fn host_by_name(&self, name: &str) -> Result<Option<Host>, StoreError> {
        Ok(self.hosts.iter().find(|h| h.object_name == name).cloned())
    }

    async fn host_inventory(&self) -> Result<Vec<Host>, StoreError> {
        Ok(self.hosts.clone())
    }

    async fn rendering_zone(&self, host_id: DbId) -> Result<String, StoreError> {
        let host = self
            .hosts
            .iter()
            .find(|h| h.id == host_id)
            .ok_or(StoreError::HostNotFound(host_id))?;
        Ok(match host.zone_id {
            Some(zone_id) => self
                .zones
                .iter()
                .find(|z| z.id == zone_id)
                .ok_or(StoreError::ZoneNotFound(zone_id))?
                .object_name
                .clone(),
            None => self.default_global_zone(),
        })
    }

    fn default_global_zone(&self) -> String {
        DEFAULT_GLOBAL_ZONE.to_string()
    }

    async fn template_exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self
            .sets
            .iter()
            .any(|s| s.is_template() && s.object_name == name))
    }

    async fn insert_set(&self, input: &CreateServiceSet) -> Result<ServiceSet, StoreError> {
        let mut inserted = self.inserted.lock().unwrap();
        let mut row = input.as_unsaved();
        row.id = Some(1000 + inserted.len() as DbId);
        inserted.push(row.clone());
        Ok(row)
    }

    async fn delete_blacklist(
        &self,
        host_id: DbId,
        service_ids: &[DbId],
    ) -> Result<u64, StoreError> {
        let mut rows = self.blacklist.lock().unwrap();
        let before = rows.len();
        rows.retain(|(h, s)| *h != host_id || !service_ids.contains(s));
        Ok((before - rows.len()) as u64)
    }

    async fn delete_set(&self, set_id: DbId) -> Result<bool, StoreError> {
        self.deleted_sets.lock().unwrap().push(set_id);
        Ok(true)
    }
}

pub fn set(
    id: Option<DbId>,
    name: &str,
    object_type: &str,
    host_id: Option<DbId>,
    assign_filter: Option<&str>,
    vars: serde_json::Value,
) -> ServiceSet {
    ServiceSet {
        id,
        host_id,
        object_name: name.to_string(),
        object_type: object_type.to_string(),
        description: None,
        assign_filter: assign_filter.map(str::to_string),
        vars,
    }
}

pub fn service(id: DbId, set_id: DbId, name: &str, vars: serde_json::Value) -> Service {
    Service {
        id: Some(id),
        service_set_id: Some(set_id),
        host_id: None,
        object_name: name.to_string(),
        object_type: OBJECT_TYPE_TEMPLATE.to_string(),
        assign_filter: None,
        use_var_overrides: false,
        vars,
    }
}

pub fn host(id: DbId, name: &str, zone_id: Option<DbId>, vars: serde_json::Value) -> Host {
    Host {
        id,
        object_name: name.to_string(),
        zone_id,
        vars,
    }
}

pub fn zone(id: DbId, name: &str) -> Zone {
    Zone {
        id,
        object_name: name.to_string(),
        parent_zone_id: None,
    }
}
