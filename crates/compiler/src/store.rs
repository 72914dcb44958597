//! The store seam between the compiler and the relational backend.
//!
//! [`ConfigStore`] is the exact query surface the compiler consumes; the
//! production implementation is [`PgStore`] over the setforge-db
//! repositories, and tests drive the compiler through in-memory fakes.

use async_trait::async_trait;

use setforge_core::key::ObjectKey;
use setforge_core::types::DbId;
use setforge_db::error::StoreError;
use setforge_db::models::{CreateServiceSet, Host, Service, ServiceSet};
use setforge_db::repositories::{BlacklistRepo, HostRepo, ServiceRepo, ServiceSetRepo, ZoneRepo};
use setforge_db::DbPool;

/// The default zone a host-less set renders into.
pub const DEFAULT_GLOBAL_ZONE: &str = "director-global";

/// Point queries and mutations the compiler needs from the backing store.
#[async_trait]
pub trait ConfigStore: Send + Sync {
    /// Look a set up by parsed identity key.
    async fn find_set(&self, key: &ObjectKey) -> Result<Option<ServiceSet>, StoreError>;

    /// The templates a set imports, in import order.
    async fn imports_of(&self, set_id: DbId) -> Result<Vec<ServiceSet>, StoreError>;

    /// All service rows owned by a set, in insertion order.
    async fn services_for_set(&self, set_id: DbId) -> Result<Vec<Service>, StoreError>;

    /// Host-bound sets importing the given template.
    async fn dependent_sets(&self, parent_id: DbId) -> Result<Vec<ServiceSet>, StoreError>;

    async fn host(&self, host_id: DbId) -> Result<Option<Host>, StoreError>;

    async fn host_by_name(&self, name: &str) -> Result<Option<Host>, StoreError>;

    /// The full host inventory assign filters are evaluated against.
    async fn host_inventory(&self) -> Result<Vec<Host>, StoreError>;

    /// The zone a host renders into; hosts without a zone fall back to the
    /// default global zone.
    async fn rendering_zone(&self, host_id: DbId) -> Result<String, StoreError>;

    /// The process-wide default global zone name.
    fn default_global_zone(&self) -> String;

    async fn template_exists(&self, name: &str) -> Result<bool, StoreError>;

    async fn insert_set(&self, input: &CreateServiceSet) -> Result<ServiceSet, StoreError>;

    /// Prune blacklist rows for `host_id` and the given services. Returns
    /// the number of rows removed.
    async fn delete_blacklist(&self, host_id: DbId, service_ids: &[DbId])
        -> Result<u64, StoreError>;

    async fn delete_set(&self, set_id: DbId) -> Result<bool, StoreError>;
}

/// Production [`ConfigStore`] over a Postgres pool.
pub struct PgStore {
    pool: DbPool,
    default_zone: String,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            default_zone: DEFAULT_GLOBAL_ZONE.to_string(),
        }
    }

    /// Override the default global zone name.
    pub fn with_default_zone(pool: DbPool, default_zone: impl Into<String>) -> Self {
        Self {
            pool,
            default_zone: default_zone.into(),
        }
    }
}

#[async_trait]
impl ConfigStore for PgStore {
    async fn find_set(&self, key: &ObjectKey) -> Result<Option<ServiceSet>, StoreError> {
        let found = match key {
            ObjectKey::Id(id) => ServiceSetRepo::find_by_id(&self.pool, *id).await?,
            ObjectKey::TemplateName(name) => {
                ServiceSetRepo::find_template_by_name(&self.pool, name).await?
            }
            ObjectKey::HostServiceSet { host, name } => {
                ServiceSetRepo::find_on_host(&self.pool, host, name).await?
            }
        };
        Ok(found)
    }

    async fn imports_of(&self, set_id: DbId) -> Result<Vec<ServiceSet>, StoreError> {
        Ok(ServiceSetRepo::imports_of(&self.pool, set_id).await?)
    }

    async fn services_for_set(&self, set_id: DbId) -> Result<Vec<Service>, StoreError> {
        Ok(ServiceRepo::list_for_set(&self.pool, set_id).await?)
    }

    async fn dependent_sets(&self, parent_id: DbId) -> Result<Vec<ServiceSet>, StoreError> {
        Ok(ServiceSetRepo::dependent_sets(&self.pool, parent_id).await?)
    }

    async fn host(&self, host_id: DbId) -> Result<Option<Host>, StoreError> {
        Ok(HostRepo::find_by_id(&self.pool, host_id).await?)
    }

    async fn host_by_name(&self, name: &str) -> Result<Option<Host>, StoreError> {
        Ok(HostRepo::find_by_name(&self.pool, name).await?)
    }

    async fn host_inventory(&self) -> Result<Vec<Host>, StoreError> {
        Ok(HostRepo::list_all(&self.pool).await?)
    }

    async fn rendering_zone(&self, host_id: DbId) -> Result<String, StoreError> {
        let host = HostRepo::find_by_id(&self.pool, host_id)
            .await?
            .ok_or(StoreError::HostNotFound(host_id))?;

        match host.zone_id {
            None => Ok(self.default_global_zone()),
            Some(zone_id) => {
                let zone = ZoneRepo::find_by_id(&self.pool, zone_id)
                    .await?
                    .ok_or(StoreError::ZoneNotFound(zone_id))?;
                ZoneRepo::assert_chain_terminates(&self.pool, &zone).await?;
                Ok(zone.object_name)
            }
        }
    }

    fn default_global_zone(&self) -> String {
        self.default_zone.clone()
    }

    async fn template_exists(&self, name: &str) -> Result<bool, StoreError> {
        Ok(ServiceSetRepo::template_exists(&self.pool, name).await?)
    }

    async fn insert_set(&self, input: &CreateServiceSet) -> Result<ServiceSet, StoreError> {
        Ok(ServiceSetRepo::create(&self.pool, input).await?)
    }

    async fn delete_blacklist(
        &self,
        host_id: DbId,
        service_ids: &[DbId],
    ) -> Result<u64, StoreError> {
        Ok(BlacklistRepo::delete_for_host_services(&self.pool, host_id, service_ids).await?)
    }

    async fn delete_set(&self, set_id: DbId) -> Result<bool, StoreError> {
        Ok(ServiceSetRepo::delete_row(&self.pool, set_id).await?)
    }
}
