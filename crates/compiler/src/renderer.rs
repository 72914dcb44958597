//! Renders service sets into configuration output.

use setforge_core::emit::{self, Dialect, LEGACY_FILE_EXTENSION};
use setforge_core::types::{DbId, OBJECT_TYPE_OBJECT};
use setforge_core::vars;
use setforge_core::zones::partition_by_zone;
use setforge_db::error::StoreError;
use setforge_db::models::ServiceSet;

use crate::assignment::{self, RenderTarget};
use crate::error::CompileError;
use crate::matcher::HostMatcher;
use crate::output::ConfigOutput;
use crate::resolver;
use crate::store::ConfigStore;

/// Orchestrates the per-set pipeline: resolve members, decide assignment,
/// overlay variables, emit into the output container.
pub struct ConfigRenderer<'a> {
    store: &'a dyn ConfigStore,
    matcher: &'a dyn HostMatcher,
}

impl<'a> ConfigRenderer<'a> {
    pub fn new(store: &'a dyn ConfigStore, matcher: &'a dyn HostMatcher) -> Self {
        Self { store, matcher }
    }

    /// Render one set into `config`. A template without an assign filter
    /// has nothing concrete to instantiate and renders nothing. Legacy
    /// outputs are delegated to [`Self::render_to_legacy_config`].
    pub async fn render_to_config(
        &self,
        set: &ServiceSet,
        config: &mut ConfigOutput,
    ) -> Result<(), CompileError> {
        if set.assign_filter.is_none() && set.is_template() {
            return Ok(());
        }
        if config.dialect() == Dialect::Legacy {
            return self.render_to_legacy_config(set, config).await;
        }

        let members = resolver::resolve_members(self.store, set).await?;
        if members.is_empty() {
            return Ok(());
        }

        let zone = self.rendering_zone(set).await?;
        let target = assignment::decide(set);

        // Static members bind one host; resolve its name once per set.
        let host_name = match &target {
            Some(RenderTarget::Object { host_id }) => Some(
                self.store
                    .host(*host_id)
                    .await?
                    .ok_or(StoreError::HostNotFound(*host_id))?
                    .object_name,
            ),
            _ => None,
        };

        let set_vars = set.vars();
        let header = emit::header_comment(
            Dialect::Modern,
            set.assign_filter.is_some(),
            &set.object_name,
        );
        let file = config.config_file(&emit::modern_config_path(&zone), None);
        file.add_content(&header);

        for (_, mut service) in members {
            // A detached template set reaches neither branch; skip the
            // member without aborting the rest.
            let Some(target) = &target else {
                continue;
            };
            assignment::apply_target(&mut service, target);
            service.set_vars(&vars::overlay(&set_vars, &service.vars()));
            file.add_object(&service, host_name.as_deref());
        }

        Ok(())
    }

    /// Render one set into flat per-zone legacy files. Assignment is
    /// evaluated once per set; matched hosts are partitioned by zone and
    /// every member is emitted per zone, statically bound to that zone's
    /// comma-joined host list.
    pub async fn render_to_legacy_config(
        &self,
        set: &ServiceSet,
        config: &mut ConfigOutput,
    ) -> Result<(), CompileError> {
        if set.assign_filter.is_none() && set.is_template() {
            return Ok(());
        }

        let host_names = assignment::assigned_hosts(self.store, self.matcher, set).await?;
        let mut zoned = Vec::with_capacity(host_names.len());
        for name in host_names {
            zoned.push((self.zone_of_host_name(&name).await?, name));
        }

        let members = resolver::resolve_members(self.store, set).await?;
        let set_vars = set.vars();
        let header = emit::header_comment(
            Dialect::Legacy,
            set.assign_filter.is_some(),
            &set.object_name,
        );

        for (zone, names) in partition_by_zone(zoned) {
            let file = config.config_file(
                &emit::legacy_config_path(&zone),
                Some(LEGACY_FILE_EXTENSION),
            );
            file.add_content(&header);

            for member in members.values() {
                let mut service = member.clone();
                service.object_type = OBJECT_TYPE_OBJECT.to_string();
                service.set_vars(&vars::overlay(&set_vars, &service.vars()));
                file.add_legacy_object(&service, &names);
            }
        }

        Ok(())
    }

    /// Compile a standalone preview of one set.
    ///
    /// After the primary render, every host-bound set importing this one is
    /// rendered into the same output, so a template preview also shows its
    /// concrete usages. A failure in that supplemental step is downgraded
    /// to a `failed-to-render` artifact; the primary result still returns.
    pub async fn render_single(
        &self,
        set: &ServiceSet,
        dialect: Dialect,
    ) -> Result<ConfigOutput, CompileError> {
        let mut config = ConfigOutput::new(dialect);
        self.render_to_config(set, &mut config).await?;

        if let Some(id) = set.id {
            if let Err(e) = self.render_dependents(id, &mut config).await {
                tracing::warn!(
                    error = %e,
                    set = %set.object_name,
                    "failed to render dependent service sets"
                );
                config.config_file("failed-to-render", None).prepend(&format!(
                    "/** Failed to render this object **/\n/*  {e} */"
                ));
            }
        }

        Ok(config)
    }

    async fn render_dependents(
        &self,
        parent_id: DbId,
        config: &mut ConfigOutput,
    ) -> Result<(), CompileError> {
        for dependent in self.store.dependent_sets(parent_id).await? {
            self.render_to_config(&dependent, config).await?;
        }
        Ok(())
    }

    /// The zone a set renders into: its host's rendering zone, or the
    /// default global zone for host-less sets.
    async fn rendering_zone(&self, set: &ServiceSet) -> Result<String, CompileError> {
        match set.host_id {
            Some(host_id) => Ok(self.store.rendering_zone(host_id).await?),
            None => Ok(self.store.default_global_zone()),
        }
    }

    async fn zone_of_host_name(&self, name: &str) -> Result<String, CompileError> {
        match self.store.host_by_name(name).await? {
            Some(host) => Ok(self.store.rendering_zone(host.id).await?),
            None => Ok(self.store.default_global_zone()),
        }
    }
}
