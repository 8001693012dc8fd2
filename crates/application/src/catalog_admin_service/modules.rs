use modgate_core::NonEmptyString;
use modgate_domain::ALL_MODULES_SENTINEL;
use tracing::info;

use crate::catalog_ports::{CreateCatalogEntryInput, ModuleDefinition, NewCatalogEntry};

use super::*;

impl CatalogAdminService {
    /// Returns every module in declaration order, inactive ones included.
    pub async fn list_modules(&self, actor: &CallerIdentity) -> AppResult<Vec<ModuleDefinition>> {
        self.require_catalog_manage(actor).await?;
        self.repository.list_modules().await
    }

    /// Returns the modules offered when mapping a role, without the
    /// all-modules sentinel.
    pub async fn list_mappable_modules(
        &self,
        actor: &CallerIdentity,
    ) -> AppResult<Vec<ModuleDefinition>> {
        self.require_catalog_manage(actor).await?;

        let modules = self.repository.list_modules().await?;
        Ok(modules
            .into_iter()
            .filter(|module| module.module_name != ALL_MODULES_SENTINEL)
            .collect())
    }

    /// Creates a module at the end of the declaration order and emits an
    /// audit event.
    pub async fn create_module(
        &self,
        actor: &CallerIdentity,
        input: CreateCatalogEntryInput,
    ) -> AppResult<ModuleDefinition> {
        self.require_catalog_manage(actor).await?;

        let name = NonEmptyString::for_field("module_name", input.name)?;
        if name.as_str() == ALL_MODULES_SENTINEL {
            warn!(
                subject = actor.user_id(),
                "creating the all-modules sentinel; mapping it grants every module"
            );
        }

        let module = self
            .repository
            .create_module(NewCatalogEntry {
                name,
                description: normalize_description(input.description),
            })
            .await?;

        info!(
            module_id = %module.module_id,
            module_name = %module.module_name,
            position = module.position,
            "catalog module created"
        );
        self.record_event(
            actor,
            AuditAction::CatalogModuleCreated,
            CatalogEntryKind::Module,
            module.module_id.to_string(),
            format!("created module '{}'", module.module_name),
        )
        .await;

        Ok(module)
    }
}
