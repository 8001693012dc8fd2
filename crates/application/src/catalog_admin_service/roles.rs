use modgate_core::NonEmptyString;
use tracing::info;

use crate::catalog_ports::{CreateCatalogEntryInput, NewCatalogEntry, RoleDefinition};

use super::*;

impl CatalogAdminService {
    /// Returns every role, inactive ones included.
    pub async fn list_roles(&self, actor: &CallerIdentity) -> AppResult<Vec<RoleDefinition>> {
        self.require_catalog_manage(actor).await?;
        self.repository.list_roles().await
    }

    /// Creates a role and emits an audit event.
    pub async fn create_role(
        &self,
        actor: &CallerIdentity,
        input: CreateCatalogEntryInput,
    ) -> AppResult<RoleDefinition> {
        self.require_catalog_manage(actor).await?;

        let name = NonEmptyString::for_field("role_name", input.name)?;
        let role = self
            .repository
            .create_role(NewCatalogEntry {
                name,
                description: normalize_description(input.description),
            })
            .await?;

        info!(role_id = %role.role_id, role_name = %role.role_name, "catalog role created");
        self.record_event(
            actor,
            AuditAction::CatalogRoleCreated,
            CatalogEntryKind::Role,
            role.role_id.to_string(),
            format!("created role '{}'", role.role_name),
        )
        .await;

        Ok(role)
    }
}
