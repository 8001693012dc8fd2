use modgate_domain::CatalogId;
use tracing::info;

use crate::catalog_ports::{CreateRolePermissionInput, NewRolePermission, RolePermissionMapping};

use super::*;

impl CatalogAdminService {
    /// Returns every role permission mapping.
    pub async fn list_role_permissions(
        &self,
        actor: &CallerIdentity,
    ) -> AppResult<Vec<RolePermissionMapping>> {
        self.require_catalog_manage(actor).await?;
        self.repository.list_role_permissions().await
    }

    /// Grants a role a permission on a module.
    ///
    /// Referenced rows must exist but may be inactive. An existing inactive
    /// mapping for the same triple is reactivated. Re-granting an active
    /// mapping returns it without an audit event.
    pub async fn create_role_permission(
        &self,
        actor: &CallerIdentity,
        input: CreateRolePermissionInput,
    ) -> AppResult<RolePermissionMapping> {
        self.require_catalog_manage(actor).await?;

        let new_mapping = NewRolePermission {
            role_id: CatalogId::parse_required("role_id", input.role_id.as_deref())?,
            module_id: CatalogId::parse_required("module_id", input.module_id.as_deref())?,
            permission_id: CatalogId::parse_required(
                "permission_id",
                input.permission_id.as_deref(),
            )?,
        };
        let write = self.repository.create_role_permission(new_mapping).await?;
        let mapping = write.entry;
        if !write.changed {
            return Ok(mapping);
        }

        info!(
            mapping_id = %mapping.mapping_id,
            role_name = %mapping.role_name,
            module_name = %mapping.module_name,
            permission = mapping.level.as_str(),
            "catalog role permission created"
        );
        self.record_event(
            actor,
            AuditAction::CatalogRolePermissionCreated,
            CatalogEntryKind::RolePermission,
            mapping.mapping_id.to_string(),
            format!(
                "granted '{}' on module '{}' to role '{}'",
                mapping.level.as_str(),
                mapping.module_name,
                mapping.role_name
            ),
        )
        .await;

        Ok(mapping)
    }
}
