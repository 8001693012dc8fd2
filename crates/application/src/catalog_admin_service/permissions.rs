use std::str::FromStr;

use modgate_core::NonEmptyString;
use tracing::info;

use crate::catalog_ports::{CreatePermissionInput, NewPermission, PermissionDefinition};

use super::*;

impl CatalogAdminService {
    /// Returns every permission, inactive ones included.
    pub async fn list_permissions(
        &self,
        actor: &CallerIdentity,
    ) -> AppResult<Vec<PermissionDefinition>> {
        self.require_catalog_manage(actor).await?;
        self.repository.list_permissions().await
    }

    /// Creates one of the two canonical permissions and emits an audit event.
    pub async fn create_permission(
        &self,
        actor: &CallerIdentity,
        input: CreatePermissionInput,
    ) -> AppResult<PermissionDefinition> {
        self.require_catalog_manage(actor).await?;

        let name = NonEmptyString::for_field("permission_name", input.permission_name)?;
        let level = PermissionLevel::from_str(name.as_str())?;
        let permission = self
            .repository
            .create_permission(NewPermission {
                level,
                description: normalize_description(input.description),
            })
            .await?;

        info!(
            permission_id = %permission.permission_id,
            permission_name = permission.level.as_str(),
            "catalog permission created"
        );
        self.record_event(
            actor,
            AuditAction::CatalogPermissionCreated,
            CatalogEntryKind::Permission,
            permission.permission_id.to_string(),
            format!("created permission '{}'", permission.level.as_str()),
        )
        .await;

        Ok(permission)
    }
}
