use modgate_domain::{CatalogId, CatalogStatus};
use tracing::info;

use super::*;

impl CatalogAdminService {
    /// Soft-deletes a role.
    pub async fn delete_role(
        &self,
        actor: &CallerIdentity,
        role_id: &str,
        confirmed: bool,
    ) -> AppResult<()> {
        self.delete_entry(actor, CatalogEntryKind::Role, "role_id", role_id, confirmed)
            .await
    }

    /// Soft-deletes a permission.
    pub async fn delete_permission(
        &self,
        actor: &CallerIdentity,
        permission_id: &str,
        confirmed: bool,
    ) -> AppResult<()> {
        self.delete_entry(
            actor,
            CatalogEntryKind::Permission,
            "permission_id",
            permission_id,
            confirmed,
        )
        .await
    }

    /// Soft-deletes a module.
    pub async fn delete_module(
        &self,
        actor: &CallerIdentity,
        module_id: &str,
        confirmed: bool,
    ) -> AppResult<()> {
        self.delete_entry(
            actor,
            CatalogEntryKind::Module,
            "module_id",
            module_id,
            confirmed,
        )
        .await
    }

    /// Soft-deletes a role permission mapping.
    pub async fn delete_role_permission(
        &self,
        actor: &CallerIdentity,
        mapping_id: &str,
        confirmed: bool,
    ) -> AppResult<()> {
        self.delete_entry(
            actor,
            CatalogEntryKind::RolePermission,
            "mapping_id",
            mapping_id,
            confirmed,
        )
        .await
    }

    /// Soft-deletes a user role assignment.
    pub async fn delete_user_role(
        &self,
        actor: &CallerIdentity,
        user_role_id: &str,
        confirmed: bool,
    ) -> AppResult<()> {
        self.delete_entry(
            actor,
            CatalogEntryKind::UserRole,
            "user_role_id",
            user_role_id,
            confirmed,
        )
        .await
    }

    /// Activates or deactivates a role, permission or module.
    ///
    /// Mappings and assignments are reactivated by creating them again.
    pub async fn set_status(
        &self,
        actor: &CallerIdentity,
        kind: CatalogEntryKind,
        id: &str,
        status: CatalogStatus,
    ) -> AppResult<()> {
        self.require_catalog_manage(actor).await?;

        if matches!(
            kind,
            CatalogEntryKind::RolePermission | CatalogEntryKind::UserRole
        ) {
            return Err(AppError::Validation(format!(
                "status of a {} cannot be set directly",
                kind.as_str()
            )));
        }

        let id = CatalogId::parse_required("id", Some(id))?;
        self.repository.set_status(kind, id, status).await?;

        info!(kind = kind.as_str(), %id, status = status.as_str(), "catalog entry status changed");
        self.record_event(
            actor,
            AuditAction::CatalogEntryStatusChanged,
            kind,
            id.to_string(),
            format!("set {} status to {}", kind.as_str(), status.as_str()),
        )
        .await;

        Ok(())
    }

    async fn delete_entry(
        &self,
        actor: &CallerIdentity,
        kind: CatalogEntryKind,
        field: &str,
        id: &str,
        confirmed: bool,
    ) -> AppResult<()> {
        self.require_catalog_manage(actor).await?;
        require_confirmation(confirmed, kind)?;

        let id = CatalogId::parse_required(field, Some(id))?;
        self.repository
            .set_status(kind, id, CatalogStatus::Inactive)
            .await?;

        info!(kind = kind.as_str(), %id, "catalog entry deleted");
        self.record_event(
            actor,
            AuditAction::CatalogEntryDeleted,
            kind,
            id.to_string(),
            format!("deleted {} '{id}'", kind.as_str()),
        )
        .await;

        Ok(())
    }
}
