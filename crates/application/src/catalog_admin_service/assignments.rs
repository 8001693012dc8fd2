use modgate_core::NonEmptyString;
use modgate_domain::CatalogId;
use tracing::info;

use crate::catalog_ports::{AssignUserRoleInput, NewUserRole, UserRoleAssignment};

use super::*;

impl CatalogAdminService {
    /// Returns user role assignments, optionally for a single user.
    pub async fn list_user_roles(
        &self,
        actor: &CallerIdentity,
        user_id: Option<&str>,
    ) -> AppResult<Vec<UserRoleAssignment>> {
        self.require_catalog_manage(actor).await?;

        let user_id = user_id.map(str::trim).filter(|value| !value.is_empty());
        self.repository.list_user_roles(user_id).await
    }

    /// Assigns a role to a user and emits an audit event.
    ///
    /// Repeating an active assignment returns it without an audit event.
    pub async fn assign_user_role(
        &self,
        actor: &CallerIdentity,
        input: AssignUserRoleInput,
    ) -> AppResult<UserRoleAssignment> {
        self.require_catalog_manage(actor).await?;

        let user_id = NonEmptyString::for_field("user_id", input.user_id.unwrap_or_default())?;
        let role_id = CatalogId::parse_required("role_id", input.role_id.as_deref())?;
        let write = self
            .repository
            .assign_user_role(NewUserRole { user_id, role_id })
            .await?;
        let assignment = write.entry;
        if !write.changed {
            return Ok(assignment);
        }

        info!(
            user_role_id = %assignment.user_role_id,
            user_id = %assignment.user_id,
            role_name = %assignment.role_name,
            "catalog user role assigned"
        );
        self.record_event(
            actor,
            AuditAction::CatalogUserRoleAssigned,
            CatalogEntryKind::UserRole,
            assignment.user_role_id.to_string(),
            format!(
                "assigned role '{}' to '{}'",
                assignment.role_name, assignment.user_id
            ),
        )
        .await;

        Ok(assignment)
    }
}
