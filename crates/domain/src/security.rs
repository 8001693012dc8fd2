use serde::{Deserialize, Serialize};

/// Stable audit actions emitted by catalog administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Emitted when a role is created.
    CatalogRoleCreated,
    /// Emitted when a permission is created.
    CatalogPermissionCreated,
    /// Emitted when a module is created.
    CatalogModuleCreated,
    /// Emitted when a role is granted a permission on a module.
    CatalogRolePermissionCreated,
    /// Emitted when a role is assigned to a user.
    CatalogUserRoleAssigned,
    /// Emitted when a catalog row is soft-deleted.
    CatalogEntryDeleted,
    /// Emitted when a catalog row status is changed explicitly.
    CatalogEntryStatusChanged,
}

impl AuditAction {
    /// Returns a stable storage value for this action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CatalogRoleCreated => "catalog.role.created",
            Self::CatalogPermissionCreated => "catalog.permission.created",
            Self::CatalogModuleCreated => "catalog.module.created",
            Self::CatalogRolePermissionCreated => "catalog.role_permission.created",
            Self::CatalogUserRoleAssigned => "catalog.user_role.assigned",
            Self::CatalogEntryDeleted => "catalog.entry.deleted",
            Self::CatalogEntryStatusChanged => "catalog.entry.status_changed",
        }
    }
}
