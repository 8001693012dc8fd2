use modgate_domain::{CatalogId, CatalogStatus, PermissionLevel};

/// Role row returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleDefinition {
    /// Stable role identifier.
    pub role_id: CatalogId,
    /// Unique role name.
    pub role_name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: CatalogStatus,
    /// Creation timestamp in RFC3339.
    pub created_at: String,
}

/// Permission row returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionDefinition {
    /// Stable permission identifier.
    pub permission_id: CatalogId,
    /// Access level named by this row.
    pub level: PermissionLevel,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: CatalogStatus,
    /// Creation timestamp in RFC3339.
    pub created_at: String,
}

/// Module row returned to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDefinition {
    /// Stable module identifier.
    pub module_id: CatalogId,
    /// Unique module name.
    pub module_name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Lifecycle status.
    pub status: CatalogStatus,
    /// Declaration order within the catalog.
    pub position: i64,
    /// Creation timestamp in RFC3339.
    pub created_at: String,
}

/// Role to module permission mapping projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissionMapping {
    /// Stable mapping identifier.
    pub mapping_id: CatalogId,
    /// Mapped role identifier.
    pub role_id: CatalogId,
    /// Mapped role name.
    pub role_name: String,
    /// Mapped module identifier.
    pub module_id: CatalogId,
    /// Mapped module name.
    pub module_name: String,
    /// Mapped permission identifier.
    pub permission_id: CatalogId,
    /// Mapped access level.
    pub level: PermissionLevel,
    /// Lifecycle status of the mapping row itself.
    pub status: CatalogStatus,
    /// Creation timestamp in RFC3339.
    pub created_at: String,
}

/// User to role assignment projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRoleAssignment {
    /// Stable assignment identifier.
    pub user_role_id: CatalogId,
    /// External user identifier.
    pub user_id: String,
    /// Assigned role identifier.
    pub role_id: CatalogId,
    /// Assigned role name.
    pub role_name: String,
    /// Lifecycle status of the assignment row.
    pub status: CatalogStatus,
    /// Assignment timestamp in RFC3339.
    pub assigned_at: String,
}

/// Row returned by an idempotent catalog write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogWrite<T> {
    /// Row as stored after the write.
    pub entry: T,
    /// Whether the write inserted or reactivated the row.
    pub changed: bool,
}

impl<T> CatalogWrite<T> {
    /// Wraps a row that was inserted or reactivated.
    pub fn changed(entry: T) -> Self {
        Self {
            entry,
            changed: true,
        }
    }

    /// Wraps a row that was already active and left as is.
    pub fn unchanged(entry: T) -> Self {
        Self {
            entry,
            changed: false,
        }
    }
}
