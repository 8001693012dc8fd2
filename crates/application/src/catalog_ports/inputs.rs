use modgate_core::NonEmptyString;
use modgate_domain::{CatalogId, PermissionLevel};

/// Unvalidated payload for creating a role or module.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateCatalogEntryInput {
    /// Requested unique name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Unvalidated payload for creating a permission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreatePermissionInput {
    /// Requested permission name, `READ` or `READ_WRITE`.
    pub permission_name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Unvalidated payload for mapping a role to a module permission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CreateRolePermissionInput {
    /// Role identifier.
    pub role_id: Option<String>,
    /// Module identifier.
    pub module_id: Option<String>,
    /// Permission identifier.
    pub permission_id: Option<String>,
}

/// Unvalidated payload for assigning a role to a user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssignUserRoleInput {
    /// External user identifier.
    pub user_id: Option<String>,
    /// Role identifier.
    pub role_id: Option<String>,
}

/// Validated role or module row handed to repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCatalogEntry {
    /// Unique name.
    pub name: NonEmptyString,
    /// Optional trimmed description.
    pub description: Option<String>,
}

/// Validated permission row handed to repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPermission {
    /// Access level named by the row.
    pub level: PermissionLevel,
    /// Optional trimmed description.
    pub description: Option<String>,
}

/// Validated mapping handed to repositories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewRolePermission {
    /// Role identifier.
    pub role_id: CatalogId,
    /// Module identifier.
    pub module_id: CatalogId,
    /// Permission identifier.
    pub permission_id: CatalogId,
}

/// Validated assignment handed to repositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUserRole {
    /// External user identifier.
    pub user_id: NonEmptyString,
    /// Role identifier.
    pub role_id: CatalogId,
}
