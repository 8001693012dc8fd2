use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for role creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/create-role-request.ts"
)]
pub struct CreateRoleRequest {
    #[serde(default)]
    pub role_name: String,
    pub description: Option<String>,
}

/// Incoming payload for permission creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/create-permission-request.ts"
)]
pub struct CreatePermissionRequest {
    #[serde(default)]
    pub permission_name: String,
    pub description: Option<String>,
}

/// Incoming payload for module creation.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/create-module-request.ts"
)]
pub struct CreateModuleRequest {
    #[serde(default)]
    pub module_name: String,
    pub description: Option<String>,
}

/// Incoming payload for mapping a role to a module permission.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/create-role-permission-request.ts"
)]
pub struct CreateRolePermissionRequest {
    pub role_id: Option<String>,
    pub module_id: Option<String>,
    pub permission_id: Option<String>,
}

/// Incoming payload for assigning a role to a user.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/assign-user-role-request.ts"
)]
pub struct AssignUserRoleRequest {
    pub user_id: Option<String>,
    pub role_id: Option<String>,
}

/// Incoming payload for activating or deactivating a catalog entry.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/update-catalog-status-request.ts"
)]
pub struct UpdateCatalogStatusRequest {
    /// `ACTIVE` or `INACTIVE`.
    pub status: String,
}

/// API representation of a role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub role_id: String,
    pub role_name: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// API representation of a permission.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/permission-response.ts"
)]
pub struct PermissionResponse {
    pub permission_id: String,
    pub permission_name: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// API representation of a module.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/module-response.ts"
)]
pub struct ModuleResponse {
    pub module_id: String,
    pub module_name: String,
    pub description: Option<String>,
    pub status: String,
    pub position: i64,
    pub created_at: String,
}

/// API representation of a role permission mapping.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/role-permission-response.ts"
)]
pub struct RolePermissionResponse {
    pub mapping_id: String,
    pub role_id: String,
    pub role_name: String,
    pub module_id: String,
    pub module_name: String,
    pub permission_id: String,
    pub permission_name: String,
    pub status: String,
    pub created_at: String,
}

/// API representation of a user role assignment.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/user-role-response.ts"
)]
pub struct UserRoleResponse {
    pub user_role_id: String,
    pub user_id: String,
    pub role_id: String,
    pub role_name: String,
    pub status: String,
    pub assigned_at: String,
}

/// API representation of one audit log entry.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../../packages/api-types/src/generated/audit-log-entry-response.ts"
)]
pub struct AuditLogEntryResponse {
    pub event_id: String,
    pub subject: String,
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub detail: Option<String>,
    pub created_at: String,
}
