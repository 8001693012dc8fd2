use modgate_application::{
    AuditLogEntry, ModuleDefinition, PermissionDefinition, RoleDefinition, RolePermissionMapping,
    UserRoleAssignment,
};

use super::types::{
    AuditLogEntryResponse, ModuleResponse, PermissionResponse, RolePermissionResponse,
    RoleResponse, UserRoleResponse,
};

impl From<RoleDefinition> for RoleResponse {
    fn from(value: RoleDefinition) -> Self {
        Self {
            role_id: value.role_id.to_string(),
            role_name: value.role_name,
            description: value.description,
            status: value.status.as_str().to_owned(),
            created_at: value.created_at,
        }
    }
}

impl From<PermissionDefinition> for PermissionResponse {
    fn from(value: PermissionDefinition) -> Self {
        Self {
            permission_id: value.permission_id.to_string(),
            permission_name: value.level.as_str().to_owned(),
            description: value.description,
            status: value.status.as_str().to_owned(),
            created_at: value.created_at,
        }
    }
}

impl From<ModuleDefinition> for ModuleResponse {
    fn from(value: ModuleDefinition) -> Self {
        Self {
            module_id: value.module_id.to_string(),
            module_name: value.module_name,
            description: value.description,
            status: value.status.as_str().to_owned(),
            position: value.position,
            created_at: value.created_at,
        }
    }
}

impl From<RolePermissionMapping> for RolePermissionResponse {
    fn from(value: RolePermissionMapping) -> Self {
        Self {
            mapping_id: value.mapping_id.to_string(),
            role_id: value.role_id.to_string(),
            role_name: value.role_name,
            module_id: value.module_id.to_string(),
            module_name: value.module_name,
            permission_id: value.permission_id.to_string(),
            permission_name: value.level.as_str().to_owned(),
            status: value.status.as_str().to_owned(),
            created_at: value.created_at,
        }
    }
}

impl From<UserRoleAssignment> for UserRoleResponse {
    fn from(value: UserRoleAssignment) -> Self {
        Self {
            user_role_id: value.user_role_id.to_string(),
            user_id: value.user_id,
            role_id: value.role_id.to_string(),
            role_name: value.role_name,
            status: value.status.as_str().to_owned(),
            assigned_at: value.assigned_at,
        }
    }
}

impl From<AuditLogEntry> for AuditLogEntryResponse {
    fn from(value: AuditLogEntry) -> Self {
        Self {
            event_id: value.event_id,
            subject: value.subject,
            action: value.action,
            resource_type: value.resource_type,
            resource_id: value.resource_id,
            detail: value.detail,
            created_at: value.created_at,
        }
    }
}
