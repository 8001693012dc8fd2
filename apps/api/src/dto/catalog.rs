mod conversions;
mod types;

pub use types::{
    AssignUserRoleRequest, AuditLogEntryResponse, CreateModuleRequest, CreatePermissionRequest,
    CreateRolePermissionRequest, CreateRoleRequest, ModuleResponse, PermissionResponse,
    RolePermissionResponse, RoleResponse, UpdateCatalogStatusRequest, UserRoleResponse,
};
