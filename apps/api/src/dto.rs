mod access;
mod catalog;
mod common;

pub use access::{
    AccessCheckRequest, AccessCheckResultResponse, CheckBatchRequest, CheckBatchResponse,
    CheckPermissionResponse, EffectiveGrantsResponse, ModuleGrantResponse, VisibleModuleResponse,
    VisibleModulesResponse,
};
pub use catalog::{
    AssignUserRoleRequest, AuditLogEntryResponse, CreateModuleRequest, CreatePermissionRequest,
    CreateRolePermissionRequest, CreateRoleRequest, ModuleResponse, PermissionResponse,
    RolePermissionResponse, RoleResponse, UpdateCatalogStatusRequest, UserRoleResponse,
};
pub use common::{HealthDependencyStatus, HealthResponse};
