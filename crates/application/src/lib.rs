//! Application services and ports.

#![forbid(unsafe_code)]

mod audit_ports;
mod authorization_ports;
mod authorization_service;
mod catalog_admin_service;
mod catalog_ports;

pub use audit_ports::{
    AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository,
};
pub use authorization_ports::{AccessCheck, AuthorizationRepository, GrantCache};
pub use authorization_service::AuthorizationService;
pub use catalog_admin_service::CatalogAdminService;
pub use catalog_ports::{
    AssignUserRoleInput, CatalogRepository, CatalogWrite, CreateCatalogEntryInput,
    CreatePermissionInput, CreateRolePermissionInput, ModuleDefinition, NewCatalogEntry,
    NewPermission, NewRolePermission, NewUserRole, PermissionDefinition, RoleDefinition,
    RolePermissionMapping, UserRoleAssignment,
};
