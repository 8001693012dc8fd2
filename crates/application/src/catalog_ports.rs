mod entries;
mod inputs;
mod repository;

pub use entries::{
    CatalogWrite, ModuleDefinition, PermissionDefinition, RoleDefinition,
    RolePermissionMapping, UserRoleAssignment,
};
pub use inputs::{
    AssignUserRoleInput, CreateCatalogEntryInput, CreatePermissionInput,
    CreateRolePermissionInput, NewCatalogEntry, NewPermission, NewRolePermission, NewUserRole,
};
pub use repository::CatalogRepository;
