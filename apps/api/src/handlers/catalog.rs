use std::str::FromStr;

use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use modgate_core::CallerIdentity;
use modgate_domain::{CatalogEntryKind, CatalogStatus};
use serde::Deserialize;

use crate::dto::{
    AssignUserRoleRequest, AuditLogEntryResponse, CreateModuleRequest, CreatePermissionRequest,
    CreateRolePermissionRequest, CreateRoleRequest, ModuleResponse, PermissionResponse,
    RolePermissionResponse, RoleResponse, UpdateCatalogStatusRequest, UserRoleResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod assignments;
mod audit;
mod mappings;
mod modules;
mod permissions;
mod roles;

pub use assignments::{assign_user_role_handler, delete_user_role_handler, list_user_roles_handler};
pub use audit::list_audit_log_handler;
pub use mappings::{
    create_role_permission_handler, delete_role_permission_handler,
    list_role_permissions_handler,
};
pub use modules::{
    create_module_handler, delete_module_handler, list_mappable_modules_handler,
    list_modules_handler, update_module_status_handler,
};
pub use permissions::{
    create_permission_handler, delete_permission_handler, list_permissions_handler,
    update_permission_status_handler,
};
pub use roles::{
    create_role_handler, delete_role_handler, list_roles_handler, update_role_status_handler,
};

/// Explicit confirmation flag required by every delete.
#[derive(Debug, Default, Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

async fn update_status(
    state: &AppState,
    caller: &CallerIdentity,
    kind: CatalogEntryKind,
    id: &str,
    payload: UpdateCatalogStatusRequest,
) -> ApiResult<StatusCode> {
    let status = CatalogStatus::from_str(payload.status.trim())?;
    state
        .catalog_admin_service
        .set_status(caller, kind, id, status)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
