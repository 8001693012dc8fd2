use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use modgate_application::{
    CatalogRepository, CatalogWrite, ModuleDefinition, NewCatalogEntry, NewPermission,
    NewRolePermission, NewUserRole, PermissionDefinition, RoleDefinition, RolePermissionMapping,
    UserRoleAssignment,
};
use modgate_core::{AppError, AppResult};
use modgate_domain::{CatalogEntryKind, CatalogId, CatalogStatus, PermissionLevel};

use crate::postgres_errors::{map_store_error, map_unique_violation};

mod assignments;
mod definitions;
mod lifecycle;
mod mappings;

#[cfg(test)]
mod tests;

/// PostgreSQL-backed repository for catalog administration.
#[derive(Clone)]
pub struct PostgresCatalogRepository {
    pool: PgPool,
}

impl PostgresCatalogRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct RoleRow {
    role_id: uuid::Uuid,
    role_name: String,
    description: Option<String>,
    status: String,
    created_at: String,
}

impl RoleRow {
    fn into_definition(self) -> AppResult<RoleDefinition> {
        Ok(RoleDefinition {
            role_id: CatalogId::from_uuid(self.role_id),
            status: decode_status(self.status.as_str())?,
            role_name: self.role_name,
            description: self.description,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct PermissionRow {
    permission_id: uuid::Uuid,
    permission_name: String,
    description: Option<String>,
    status: String,
    created_at: String,
}

impl PermissionRow {
    fn into_definition(self) -> AppResult<PermissionDefinition> {
        Ok(PermissionDefinition {
            permission_id: CatalogId::from_uuid(self.permission_id),
            level: decode_level(self.permission_name.as_str())?,
            description: self.description,
            status: decode_status(self.status.as_str())?,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct ModuleRow {
    module_id: uuid::Uuid,
    module_name: String,
    description: Option<String>,
    status: String,
    position: i64,
    created_at: String,
}

impl ModuleRow {
    pub(crate) fn into_definition(self) -> AppResult<ModuleDefinition> {
        Ok(ModuleDefinition {
            module_id: CatalogId::from_uuid(self.module_id),
            status: decode_status(self.status.as_str())?,
            module_name: self.module_name,
            description: self.description,
            position: self.position,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct MappingRow {
    mapping_id: uuid::Uuid,
    role_id: uuid::Uuid,
    role_name: String,
    module_id: uuid::Uuid,
    module_name: String,
    permission_id: uuid::Uuid,
    permission_name: String,
    status: String,
    created_at: String,
}

impl MappingRow {
    fn into_mapping(self) -> AppResult<RolePermissionMapping> {
        Ok(RolePermissionMapping {
            mapping_id: CatalogId::from_uuid(self.mapping_id),
            role_id: CatalogId::from_uuid(self.role_id),
            role_name: self.role_name,
            module_id: CatalogId::from_uuid(self.module_id),
            module_name: self.module_name,
            permission_id: CatalogId::from_uuid(self.permission_id),
            level: decode_level(self.permission_name.as_str())?,
            status: decode_status(self.status.as_str())?,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct UserRoleRow {
    user_role_id: uuid::Uuid,
    user_id: String,
    role_id: uuid::Uuid,
    role_name: String,
    status: String,
    assigned_at: String,
}

impl UserRoleRow {
    fn into_assignment(self) -> AppResult<UserRoleAssignment> {
        Ok(UserRoleAssignment {
            user_role_id: CatalogId::from_uuid(self.user_role_id),
            user_id: self.user_id,
            role_id: CatalogId::from_uuid(self.role_id),
            role_name: self.role_name,
            status: decode_status(self.status.as_str())?,
            assigned_at: self.assigned_at,
        })
    }
}

fn decode_status(value: &str) -> AppResult<CatalogStatus> {
    CatalogStatus::from_str(value)
        .map_err(|error| AppError::Internal(format!("failed to decode catalog status: {error}")))
}

fn decode_level(value: &str) -> AppResult<PermissionLevel> {
    PermissionLevel::from_str(value)
        .map_err(|error| AppError::Internal(format!("failed to decode permission: {error}")))
}

#[async_trait]
impl CatalogRepository for PostgresCatalogRepository {
    async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>> {
        self.list_roles_impl().await
    }

    async fn create_role(&self, input: NewCatalogEntry) -> AppResult<RoleDefinition> {
        self.create_role_impl(input).await
    }

    async fn list_permissions(&self) -> AppResult<Vec<PermissionDefinition>> {
        self.list_permissions_impl().await
    }

    async fn create_permission(&self, input: NewPermission) -> AppResult<PermissionDefinition> {
        self.create_permission_impl(input).await
    }

    async fn list_modules(&self) -> AppResult<Vec<ModuleDefinition>> {
        self.list_modules_impl().await
    }

    async fn create_module(&self, input: NewCatalogEntry) -> AppResult<ModuleDefinition> {
        self.create_module_impl(input).await
    }

    async fn list_role_permissions(&self) -> AppResult<Vec<RolePermissionMapping>> {
        self.list_role_permissions_impl().await
    }

    async fn create_role_permission(
        &self,
        input: NewRolePermission,
    ) -> AppResult<CatalogWrite<RolePermissionMapping>> {
        self.create_role_permission_impl(input).await
    }

    async fn list_user_roles(&self, user_id: Option<&str>) -> AppResult<Vec<UserRoleAssignment>> {
        self.list_user_roles_impl(user_id).await
    }

    async fn assign_user_role(
        &self,
        input: NewUserRole,
    ) -> AppResult<CatalogWrite<UserRoleAssignment>> {
        self.assign_user_role_impl(input).await
    }

    async fn set_status(
        &self,
        kind: CatalogEntryKind,
        id: CatalogId,
        status: CatalogStatus,
    ) -> AppResult<()> {
        self.set_status_impl(kind, id, status).await
    }
}
