use async_trait::async_trait;

use modgate_core::AppResult;
use modgate_domain::{CatalogEntryKind, CatalogId, CatalogStatus};

use super::entries::{
    CatalogWrite, ModuleDefinition, PermissionDefinition, RoleDefinition,
    RolePermissionMapping, UserRoleAssignment,
};
use super::inputs::{NewCatalogEntry, NewPermission, NewRolePermission, NewUserRole};

/// Repository port for catalog administration.
///
/// Implementations enforce name uniqueness (`Conflict`) and referential
/// existence (`NotFound`) atomically with the write.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Lists every role, including inactive ones, ordered by name.
    async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>>;

    /// Creates an active role.
    async fn create_role(&self, input: NewCatalogEntry) -> AppResult<RoleDefinition>;

    /// Lists every permission, including inactive ones.
    async fn list_permissions(&self) -> AppResult<Vec<PermissionDefinition>>;

    /// Creates an active permission.
    async fn create_permission(&self, input: NewPermission) -> AppResult<PermissionDefinition>;

    /// Lists every module, including inactive ones, in declaration order.
    async fn list_modules(&self) -> AppResult<Vec<ModuleDefinition>>;

    /// Creates an active module at the end of the declaration order.
    async fn create_module(&self, input: NewCatalogEntry) -> AppResult<ModuleDefinition>;

    /// Lists every role permission mapping.
    async fn list_role_permissions(&self) -> AppResult<Vec<RolePermissionMapping>>;

    /// Creates a mapping, reactivating an existing inactive one.
    ///
    /// An already active mapping is returned with `changed` unset.
    async fn create_role_permission(
        &self,
        input: NewRolePermission,
    ) -> AppResult<CatalogWrite<RolePermissionMapping>>;

    /// Lists user role assignments, optionally for one user.
    async fn list_user_roles(&self, user_id: Option<&str>) -> AppResult<Vec<UserRoleAssignment>>;

    /// Assigns a role, reactivating an existing inactive assignment.
    ///
    /// An already active assignment is returned with `changed` unset.
    async fn assign_user_role(
        &self,
        input: NewUserRole,
    ) -> AppResult<CatalogWrite<UserRoleAssignment>>;

    /// Sets the status of one row, failing with `NotFound` if it is absent.
    async fn set_status(
        &self,
        kind: CatalogEntryKind,
        id: CatalogId,
        status: CatalogStatus,
    ) -> AppResult<()>;
}
