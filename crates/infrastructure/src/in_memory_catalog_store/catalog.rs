use modgate_application::{
    CatalogRepository, CatalogWrite, NewCatalogEntry, NewPermission, NewRolePermission,
    NewUserRole,
};
use modgate_core::AppError;
use modgate_domain::{CatalogEntryKind, CatalogStatus};

use super::*;

#[async_trait]
impl CatalogRepository for InMemoryCatalogStore {
    async fn list_roles(&self) -> AppResult<Vec<RoleDefinition>> {
        let mut roles = self.state.read().await.roles.clone();
        roles.sort_by(|left, right| left.role_name.cmp(&right.role_name));
        Ok(roles)
    }

    async fn create_role(&self, input: NewCatalogEntry) -> AppResult<RoleDefinition> {
        let mut state = self.state.write().await;
        if state
            .roles
            .iter()
            .any(|role| role.role_name == input.name.as_str())
        {
            return Err(AppError::Conflict(format!(
                "role '{}' already exists",
                input.name
            )));
        }

        let role = RoleDefinition {
            role_id: CatalogId::new(),
            role_name: input.name.into(),
            description: input.description,
            status: CatalogStatus::Active,
            created_at: now_rfc3339(),
        };
        state.roles.push(role.clone());

        Ok(role)
    }

    async fn list_permissions(&self) -> AppResult<Vec<PermissionDefinition>> {
        let mut permissions = self.state.read().await.permissions.clone();
        permissions.sort_by_key(|permission| permission.level);
        Ok(permissions)
    }

    async fn create_permission(&self, input: NewPermission) -> AppResult<PermissionDefinition> {
        let mut state = self.state.write().await;
        if state
            .permissions
            .iter()
            .any(|permission| permission.level == input.level)
        {
            return Err(AppError::Conflict(format!(
                "permission '{}' already exists",
                input.level.as_str()
            )));
        }

        let permission = PermissionDefinition {
            permission_id: CatalogId::new(),
            level: input.level,
            description: input.description,
            status: CatalogStatus::Active,
            created_at: now_rfc3339(),
        };
        state.permissions.push(permission.clone());

        Ok(permission)
    }

    async fn list_modules(&self) -> AppResult<Vec<ModuleDefinition>> {
        let mut modules = self.state.read().await.modules.clone();
        modules.sort_by_key(|module| module.position);
        Ok(modules)
    }

    async fn create_module(&self, input: NewCatalogEntry) -> AppResult<ModuleDefinition> {
        let mut state = self.state.write().await;
        if state
            .modules
            .iter()
            .any(|module| module.module_name == input.name.as_str())
        {
            return Err(AppError::Conflict(format!(
                "module '{}' already exists",
                input.name
            )));
        }

        state.next_position += 1;
        let module = ModuleDefinition {
            module_id: CatalogId::new(),
            module_name: input.name.into(),
            description: input.description,
            status: CatalogStatus::Active,
            position: state.next_position,
            created_at: now_rfc3339(),
        };
        state.modules.push(module.clone());

        Ok(module)
    }

    async fn list_role_permissions(&self) -> AppResult<Vec<RolePermissionMapping>> {
        let state = self.state.read().await;
        let mut mappings = state.role_permissions.clone();
        mappings.sort_by_key(|mapping| {
            (
                mapping.role_name.clone(),
                state
                    .module(mapping.module_id)
                    .map_or(i64::MAX, |module| module.position),
                mapping.level,
            )
        });
        Ok(mappings)
    }

    async fn create_role_permission(
        &self,
        input: NewRolePermission,
    ) -> AppResult<CatalogWrite<RolePermissionMapping>> {
        let mut state = self.state.write().await;

        let role_name = state
            .role(input.role_id)
            .map(|role| role.role_name.clone())
            .ok_or_else(|| AppError::NotFound(format!("role '{}' was not found", input.role_id)))?;
        let module_name = state
            .module(input.module_id)
            .map(|module| module.module_name.clone())
            .ok_or_else(|| {
                AppError::NotFound(format!("module '{}' was not found", input.module_id))
            })?;
        let level = state
            .permission(input.permission_id)
            .map(|permission| permission.level)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "permission '{}' was not found",
                    input.permission_id
                ))
            })?;

        if let Some(existing) = state.role_permissions.iter_mut().find(|mapping| {
            mapping.role_id == input.role_id
                && mapping.module_id == input.module_id
                && mapping.permission_id == input.permission_id
        }) {
            if existing.status.is_active() {
                return Ok(CatalogWrite::unchanged(existing.clone()));
            }
            existing.status = CatalogStatus::Active;
            return Ok(CatalogWrite::changed(existing.clone()));
        }

        let mapping = RolePermissionMapping {
            mapping_id: CatalogId::new(),
            role_id: input.role_id,
            role_name,
            module_id: input.module_id,
            module_name,
            permission_id: input.permission_id,
            level,
            status: CatalogStatus::Active,
            created_at: now_rfc3339(),
        };
        state.role_permissions.push(mapping.clone());

        Ok(CatalogWrite::changed(mapping))
    }

    async fn list_user_roles(&self, user_id: Option<&str>) -> AppResult<Vec<UserRoleAssignment>> {
        let state = self.state.read().await;
        let mut assignments: Vec<UserRoleAssignment> = state
            .user_roles
            .iter()
            .filter(|assignment| user_id.is_none_or(|user_id| assignment.user_id == user_id))
            .cloned()
            .collect();
        assignments.sort_by(|left, right| {
            (left.user_id.as_str(), left.role_name.as_str())
                .cmp(&(right.user_id.as_str(), right.role_name.as_str()))
        });

        Ok(assignments)
    }

    async fn assign_user_role(
        &self,
        input: NewUserRole,
    ) -> AppResult<CatalogWrite<UserRoleAssignment>> {
        let mut state = self.state.write().await;

        let role_name = state
            .role(input.role_id)
            .map(|role| role.role_name.clone())
            .ok_or_else(|| AppError::NotFound(format!("role '{}' was not found", input.role_id)))?;

        if let Some(existing) = state.user_roles.iter_mut().find(|assignment| {
            assignment.user_id == input.user_id.as_str() && assignment.role_id == input.role_id
        }) {
            if existing.status.is_active() {
                return Ok(CatalogWrite::unchanged(existing.clone()));
            }
            existing.status = CatalogStatus::Active;
            existing.assigned_at = now_rfc3339();
            return Ok(CatalogWrite::changed(existing.clone()));
        }

        let assignment = UserRoleAssignment {
            user_role_id: CatalogId::new(),
            user_id: input.user_id.into(),
            role_id: input.role_id,
            role_name,
            status: CatalogStatus::Active,
            assigned_at: now_rfc3339(),
        };
        state.user_roles.push(assignment.clone());

        Ok(CatalogWrite::changed(assignment))
    }

    async fn set_status(
        &self,
        kind: CatalogEntryKind,
        id: CatalogId,
        status: CatalogStatus,
    ) -> AppResult<()> {
        let mut state = self.state.write().await;

        let current = match kind {
            CatalogEntryKind::Role => state
                .roles
                .iter_mut()
                .find(|role| role.role_id == id)
                .map(|role| &mut role.status),
            CatalogEntryKind::Permission => state
                .permissions
                .iter_mut()
                .find(|permission| permission.permission_id == id)
                .map(|permission| &mut permission.status),
            CatalogEntryKind::Module => state
                .modules
                .iter_mut()
                .find(|module| module.module_id == id)
                .map(|module| &mut module.status),
            CatalogEntryKind::RolePermission => state
                .role_permissions
                .iter_mut()
                .find(|mapping| mapping.mapping_id == id)
                .map(|mapping| &mut mapping.status),
            CatalogEntryKind::UserRole => state
                .user_roles
                .iter_mut()
                .find(|assignment| assignment.user_role_id == id)
                .map(|assignment| &mut assignment.status),
        };

        let current = current
            .ok_or_else(|| AppError::NotFound(format!("{} '{id}' was not found", kind.as_str())))?;
        *current = status;

        Ok(())
    }
}
