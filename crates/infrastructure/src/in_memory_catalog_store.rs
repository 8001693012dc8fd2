use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use modgate_application::{
    AuditEvent, AuditLogEntry, AuditLogQuery, AuditLogRepository, AuditRepository,
    AuthorizationRepository, ModuleDefinition, PermissionDefinition, RoleDefinition,
    RolePermissionMapping, UserRoleAssignment,
};
use modgate_core::AppResult;
use modgate_domain::{ALL_MODULES_SENTINEL, CatalogId, ModuleGrant};

mod catalog;

#[cfg(test)]
mod tests;

#[derive(Debug, Default)]
struct CatalogState {
    roles: Vec<RoleDefinition>,
    permissions: Vec<PermissionDefinition>,
    modules: Vec<ModuleDefinition>,
    role_permissions: Vec<RolePermissionMapping>,
    user_roles: Vec<UserRoleAssignment>,
    next_position: i64,
}

impl CatalogState {
    fn role(&self, role_id: CatalogId) -> Option<&RoleDefinition> {
        self.roles.iter().find(|role| role.role_id == role_id)
    }

    fn module(&self, module_id: CatalogId) -> Option<&ModuleDefinition> {
        self.modules
            .iter()
            .find(|module| module.module_id == module_id)
    }

    fn permission(&self, permission_id: CatalogId) -> Option<&PermissionDefinition> {
        self.permissions
            .iter()
            .find(|permission| permission.permission_id == permission_id)
    }

    fn grants_for_user(&self, user_id: &str) -> Vec<ModuleGrant> {
        let mut grants: Vec<ModuleGrant> = Vec::new();

        let active_role_ids = self
            .user_roles
            .iter()
            .filter(|assignment| assignment.user_id == user_id && assignment.status.is_active())
            .map(|assignment| assignment.role_id)
            .filter(|role_id| {
                self.role(*role_id)
                    .is_some_and(|role| role.status.is_active())
            });

        for role_id in active_role_ids {
            for mapping in self
                .role_permissions
                .iter()
                .filter(|mapping| mapping.role_id == role_id && mapping.status.is_active())
            {
                let Some(module) = self
                    .module(mapping.module_id)
                    .filter(|module| module.status.is_active())
                else {
                    continue;
                };
                let Some(permission) = self
                    .permission(mapping.permission_id)
                    .filter(|permission| permission.status.is_active())
                else {
                    continue;
                };

                let grant = ModuleGrant::new(module.module_name.clone(), permission.level);
                if !grants.contains(&grant) {
                    grants.push(grant);
                }
            }
        }

        grants
    }
}

/// In-memory catalog store for local development and tests.
///
/// Implements every catalog, authorization and audit port over one lock, so
/// each write is atomic with its uniqueness and reference checks.
#[derive(Debug, Default)]
pub struct InMemoryCatalogStore {
    state: RwLock<CatalogState>,
    audit_entries: RwLock<Vec<AuditLogEntry>>,
}

impl InMemoryCatalogStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

#[async_trait]
impl AuthorizationRepository for InMemoryCatalogStore {
    async fn list_grants_for_user(&self, user_id: &str) -> AppResult<Vec<ModuleGrant>> {
        Ok(self.state.read().await.grants_for_user(user_id))
    }

    async fn list_declared_modules(&self) -> AppResult<Vec<ModuleDefinition>> {
        let state = self.state.read().await;
        let mut modules: Vec<ModuleDefinition> = state
            .modules
            .iter()
            .filter(|module| {
                module.status.is_active() && module.module_name != ALL_MODULES_SENTINEL
            })
            .cloned()
            .collect();
        modules.sort_by_key(|module| module.position);

        Ok(modules)
    }
}

#[async_trait]
impl AuditRepository for InMemoryCatalogStore {
    async fn append_event(&self, event: AuditEvent) -> AppResult<()> {
        self.audit_entries.write().await.push(AuditLogEntry {
            event_id: Uuid::new_v4().to_string(),
            subject: event.subject,
            action: event.action.as_str().to_owned(),
            resource_type: event.resource_type,
            resource_id: event.resource_id,
            detail: event.detail,
            created_at: now_rfc3339(),
        });

        Ok(())
    }
}

#[async_trait]
impl AuditLogRepository for InMemoryCatalogStore {
    async fn list_recent_entries(&self, query: AuditLogQuery) -> AppResult<Vec<AuditLogEntry>> {
        let entries = self.audit_entries.read().await;

        Ok(entries
            .iter()
            .rev()
            .filter(|entry| {
                query
                    .action
                    .as_deref()
                    .is_none_or(|action| entry.action == action)
                    && query
                        .subject
                        .as_deref()
                        .is_none_or(|subject| entry.subject == subject)
            })
            .skip(query.offset.min(5_000))
            .take(query.limit.clamp(1, 200))
            .cloned()
            .collect())
    }
}
