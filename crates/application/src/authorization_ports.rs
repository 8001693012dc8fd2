use async_trait::async_trait;
use modgate_core::AppResult;
use modgate_domain::ModuleGrant;

use crate::catalog_ports::ModuleDefinition;

/// One (module, permission) pair in a batched decision request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessCheck {
    /// Module name as declared in the catalog.
    pub module_name: String,
    /// Permission name, `READ` or `READ_WRITE`.
    pub permission: String,
}

impl AccessCheck {
    /// Creates a check for a module and permission name.
    #[must_use]
    pub fn new(module_name: impl Into<String>, permission: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            permission: permission.into(),
        }
    }
}

/// Repository port for the read side of access decisions.
#[async_trait]
pub trait AuthorizationRepository: Send + Sync {
    /// Lists the distinct grants reachable by a user.
    ///
    /// Only grants where the assignment, role, mapping, module and permission
    /// rows are all active are returned.
    async fn list_grants_for_user(&self, user_id: &str) -> AppResult<Vec<ModuleGrant>>;

    /// Lists active modules in catalog declaration order, without the
    /// all-modules sentinel.
    async fn list_declared_modules(&self) -> AppResult<Vec<ModuleDefinition>>;
}

/// Optional short-lived cache of per-user grants.
#[async_trait]
pub trait GrantCache: Send + Sync {
    /// Returns cached grants for one user.
    async fn get_grants(&self, user_id: &str) -> AppResult<Option<Vec<ModuleGrant>>>;

    /// Stores grants for one user with ttl.
    async fn set_grants(
        &self,
        user_id: &str,
        grants: &[ModuleGrant],
        ttl_seconds: u32,
    ) -> AppResult<()>;
}
