use std::sync::Arc;

use modgate_core::{AppResult, CallerIdentity};
use modgate_domain::ModuleGrant;
use tracing::warn;

use crate::authorization_ports::{AuthorizationRepository, GrantCache};

mod decisions;
mod visibility;


/// Application service answering module access decisions.
///
/// Every decision reads the catalog at call time unless a grant cache is
/// configured, in which case grants may be up to the cache ttl old. Store
/// failures always resolve to a denial.
#[derive(Clone)]
pub struct AuthorizationService {
    repository: Arc<dyn AuthorizationRepository>,
    grant_cache: Option<Arc<dyn GrantCache>>,
    grant_cache_ttl_seconds: u32,
}

impl AuthorizationService {
    /// Creates a new authorization service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn AuthorizationRepository>) -> Self {
        Self {
            repository,
            grant_cache: None,
            grant_cache_ttl_seconds: 0,
        }
    }

    /// Adds optional per-user grant caching.
    #[must_use]
    pub fn with_grant_cache(mut self, grant_cache: Arc<dyn GrantCache>, ttl_seconds: u32) -> Self {
        self.grant_cache = Some(grant_cache);
        self.grant_cache_ttl_seconds = ttl_seconds;
        self
    }

    /// Returns the distinct active grants reachable by the caller.
    pub async fn effective_grants(&self, caller: &CallerIdentity) -> AppResult<Vec<ModuleGrant>> {
        self.load_grants(caller.user_id()).await
    }

    async fn load_grants(&self, user_id: &str) -> AppResult<Vec<ModuleGrant>> {
        if self.grant_cache_ttl_seconds > 0
            && let Some(cache) = &self.grant_cache
        {
            match cache.get_grants(user_id).await {
                Ok(Some(grants)) => return Ok(grants),
                Ok(None) => {}
                Err(error) => warn!(user_id, %error, "grant cache read failed, loading from catalog"),
            }
        }

        let grants = self.repository.list_grants_for_user(user_id).await?;

        if self.grant_cache_ttl_seconds > 0
            && let Some(cache) = &self.grant_cache
            && let Err(error) = cache
                .set_grants(user_id, &grants, self.grant_cache_ttl_seconds)
                .await
        {
            warn!(user_id, %error, "grant cache write failed");
        }

        Ok(grants)
    }
}
