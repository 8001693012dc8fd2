use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use modgate_application::GrantCache;
use modgate_core::AppResult;
use modgate_domain::ModuleGrant;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct GrantCacheEntry {
    grants: Vec<ModuleGrant>,
    expires_at: Instant,
}

/// In-process cache adapter for per-user grants.
#[derive(Debug, Default)]
pub struct InMemoryGrantCache {
    entries: RwLock<HashMap<String, GrantCacheEntry>>,
}

impl InMemoryGrantCache {
    /// Creates an empty in-memory grant cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GrantCache for InMemoryGrantCache {
    async fn get_grants(&self, user_id: &str) -> AppResult<Option<Vec<ModuleGrant>>> {
        {
            let entries = self.entries.read().await;
            match entries.get(user_id) {
                Some(entry) if entry.expires_at > Instant::now() => {
                    return Ok(Some(entry.grants.clone()));
                }
                Some(_) => {}
                None => return Ok(None),
            }
        }

        let mut entries = self.entries.write().await;
        if entries
            .get(user_id)
            .is_some_and(|entry| entry.expires_at <= Instant::now())
        {
            entries.remove(user_id);
        }

        Ok(None)
    }

    async fn set_grants(
        &self,
        user_id: &str,
        grants: &[ModuleGrant],
        ttl_seconds: u32,
    ) -> AppResult<()> {
        if ttl_seconds == 0 {
            return Ok(());
        }

        let now = Instant::now();
        let expires_at = now
            .checked_add(Duration::from_secs(u64::from(ttl_seconds)))
            .unwrap_or(now);

        let mut entries = self.entries.write().await;
        // Keys come from caller-supplied user ids, so expired entries are
        // swept on every write.
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            user_id.to_owned(),
            GrantCacheEntry {
                grants: grants.to_vec(),
                expires_at,
            },
        );

        Ok(())
    }
}
