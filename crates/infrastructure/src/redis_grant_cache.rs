//! Redis-backed per-user grant cache.

use async_trait::async_trait;
use modgate_application::GrantCache;
use modgate_core::{AppError, AppResult};
use modgate_domain::ModuleGrant;
use redis::AsyncCommands;
use tracing::warn;

/// Redis implementation of the grant cache port.
///
/// Grants are stored as a JSON array under `<prefix>:user=<user_id>`.
#[derive(Clone)]
pub struct RedisGrantCache {
    client: redis::Client,
    key_prefix: String,
}

impl RedisGrantCache {
    /// Creates a cache adapter with a configured Redis client and key prefix.
    #[must_use]
    pub fn new(client: redis::Client, key_prefix: impl Into<String>) -> Self {
        Self {
            client,
            key_prefix: key_prefix.into(),
        }
    }

    fn key_for(&self, user_id: &str) -> String {
        format!("{}:user={user_id}", self.key_prefix)
    }

    fn decode_grants(value: &str) -> AppResult<Vec<ModuleGrant>> {
        serde_json::from_str(value).map_err(|error| {
            AppError::Internal(format!("invalid grant cache value '{value}': {error}"))
        })
    }

    async fn connection(&self) -> AppResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(|error| AppError::Internal(format!("failed to connect to redis: {error}")))
    }
}

#[async_trait]
impl GrantCache for RedisGrantCache {
    async fn get_grants(&self, user_id: &str) -> AppResult<Option<Vec<ModuleGrant>>> {
        let key = self.key_for(user_id);
        let mut connection = self.connection().await?;

        let encoded: Option<String> = connection.get(key).await.map_err(|error| {
            AppError::Internal(format!("failed to read grant cache entry: {error}"))
        })?;

        let Some(encoded) = encoded else {
            return Ok(None);
        };

        match Self::decode_grants(encoded.as_str()) {
            Ok(grants) => Ok(Some(grants)),
            Err(error) => {
                warn!(user_id, %error, "ignoring undecodable grant cache entry");
                Ok(None)
            }
        }
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

        let key = self.key_for(user_id);
        let value = serde_json::to_string(grants).map_err(|error| {
            AppError::Internal(format!("failed to encode grant cache entry: {error}"))
        })?;
        let mut connection = self.connection().await?;

        connection
            .set_ex(key, value, u64::from(ttl_seconds))
            .await
            .map_err(|error| AppError::Internal(format!("failed to write grant cache entry: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use modgate_domain::{ModuleGrant, PermissionLevel};

    use super::RedisGrantCache;

    #[test]
    fn cached_value_decodes_into_grants() {
        let grants = vec![
            ModuleGrant::new("All", PermissionLevel::Read),
            ModuleGrant::new("OrderEntry", PermissionLevel::ReadWrite),
        ];
        let encoded = serde_json::to_string(&grants).unwrap_or_default();

        assert_eq!(RedisGrantCache::decode_grants(encoded.as_str()).ok(), Some(grants));
        assert!(RedisGrantCache::decode_grants("not json").is_err());
    }

    #[test]
    fn keys_are_scoped_by_prefix_and_user() {
        let Ok(client) = redis::Client::open("redis://127.0.0.1/") else {
            panic!("redis url should parse");
        };
        let cache = RedisGrantCache::new(client, "modgate:grants");

        assert_eq!(cache.key_for("U-1"), "modgate:grants:user=U-1");
    }
}
