use std::sync::Arc;

use modgate_application::GrantCache;
use modgate_core::{AppError, AppResult};
use modgate_infrastructure::{InMemoryGrantCache, RedisGrantCache};

use crate::api_config::{ApiConfig, GrantCacheBackend};

pub(super) fn build_grant_cache(
    config: &ApiConfig,
    redis_client: Option<redis::Client>,
) -> AppResult<Arc<dyn GrantCache>> {
    match config.grant_cache_backend {
        GrantCacheBackend::InMemory => Ok(Arc::new(InMemoryGrantCache::new())),
        GrantCacheBackend::Redis => {
            let redis_client = redis_client.ok_or_else(|| {
                AppError::Validation(
                    "REDIS_URL is required when AUTHZ_GRANT_CACHE_BACKEND=redis".to_owned(),
                )
            })?;
            Ok(Arc::new(RedisGrantCache::new(
                redis_client,
                "modgate:authz_grants",
            )))
        }
    }
}
