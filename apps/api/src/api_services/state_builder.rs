use modgate_application::{AuthorizationService, CatalogAdminService};
use modgate_core::AppError;
use sqlx::PgPool;

use crate::api_config::{ApiConfig, GrantCacheBackend};
use crate::state::AppState;

use super::redis_client::build_redis_client;

mod caches;
mod repositories;

/// Wires services over the configured catalog store.
///
/// `pool` is `None` when the catalog is held in memory.
pub fn build_app_state(pool: Option<PgPool>, config: &ApiConfig) -> Result<AppState, AppError> {
    let redis_client = config
        .redis_url
        .as_deref()
        .map(build_redis_client)
        .transpose()?;

    let repositories = match &pool {
        Some(pool) => repositories::build_postgres_repository_set(pool),
        None => repositories::build_in_memory_repository_set(),
    };

    let mut authorization_service =
        AuthorizationService::new(repositories.authorization_repository);
    if config.grant_cache_enabled() {
        let grant_cache = caches::build_grant_cache(config, redis_client.clone())?;
        authorization_service =
            authorization_service.with_grant_cache(grant_cache, config.grant_cache_ttl_seconds);
    }

    let catalog_admin_service = CatalogAdminService::new(
        authorization_service.clone(),
        repositories.catalog_repository,
        repositories.audit_log_repository,
        repositories.audit_repository,
    );

    let redis_client = match config.grant_cache_backend {
        GrantCacheBackend::Redis if config.grant_cache_enabled() => redis_client,
        _ => None,
    };

    Ok(AppState {
        authorization_service,
        catalog_admin_service,
        postgres_pool: pool,
        redis_client,
    })
}
