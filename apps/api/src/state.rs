use modgate_application::{AuthorizationService, CatalogAdminService};
use sqlx::PgPool;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub authorization_service: AuthorizationService,
    pub catalog_admin_service: CatalogAdminService,
    /// Present when the catalog lives in PostgreSQL.
    pub postgres_pool: Option<PgPool>,
    /// Present when the grant cache is backed by Redis.
    pub redis_client: Option<redis::Client>,
}
