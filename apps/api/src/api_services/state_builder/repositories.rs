use std::sync::Arc;

use modgate_application::{
    AuditLogRepository, AuditRepository, AuthorizationRepository, CatalogRepository,
};
use modgate_infrastructure::{
    InMemoryCatalogStore, PostgresAuditLogRepository, PostgresAuditRepository,
    PostgresAuthorizationRepository, PostgresCatalogRepository,
};
use sqlx::PgPool;

pub(super) struct RepositorySet {
    pub(super) authorization_repository: Arc<dyn AuthorizationRepository>,
    pub(super) catalog_repository: Arc<dyn CatalogRepository>,
    pub(super) audit_repository: Arc<dyn AuditRepository>,
    pub(super) audit_log_repository: Arc<dyn AuditLogRepository>,
}

pub(super) fn build_postgres_repository_set(pool: &PgPool) -> RepositorySet {
    RepositorySet {
        authorization_repository: Arc::new(PostgresAuthorizationRepository::new(pool.clone())),
        catalog_repository: Arc::new(PostgresCatalogRepository::new(pool.clone())),
        audit_repository: Arc::new(PostgresAuditRepository::new(pool.clone())),
        audit_log_repository: Arc::new(PostgresAuditLogRepository::new(pool.clone())),
    }
}

/// Every port shares one store so administration is visible to decisions.
pub(super) fn build_in_memory_repository_set() -> RepositorySet {
    let store = Arc::new(InMemoryCatalogStore::new());

    RepositorySet {
        authorization_repository: store.clone(),
        catalog_repository: store.clone(),
        audit_repository: store.clone(),
        audit_log_repository: store,
    }
}
