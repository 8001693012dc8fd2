//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_catalog_store;
mod in_memory_grant_cache;
mod postgres_audit_log_repository;
mod postgres_audit_repository;
mod postgres_authorization_repository;
mod postgres_catalog_repository;
mod postgres_errors;
mod redis_grant_cache;

pub use in_memory_catalog_store::InMemoryCatalogStore;
pub use in_memory_grant_cache::InMemoryGrantCache;
pub use postgres_audit_log_repository::PostgresAuditLogRepository;
pub use postgres_audit_repository::PostgresAuditRepository;
pub use postgres_authorization_repository::PostgresAuthorizationRepository;
pub use postgres_catalog_repository::PostgresCatalogRepository;
pub use redis_grant_cache::RedisGrantCache;
