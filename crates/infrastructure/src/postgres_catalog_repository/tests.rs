use modgate_application::{
    AuthorizationRepository, CatalogRepository, NewCatalogEntry, NewPermission,
    NewRolePermission, NewUserRole,
};
use modgate_core::{AppError, NonEmptyString};
use modgate_domain::{CatalogEntryKind, CatalogId, CatalogStatus, ModuleGrant, PermissionLevel};
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::PostgresCatalogRepository;
use crate::PostgresAuthorizationRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres catalog tests: {error}");
    }

    Some(pool)
}

fn unique_name(prefix: &str) -> NonEmptyString {
    match NonEmptyString::new(format!("{prefix}-{}", Uuid::new_v4())) {
        Ok(name) => name,
        Err(error) => panic!("generated name should be valid: {error}"),
    }
}

async fn permission_id(
    repository: &PostgresCatalogRepository,
    level: PermissionLevel,
) -> CatalogId {
    let created = repository
        .create_permission(NewPermission {
            level,
            description: None,
        })
        .await;

    match created {
        Ok(permission) => permission.permission_id,
        Err(AppError::Conflict(_)) => repository
            .list_permissions()
            .await
            .unwrap_or_default()
            .into_iter()
            .find(|permission| permission.level == level)
            .map(|permission| permission.permission_id)
            .unwrap_or_default(),
        Err(error) => panic!("failed to ensure permission: {error}"),
    }
}

#[tokio::test]
async fn grants_require_every_row_to_be_active() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresCatalogRepository::new(pool.clone());
    let authorization = PostgresAuthorizationRepository::new(pool);
    let user = unique_name("user");

    let role = repository
        .create_role(NewCatalogEntry {
            name: unique_name("desk"),
            description: None,
        })
        .await;
    let module = repository
        .create_module(NewCatalogEntry {
            name: unique_name("module"),
            description: Some("test module".to_owned()),
        })
        .await;
    let (Ok(role), Ok(module)) = (role, module) else {
        panic!("failed to create role and module");
    };
    let read_write = permission_id(&repository, PermissionLevel::ReadWrite).await;

    let mapping = repository
        .create_role_permission(NewRolePermission {
            role_id: role.role_id,
            module_id: module.module_id,
            permission_id: read_write,
        })
        .await;
    let assignment = repository
        .assign_user_role(NewUserRole {
            user_id: user.clone(),
            role_id: role.role_id,
        })
        .await;
    let (Ok(mapping), Ok(assignment)) = (mapping, assignment) else {
        panic!("failed to wire role");
    };
    assert!(mapping.changed && assignment.changed);
    let mapping = mapping.entry;

    let repeated = repository
        .assign_user_role(NewUserRole {
            user_id: user.clone(),
            role_id: role.role_id,
        })
        .await;
    assert_eq!(
        repeated
            .ok()
            .map(|write| (write.entry.user_role_id, write.changed)),
        Some((assignment.entry.user_role_id, false))
    );

    let grants = authorization
        .list_grants_for_user(user.as_str())
        .await
        .unwrap_or_default();
    assert_eq!(
        grants,
        vec![ModuleGrant::new(
            module.module_name.clone(),
            PermissionLevel::ReadWrite
        )]
    );

    let deactivated = repository
        .set_status(
            CatalogEntryKind::RolePermission,
            mapping.mapping_id,
            CatalogStatus::Inactive,
        )
        .await;
    assert!(deactivated.is_ok());
    let grants = authorization
        .list_grants_for_user(user.as_str())
        .await
        .unwrap_or_default();
    assert!(grants.is_empty());

    let recreated = repository
        .create_role_permission(NewRolePermission {
            role_id: role.role_id,
            module_id: module.module_id,
            permission_id: read_write,
        })
        .await;
    assert_eq!(
        recreated
            .ok()
            .map(|write| (write.entry.mapping_id, write.entry.status, write.changed)),
        Some((mapping.mapping_id, CatalogStatus::Active, true))
    );
}

#[tokio::test]
async fn duplicate_role_names_conflict() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresCatalogRepository::new(pool);
    let name = unique_name("role");

    let first = repository
        .create_role(NewCatalogEntry {
            name: name.clone(),
            description: None,
        })
        .await;
    let second = repository
        .create_role(NewCatalogEntry {
            name,
            description: None,
        })
        .await;

    assert!(first.is_ok());
    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn missing_references_are_not_found() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresCatalogRepository::new(pool);
    let mapping = repository
        .create_role_permission(NewRolePermission {
            role_id: CatalogId::new(),
            module_id: CatalogId::new(),
            permission_id: CatalogId::new(),
        })
        .await;
    let status = repository
        .set_status(CatalogEntryKind::Module, CatalogId::new(), CatalogStatus::Inactive)
        .await;

    assert!(matches!(mapping, Err(AppError::NotFound(message)) if message.starts_with("role")));
    assert!(matches!(status, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn new_modules_are_declared_after_existing_ones() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let repository = PostgresCatalogRepository::new(pool.clone());
    let authorization = PostgresAuthorizationRepository::new(pool);

    let first = repository
        .create_module(NewCatalogEntry {
            name: unique_name("first"),
            description: None,
        })
        .await;
    let second = repository
        .create_module(NewCatalogEntry {
            name: unique_name("second"),
            description: None,
        })
        .await;
    let (Ok(first), Ok(second)) = (first, second) else {
        panic!("failed to create modules");
    };
    assert!(first.position < second.position);

    let declared = authorization
        .list_declared_modules()
        .await
        .unwrap_or_default();
    let first_index = declared
        .iter()
        .position(|module| module.module_id == first.module_id);
    let second_index = declared
        .iter()
        .position(|module| module.module_id == second.module_id);
    assert!(first_index.is_some());
    assert!(first_index < second_index);
}
