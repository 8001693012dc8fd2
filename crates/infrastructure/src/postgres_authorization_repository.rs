use std::str::FromStr;

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

use modgate_application::{AuthorizationRepository, ModuleDefinition};
use modgate_core::{AppError, AppResult};
use modgate_domain::{ALL_MODULES_SENTINEL, ModuleGrant, PermissionLevel};

use crate::postgres_catalog_repository::ModuleRow;
use crate::postgres_errors::map_store_error;

/// PostgreSQL-backed repository for user grant lookups.
#[derive(Clone)]
pub struct PostgresAuthorizationRepository {
    pool: PgPool,
}

impl PostgresAuthorizationRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct GrantRow {
    module_name: String,
    permission_name: String,
}

#[async_trait]
impl AuthorizationRepository for PostgresAuthorizationRepository {
    async fn list_grants_for_user(&self, user_id: &str) -> AppResult<Vec<ModuleGrant>> {
        let rows = sqlx::query_as::<_, GrantRow>(
            r#"
            SELECT DISTINCT
                modules.name AS module_name,
                permissions.name AS permission_name
            FROM catalog_user_roles AS user_roles
            INNER JOIN catalog_roles AS roles
                ON roles.id = user_roles.role_id
            INNER JOIN catalog_role_permissions AS mappings
                ON mappings.role_id = roles.id
            INNER JOIN catalog_modules AS modules
                ON modules.id = mappings.module_id
            INNER JOIN catalog_permissions AS permissions
                ON permissions.id = mappings.permission_id
            WHERE user_roles.user_id = $1
                AND user_roles.status = 'ACTIVE'
                AND roles.status = 'ACTIVE'
                AND mappings.status = 'ACTIVE'
                AND modules.status = 'ACTIVE'
                AND permissions.status = 'ACTIVE'
            ORDER BY modules.name, permissions.name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_store_error(error, "failed to load grants"))?;

        rows.into_iter()
            .map(|row| {
                let level = PermissionLevel::from_str(row.permission_name.as_str()).map_err(
                    |error| {
                        AppError::Internal(format!(
                            "failed to decode permission '{}' for user '{user_id}': {error}",
                            row.permission_name
                        ))
                    },
                )?;
                Ok(ModuleGrant::new(row.module_name, level))
            })
            .collect()
    }

    async fn list_declared_modules(&self) -> AppResult<Vec<ModuleDefinition>> {
        let rows = sqlx::query_as::<_, ModuleRow>(
            r#"
            SELECT
                id AS module_id,
                name AS module_name,
                description,
                status,
                position,
                to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            FROM catalog_modules
            WHERE status = 'ACTIVE'
                AND name <> $1
            ORDER BY position
            "#,
        )
        .bind(ALL_MODULES_SENTINEL)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_store_error(error, "failed to list declared modules"))?;

        rows.into_iter().map(ModuleRow::into_definition).collect()
    }
}
