use super::*;

impl PostgresCatalogRepository {
    pub(super) async fn list_roles_impl(&self) -> AppResult<Vec<RoleDefinition>> {
        let rows = sqlx::query_as::<_, RoleRow>(
            r#"
            SELECT
                id AS role_id,
                name AS role_name,
                description,
                status,
                to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            FROM catalog_roles
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_store_error(error, "failed to list roles"))?;

        rows.into_iter().map(RoleRow::into_definition).collect()
    }

    pub(super) async fn create_role_impl(
        &self,
        input: NewCatalogEntry,
    ) -> AppResult<RoleDefinition> {
        let row = sqlx::query_as::<_, RoleRow>(
            r#"
            INSERT INTO catalog_roles (name, description)
            VALUES ($1, $2)
            RETURNING
                id AS role_id,
                name AS role_name,
                description,
                status,
                to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            "#,
        )
        .bind(input.name.as_str())
        .bind(input.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            map_unique_violation(error, "failed to create role", || {
                format!("role '{}' already exists", input.name)
            })
        })?;

        row.into_definition()
    }

    pub(super) async fn list_permissions_impl(&self) -> AppResult<Vec<PermissionDefinition>> {
        let rows = sqlx::query_as::<_, PermissionRow>(
            r#"
            SELECT
                id AS permission_id,
                name AS permission_name,
                description,
                status,
                to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            FROM catalog_permissions
            ORDER BY name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_store_error(error, "failed to list permissions"))?;

        rows.into_iter().map(PermissionRow::into_definition).collect()
    }

    pub(super) async fn create_permission_impl(
        &self,
        input: NewPermission,
    ) -> AppResult<PermissionDefinition> {
        let row = sqlx::query_as::<_, PermissionRow>(
            r#"
            INSERT INTO catalog_permissions (name, description)
            VALUES ($1, $2)
            RETURNING
                id AS permission_id,
                name AS permission_name,
                description,
                status,
                to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            "#,
        )
        .bind(input.level.as_str())
        .bind(input.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            map_unique_violation(error, "failed to create permission", || {
                format!("permission '{}' already exists", input.level.as_str())
            })
        })?;

        row.into_definition()
    }

    pub(super) async fn list_modules_impl(&self) -> AppResult<Vec<ModuleDefinition>> {
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
            ORDER BY position
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_store_error(error, "failed to list modules"))?;

        rows.into_iter().map(ModuleRow::into_definition).collect()
    }

    pub(super) async fn create_module_impl(
        &self,
        input: NewCatalogEntry,
    ) -> AppResult<ModuleDefinition> {
        let row = sqlx::query_as::<_, ModuleRow>(
            r#"
            INSERT INTO catalog_modules (name, description)
            VALUES ($1, $2)
            RETURNING
                id AS module_id,
                name AS module_name,
                description,
                status,
                position,
                to_char(created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            "#,
        )
        .bind(input.name.as_str())
        .bind(input.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(|error| {
            map_unique_violation(error, "failed to create module", || {
                format!("module '{}' already exists", input.name)
            })
        })?;

        row.into_definition()
    }
}
