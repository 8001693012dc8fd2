use super::*;

impl PostgresCatalogRepository {
    pub(super) async fn list_role_permissions_impl(&self) -> AppResult<Vec<RolePermissionMapping>> {
        let rows = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT
                mappings.id AS mapping_id,
                roles.id AS role_id,
                roles.name AS role_name,
                modules.id AS module_id,
                modules.name AS module_name,
                permissions.id AS permission_id,
                permissions.name AS permission_name,
                mappings.status,
                to_char(mappings.created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            FROM catalog_role_permissions AS mappings
            INNER JOIN catalog_roles AS roles
                ON roles.id = mappings.role_id
            INNER JOIN catalog_modules AS modules
                ON modules.id = mappings.module_id
            INNER JOIN catalog_permissions AS permissions
                ON permissions.id = mappings.permission_id
            ORDER BY roles.name, modules.position, permissions.name
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_store_error(error, "failed to list role permissions"))?;

        rows.into_iter().map(MappingRow::into_mapping).collect()
    }

    pub(super) async fn create_role_permission_impl(
        &self,
        input: NewRolePermission,
    ) -> AppResult<CatalogWrite<RolePermissionMapping>> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|error| map_store_error(error, "failed to begin transaction"))?;

        for (table, label, id) in [
            ("catalog_roles", "role", input.role_id),
            ("catalog_modules", "module", input.module_id),
            ("catalog_permissions", "permission", input.permission_id),
        ] {
            let exists = sqlx::query_scalar::<_, bool>(&format!(
                "SELECT EXISTS (SELECT 1 FROM {table} WHERE id = $1 FOR SHARE)"
            ))
            .bind(id.as_uuid())
            .fetch_one(&mut *transaction)
            .await
            .map_err(|error| map_store_error(error, "failed to resolve mapping reference"))?;

            if !exists {
                return Err(AppError::NotFound(format!("{label} '{id}' was not found")));
            }
        }

        let written_id = sqlx::query_scalar::<_, uuid::Uuid>(
            r#"
            INSERT INTO catalog_role_permissions (role_id, module_id, permission_id)
            VALUES ($1, $2, $3)
            ON CONFLICT (role_id, module_id, permission_id)
            DO UPDATE SET status = 'ACTIVE'
            WHERE catalog_role_permissions.status <> 'ACTIVE'
            RETURNING id
            "#,
        )
        .bind(input.role_id.as_uuid())
        .bind(input.module_id.as_uuid())
        .bind(input.permission_id.as_uuid())
        .fetch_optional(&mut *transaction)
        .await
        .map_err(|error| map_store_error(error, "failed to create role permission"))?;

        let changed = written_id.is_some();
        let mapping_id = match written_id {
            Some(mapping_id) => mapping_id,
            None => sqlx::query_scalar::<_, uuid::Uuid>(
                r#"
                SELECT id
                FROM catalog_role_permissions
                WHERE role_id = $1 AND module_id = $2 AND permission_id = $3
                "#,
            )
            .bind(input.role_id.as_uuid())
            .bind(input.module_id.as_uuid())
            .bind(input.permission_id.as_uuid())
            .fetch_one(&mut *transaction)
            .await
            .map_err(|error| map_store_error(error, "failed to load role permission"))?,
        };

        let row = sqlx::query_as::<_, MappingRow>(
            r#"
            SELECT
                mappings.id AS mapping_id,
                roles.id AS role_id,
                roles.name AS role_name,
                modules.id AS module_id,
                modules.name AS module_name,
                permissions.id AS permission_id,
                permissions.name AS permission_name,
                mappings.status,
                to_char(mappings.created_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS created_at
            FROM catalog_role_permissions AS mappings
            INNER JOIN catalog_roles AS roles
                ON roles.id = mappings.role_id
            INNER JOIN catalog_modules AS modules
                ON modules.id = mappings.module_id
            INNER JOIN catalog_permissions AS permissions
                ON permissions.id = mappings.permission_id
            WHERE mappings.id = $1
            "#,
        )
        .bind(mapping_id)
        .fetch_one(&mut *transaction)
        .await
        .map_err(|error| map_store_error(error, "failed to load role permission"))?;

        transaction
            .commit()
            .await
            .map_err(|error| map_store_error(error, "failed to commit transaction"))?;

        let mapping = row.into_mapping()?;
        Ok(CatalogWrite { entry: mapping, changed })
    }
}
