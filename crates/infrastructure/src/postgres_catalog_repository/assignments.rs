use super::*;

impl PostgresCatalogRepository {
    pub(super) async fn list_user_roles_impl(
        &self,
        user_id: Option<&str>,
    ) -> AppResult<Vec<UserRoleAssignment>> {
        let rows = sqlx::query_as::<_, UserRoleRow>(
            r#"
            SELECT
                user_roles.id AS user_role_id,
                user_roles.user_id,
                roles.id AS role_id,
                roles.name AS role_name,
                user_roles.status,
                to_char(user_roles.assigned_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS assigned_at
            FROM catalog_user_roles AS user_roles
            INNER JOIN catalog_roles AS roles
                ON roles.id = user_roles.role_id
            WHERE ($1::TEXT IS NULL OR user_roles.user_id = $1)
            ORDER BY user_roles.user_id, roles.name
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| map_store_error(error, "failed to list user roles"))?;

        rows.into_iter().map(UserRoleRow::into_assignment).collect()
    }

    pub(super) async fn assign_user_role_impl(
        &self,
        input: NewUserRole,
    ) -> AppResult<CatalogWrite<UserRoleAssignment>> {
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|error| map_store_error(error, "failed to begin transaction"))?;

        let role_exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (SELECT 1 FROM catalog_roles WHERE id = $1 FOR SHARE)
            "#,
        )
        .bind(input.role_id.as_uuid())
        .fetch_one(&mut *transaction)
        .await
        .map_err(|error| map_store_error(error, "failed to resolve role"))?;

        if !role_exists {
            return Err(AppError::NotFound(format!(
                "role '{}' was not found",
                input.role_id
            )));
        }

        let assigned = sqlx::query_as::<_, UserRoleRow>(
            r#"
            WITH assigned AS (
                INSERT INTO catalog_user_roles (user_id, role_id)
                VALUES ($1, $2)
                ON CONFLICT (user_id, role_id)
                DO UPDATE SET status = 'ACTIVE', assigned_at = now()
                WHERE catalog_user_roles.status <> 'ACTIVE'
                RETURNING id, user_id, role_id, status, assigned_at
            )
            SELECT
                assigned.id AS user_role_id,
                assigned.user_id,
                roles.id AS role_id,
                roles.name AS role_name,
                assigned.status,
                to_char(assigned.assigned_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS assigned_at
            FROM assigned
            INNER JOIN catalog_roles AS roles
                ON roles.id = assigned.role_id
            "#,
        )
        .bind(input.user_id.as_str())
        .bind(input.role_id.as_uuid())
        .fetch_optional(&mut *transaction)
        .await
        .map_err(|error| map_store_error(error, "failed to assign user role"))?;

        let changed = assigned.is_some();
        let row = match assigned {
            Some(row) => row,
            None => sqlx::query_as::<_, UserRoleRow>(
                r#"
                SELECT
                    user_roles.id AS user_role_id,
                    user_roles.user_id,
                    roles.id AS role_id,
                    roles.name AS role_name,
                    user_roles.status,
                    to_char(user_roles.assigned_at AT TIME ZONE 'UTC', 'YYYY-MM-DD"T"HH24:MI:SS"Z"') AS assigned_at
                FROM catalog_user_roles AS user_roles
                INNER JOIN catalog_roles AS roles
                    ON roles.id = user_roles.role_id
                WHERE user_roles.user_id = $1 AND user_roles.role_id = $2
                "#,
            )
            .bind(input.user_id.as_str())
            .bind(input.role_id.as_uuid())
            .fetch_one(&mut *transaction)
            .await
            .map_err(|error| map_store_error(error, "failed to load user role"))?,
        };

        transaction
            .commit()
            .await
            .map_err(|error| map_store_error(error, "failed to commit transaction"))?;

        let assignment = row.into_assignment()?;
        Ok(CatalogWrite {
            entry: assignment,
            changed,
        })
    }
}
