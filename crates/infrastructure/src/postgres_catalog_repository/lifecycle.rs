use super::*;

fn table_for(kind: CatalogEntryKind) -> &'static str {
    match kind {
        CatalogEntryKind::Role => "catalog_roles",
        CatalogEntryKind::Permission => "catalog_permissions",
        CatalogEntryKind::Module => "catalog_modules",
        CatalogEntryKind::RolePermission => "catalog_role_permissions",
        CatalogEntryKind::UserRole => "catalog_user_roles",
    }
}

impl PostgresCatalogRepository {
    pub(super) async fn set_status_impl(
        &self,
        kind: CatalogEntryKind,
        id: CatalogId,
        status: CatalogStatus,
    ) -> AppResult<()> {
        let result = sqlx::query(&format!(
            "UPDATE {} SET status = $1 WHERE id = $2",
            table_for(kind)
        ))
        .bind(status.as_str())
        .bind(id.as_uuid())
        .execute(&self.pool)
        .await
        .map_err(|error| map_store_error(error, "failed to update catalog status"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "{} '{id}' was not found",
                kind.as_str()
            )));
        }

        Ok(())
    }
}
