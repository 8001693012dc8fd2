use modgate_application::{CatalogAdminService, CreateCatalogEntryInput, CreatePermissionInput};
use modgate_core::{AppError, AppResult, CallerIdentity, RoleTag};
use modgate_domain::{DEFAULT_MODULES, PermissionLevel};
use tracing::info;

const DEV_SEED_SUBJECT: &str = "dev-seed";

/// Seeds both permissions and the standard module catalog.
///
/// Entries that already exist are left untouched, so the seed can run on
/// every start.
pub async fn run(catalog_admin_service: &CatalogAdminService) -> AppResult<()> {
    let actor = CallerIdentity::new(DEV_SEED_SUBJECT, RoleTag::Admin);
    let mut created = 0_usize;

    for level in PermissionLevel::all() {
        let result = catalog_admin_service
            .create_permission(
                &actor,
                CreatePermissionInput {
                    permission_name: level.as_str().to_owned(),
                    description: None,
                },
            )
            .await;
        created += count_created(result)?;
    }

    for module_name in DEFAULT_MODULES {
        let result = catalog_admin_service
            .create_module(
                &actor,
                CreateCatalogEntryInput {
                    name: (*module_name).to_owned(),
                    description: None,
                },
            )
            .await;
        created += count_created(result)?;
    }

    info!(created, "dev seed applied");
    Ok(())
}

fn count_created<T>(result: AppResult<T>) -> AppResult<usize> {
    match result {
        Ok(_) => Ok(1),
        Err(AppError::Conflict(_)) => Ok(0),
        Err(error) => Err(error),
    }
}
