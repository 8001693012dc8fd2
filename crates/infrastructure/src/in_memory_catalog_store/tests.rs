use std::collections::HashMap;
use std::sync::Arc;

use modgate_application::{
    AssignUserRoleInput, AuditLogQuery, AuthorizationService, CatalogAdminService,
    CatalogRepository, CreateCatalogEntryInput, CreatePermissionInput,
    CreateRolePermissionInput, NewUserRole,
};
use modgate_core::{AppError, CallerIdentity, NonEmptyString, RoleTag};
use modgate_domain::{
    ALL_MODULES_SENTINEL, CatalogEntryKind, CatalogId, CatalogStatus, DEFAULT_MODULES,
    PermissionLevel,
};

use super::InMemoryCatalogStore;

struct Catalog {
    store: Arc<InMemoryCatalogStore>,
    authorization: AuthorizationService,
    admin: CatalogAdminService,
    modules: HashMap<String, CatalogId>,
    permissions: HashMap<PermissionLevel, CatalogId>,
}

fn operator() -> CallerIdentity {
    CallerIdentity::new("operator", RoleTag::Admin)
}

fn standard(user_id: &str) -> CallerIdentity {
    CallerIdentity::new(user_id, RoleTag::Standard)
}

async fn seeded_catalog() -> Catalog {
    let store = Arc::new(InMemoryCatalogStore::new());
    let authorization = AuthorizationService::new(store.clone());
    let admin = CatalogAdminService::new(
        authorization.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    );

    let mut permissions = HashMap::new();
    for level in PermissionLevel::all() {
        let created = admin
            .create_permission(
                &operator(),
                CreatePermissionInput {
                    permission_name: level.as_str().to_owned(),
                    description: None,
                },
            )
            .await;
        let Ok(permission) = created else {
            panic!("seeding permission {} failed", level.as_str());
        };
        permissions.insert(*level, permission.permission_id);
    }

    let mut modules = HashMap::new();
    for name in DEFAULT_MODULES.iter().copied().chain([ALL_MODULES_SENTINEL]) {
        let created = admin
            .create_module(
                &operator(),
                CreateCatalogEntryInput {
                    name: name.to_owned(),
                    description: None,
                },
            )
            .await;
        let Ok(module) = created else {
            panic!("seeding module {name} failed");
        };
        modules.insert(module.module_name, module.module_id);
    }

    Catalog {
        store,
        authorization,
        admin,
        modules,
        permissions,
    }
}

impl Catalog {
    async fn role(&self, name: &str) -> CatalogId {
        let created = self
            .admin
            .create_role(
                &operator(),
                CreateCatalogEntryInput {
                    name: name.to_owned(),
                    description: None,
                },
            )
            .await;
        match created {
            Ok(role) => role.role_id,
            Err(error) => panic!("creating role {name} failed: {error}"),
        }
    }

    async fn grant(
        &self,
        role_id: CatalogId,
        module_name: &str,
        level: PermissionLevel,
    ) -> CatalogId {
        let created = self
            .admin
            .create_role_permission(
                &operator(),
                CreateRolePermissionInput {
                    role_id: Some(role_id.to_string()),
                    module_id: self.modules.get(module_name).map(ToString::to_string),
                    permission_id: self.permissions.get(&level).map(ToString::to_string),
                },
            )
            .await;
        match created {
            Ok(mapping) => mapping.mapping_id,
            Err(error) => panic!("granting {module_name} failed: {error}"),
        }
    }

    async fn assign(&self, user_id: &str, role_id: CatalogId) -> CatalogId {
        let created = self
            .admin
            .assign_user_role(
                &operator(),
                AssignUserRoleInput {
                    user_id: Some(user_id.to_owned()),
                    role_id: Some(role_id.to_string()),
                },
            )
            .await;
        match created {
            Ok(assignment) => assignment.user_role_id,
            Err(error) => panic!("assigning role to {user_id} failed: {error}"),
        }
    }

    async fn visible_names(&self, caller: &CallerIdentity) -> Vec<String> {
        self.authorization
            .visible_modules(caller)
            .await
            .into_iter()
            .map(|module| module.module_name)
            .collect()
    }
}

#[tokio::test]
async fn read_write_mapping_grants_both_levels_on_its_module_only() {
    let catalog = seeded_catalog().await;
    let role_id = catalog.role("FO_USER").await;
    catalog
        .grant(role_id, "OrderEntry", PermissionLevel::ReadWrite)
        .await;
    catalog.assign("U", role_id).await;

    let user = standard("U");
    assert!(catalog.authorization.authorize(&user, "OrderEntry", "READ_WRITE").await);
    assert!(catalog.authorization.authorize(&user, "OrderEntry", "READ").await);
    assert!(!catalog.authorization.authorize(&user, "Security", "READ").await);
}

#[tokio::test]
async fn sentinel_read_mapping_grants_read_everywhere_but_no_writes() {
    let catalog = seeded_catalog().await;
    let role_id = catalog.role("BO_USER").await;
    catalog
        .grant(role_id, ALL_MODULES_SENTINEL, PermissionLevel::Read)
        .await;
    catalog.assign("V", role_id).await;

    let user = standard("V");
    assert!(catalog.authorization.authorize(&user, "Accounting", "READ").await);
    assert!(!catalog.authorization.authorize(&user, "Accounting", "READ_WRITE").await);
}

#[tokio::test]
async fn visible_modules_follow_declaration_order() {
    let catalog = seeded_catalog().await;
    let role_id = catalog.role("DESK").await;
    catalog.grant(role_id, "Trade", PermissionLevel::Read).await;
    catalog
        .grant(role_id, "OrderEntry", PermissionLevel::ReadWrite)
        .await;
    catalog.assign("W", role_id).await;

    assert_eq!(
        catalog.visible_names(&standard("W")).await,
        vec!["OrderEntry".to_owned(), "Trade".to_owned()]
    );
}

#[tokio::test]
async fn admin_and_viewer_visibility_never_include_the_sentinel() {
    let catalog = seeded_catalog().await;

    let admin_view = catalog.visible_names(&operator()).await;
    let viewer_view = catalog
        .visible_names(&CallerIdentity::new("viewer", RoleTag::Viewer))
        .await;

    assert_eq!(admin_view, DEFAULT_MODULES.to_vec());
    assert!(!viewer_view.contains(&"Security".to_owned()));
    assert!(!viewer_view.contains(&ALL_MODULES_SENTINEL.to_owned()));
    assert_eq!(viewer_view.len(), DEFAULT_MODULES.len() - 1);
}

#[tokio::test]
async fn missing_module_id_leaves_mappings_unchanged() {
    let catalog = seeded_catalog().await;
    let role_id = catalog.role("FO_USER").await;
    catalog
        .grant(role_id, "OrderEntry", PermissionLevel::Read)
        .await;
    let Ok(before) = catalog.store.list_role_permissions().await else {
        panic!("listing mappings before the rejected grant failed");
    };

    let result = catalog
        .admin
        .create_role_permission(
            &operator(),
            CreateRolePermissionInput {
                role_id: Some(role_id.to_string()),
                module_id: None,
                permission_id: catalog
                    .permissions
                    .get(&PermissionLevel::Read)
                    .map(ToString::to_string),
            },
        )
        .await;

    let Ok(after) = catalog.store.list_role_permissions().await else {
        panic!("listing mappings after the rejected grant failed");
    };
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(before.len(), 1);
    assert_eq!(after, before);
}

#[tokio::test]
async fn grants_from_every_assigned_role_are_combined() {
    let catalog = seeded_catalog().await;
    let reader = catalog.role("READER").await;
    let writer = catalog.role("WRITER").await;
    catalog.grant(reader, "Trade", PermissionLevel::Read).await;
    catalog
        .grant(writer, "Settlements", PermissionLevel::ReadWrite)
        .await;
    catalog.assign("U", reader).await;
    let writer_assignment = catalog.assign("U", writer).await;

    let user = standard("U");
    assert!(catalog.authorization.authorize(&user, "Trade", "READ").await);
    assert!(catalog.authorization.authorize(&user, "Settlements", "READ_WRITE").await);

    let deleted = catalog
        .admin
        .delete_user_role(&operator(), &writer_assignment.to_string(), true)
        .await;
    assert!(deleted.is_ok());
    assert!(catalog.authorization.authorize(&user, "Trade", "READ").await);
    assert!(!catalog.authorization.authorize(&user, "Settlements", "READ").await);
}

#[tokio::test]
async fn inactive_rows_never_grant() {
    let catalog = seeded_catalog().await;
    let role_id = catalog.role("DESK").await;
    let mapping_id = catalog.grant(role_id, "Trade", PermissionLevel::Read).await;
    catalog.assign("U", role_id).await;
    let user = standard("U");
    let trade_id = catalog.modules.get("Trade").copied().unwrap_or_default();
    let read_id = catalog
        .permissions
        .get(&PermissionLevel::Read)
        .copied()
        .unwrap_or_default();

    let toggles = [
        (CatalogEntryKind::Role, role_id),
        (CatalogEntryKind::Module, trade_id),
        (CatalogEntryKind::Permission, read_id),
        (CatalogEntryKind::RolePermission, mapping_id),
    ];
    for (kind, id) in toggles {
        assert!(catalog.authorization.authorize(&user, "Trade", "READ").await);

        let deactivated = catalog
            .store
            .set_status(kind, id, CatalogStatus::Inactive)
            .await;
        assert!(deactivated.is_ok());
        assert!(
            !catalog.authorization.authorize(&user, "Trade", "READ").await,
            "inactive {} still granted access",
            kind.as_str()
        );

        let reactivated = catalog
            .store
            .set_status(kind, id, CatalogStatus::Active)
            .await;
        assert!(reactivated.is_ok());
    }
}

#[tokio::test]
async fn soft_deleted_role_stays_listed_and_recreated_mapping_reactivates() {
    let catalog = seeded_catalog().await;
    let role_id = catalog.role("DESK").await;
    let mapping_id = catalog.grant(role_id, "Trade", PermissionLevel::Read).await;

    let deleted_mapping = catalog
        .admin
        .delete_role_permission(&operator(), &mapping_id.to_string(), true)
        .await;
    let deleted_role = catalog
        .admin
        .delete_role(&operator(), &role_id.to_string(), true)
        .await;
    assert!(deleted_mapping.is_ok());
    assert!(deleted_role.is_ok());

    let roles = catalog.admin.list_roles(&operator()).await.unwrap_or_default();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].status, CatalogStatus::Inactive);

    let recreated = catalog.grant(role_id, "Trade", PermissionLevel::Read).await;
    let mappings = catalog
        .admin
        .list_role_permissions(&operator())
        .await
        .unwrap_or_default();
    assert_eq!(recreated, mapping_id);
    assert_eq!(mappings.len(), 1);
    assert_eq!(mappings[0].status, CatalogStatus::Active);
}

#[tokio::test]
async fn repeated_active_assignment_reports_no_change() {
    let catalog = seeded_catalog().await;
    let role_id = catalog.role("DESK").await;
    let user_role_id = catalog.assign("U", role_id).await;
    let Ok(user_id) = NonEmptyString::new("U") else {
        panic!("user id should be non-empty");
    };

    let repeated = catalog
        .store
        .assign_user_role(NewUserRole {
            user_id: user_id.clone(),
            role_id,
        })
        .await;
    assert_eq!(
        repeated
            .ok()
            .map(|write| (write.entry.user_role_id, write.changed)),
        Some((user_role_id, false))
    );

    let deactivated = catalog
        .store
        .set_status(CatalogEntryKind::UserRole, user_role_id, CatalogStatus::Inactive)
        .await;
    assert!(deactivated.is_ok());
    let reactivated = catalog
        .store
        .assign_user_role(NewUserRole { user_id, role_id })
        .await;
    assert_eq!(
        reactivated
            .ok()
            .map(|write| (write.entry.user_role_id, write.entry.status, write.changed)),
        Some((user_role_id, CatalogStatus::Active, true))
    );
}

#[tokio::test]
async fn duplicate_names_conflict() {
    let catalog = seeded_catalog().await;
    catalog.role("DESK").await;

    let duplicate_role = catalog
        .admin
        .create_role(
            &operator(),
            CreateCatalogEntryInput {
                name: " DESK ".to_owned(),
                description: None,
            },
        )
        .await;
    let duplicate_module = catalog
        .admin
        .create_module(
            &operator(),
            CreateCatalogEntryInput {
                name: "Trade".to_owned(),
                description: None,
            },
        )
        .await;
    let duplicate_permission = catalog
        .admin
        .create_permission(
            &operator(),
            CreatePermissionInput {
                permission_name: "READ".to_owned(),
                description: None,
            },
        )
        .await;

    assert!(matches!(duplicate_role, Err(AppError::Conflict(_))));
    assert!(matches!(duplicate_module, Err(AppError::Conflict(_))));
    assert!(matches!(duplicate_permission, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn mapping_unknown_rows_is_not_found() {
    let catalog = seeded_catalog().await;
    let role_id = catalog.role("DESK").await;

    let result = catalog
        .admin
        .create_role_permission(
            &operator(),
            CreateRolePermissionInput {
                role_id: Some(role_id.to_string()),
                module_id: Some(CatalogId::new().to_string()),
                permission_id: catalog
                    .permissions
                    .get(&PermissionLevel::Read)
                    .map(ToString::to_string),
            },
        )
        .await;
    let status = catalog
        .store
        .set_status(CatalogEntryKind::Role, CatalogId::new(), CatalogStatus::Inactive)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert!(matches!(status, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn security_writers_administer_and_are_audited() {
    let catalog = seeded_catalog().await;
    let security_admin = catalog.role("SECURITY_ADMIN").await;
    catalog
        .grant(security_admin, "Security", PermissionLevel::ReadWrite)
        .await;
    catalog.assign("sec", security_admin).await;

    let created = catalog
        .admin
        .create_role(
            &standard("sec"),
            CreateCatalogEntryInput {
                name: "MO_USER".to_owned(),
                description: Some("middle office".to_owned()),
            },
        )
        .await;
    let forbidden = catalog
        .admin
        .create_role(
            &standard("nobody"),
            CreateCatalogEntryInput {
                name: "ROGUE".to_owned(),
                description: None,
            },
        )
        .await;
    assert!(created.is_ok());
    assert!(matches!(forbidden, Err(AppError::Forbidden(_))));

    let entries = catalog
        .admin
        .list_audit_log(
            &standard("sec"),
            AuditLogQuery {
                limit: 10,
                offset: 0,
                action: None,
                subject: Some("sec".to_owned()),
            },
        )
        .await
        .unwrap_or_default();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].action, "catalog.role.created");
}
