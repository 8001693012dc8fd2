use axum::Router;
use axum::middleware::from_fn;
use axum::routing::{delete, get, post, put};
use modgate_core::AppError;
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{handlers, middleware};

mod cors;


pub fn build_router(app_state: AppState, frontend_url: &str) -> Result<Router, AppError> {
    let access_routes = Router::new()
        .route(
            "/api/access/check",
            get(handlers::access::check_permission_handler),
        )
        .route(
            "/api/access/check-batch",
            post(handlers::access::check_batch_handler),
        )
        .route(
            "/api/access/visible-modules",
            get(handlers::access::visible_modules_handler),
        )
        .route(
            "/api/access/grants",
            get(handlers::access::effective_grants_handler),
        );

    let catalog_routes = Router::new()
        .route(
            "/api/catalog/roles",
            get(handlers::catalog::list_roles_handler).post(handlers::catalog::create_role_handler),
        )
        .route(
            "/api/catalog/roles/{role_id}",
            delete(handlers::catalog::delete_role_handler),
        )
        .route(
            "/api/catalog/roles/{role_id}/status",
            put(handlers::catalog::update_role_status_handler),
        )
        .route(
            "/api/catalog/permissions",
            get(handlers::catalog::list_permissions_handler)
                .post(handlers::catalog::create_permission_handler),
        )
        .route(
            "/api/catalog/permissions/{permission_id}",
            delete(handlers::catalog::delete_permission_handler),
        )
        .route(
            "/api/catalog/permissions/{permission_id}/status",
            put(handlers::catalog::update_permission_status_handler),
        )
        .route(
            "/api/catalog/modules",
            get(handlers::catalog::list_modules_handler)
                .post(handlers::catalog::create_module_handler),
        )
        .route(
            "/api/catalog/modules/mappable",
            get(handlers::catalog::list_mappable_modules_handler),
        )
        .route(
            "/api/catalog/modules/{module_id}",
            delete(handlers::catalog::delete_module_handler),
        )
        .route(
            "/api/catalog/modules/{module_id}/status",
            put(handlers::catalog::update_module_status_handler),
        )
        .route(
            "/api/catalog/role-permissions",
            get(handlers::catalog::list_role_permissions_handler)
                .post(handlers::catalog::create_role_permission_handler),
        )
        .route(
            "/api/catalog/role-permissions/{mapping_id}",
            delete(handlers::catalog::delete_role_permission_handler),
        )
        .route(
            "/api/catalog/user-roles",
            get(handlers::catalog::list_user_roles_handler)
                .post(handlers::catalog::assign_user_role_handler),
        )
        .route(
            "/api/catalog/user-roles/{user_role_id}",
            delete(handlers::catalog::delete_user_role_handler),
        )
        .route(
            "/api/catalog/audit-log",
            get(handlers::catalog::list_audit_log_handler),
        );

    let protected_routes = Router::new()
        .merge(access_routes)
        .merge(catalog_routes)
        .route_layer(from_fn(middleware::require_caller));

    Ok(Router::new()
        .route("/health", get(handlers::health::health_handler))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors::build_cors_layer(frontend_url)?)
        .with_state(app_state))
}
