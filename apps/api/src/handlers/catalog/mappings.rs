use modgate_application::CreateRolePermissionInput;

use super::*;

pub async fn list_role_permissions_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<Json<Vec<RolePermissionResponse>>> {
    let mappings = state
        .catalog_admin_service
        .list_role_permissions(&caller)
        .await?
        .into_iter()
        .map(RolePermissionResponse::from)
        .collect();

    Ok(Json(mappings))
}

pub async fn create_role_permission_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Json(payload): Json<CreateRolePermissionRequest>,
) -> ApiResult<(StatusCode, Json<RolePermissionResponse>)> {
    let mapping = state
        .catalog_admin_service
        .create_role_permission(
            &caller,
            CreateRolePermissionInput {
                role_id: payload.role_id,
                module_id: payload.module_id,
                permission_id: payload.permission_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(RolePermissionResponse::from(mapping))))
}

pub async fn delete_role_permission_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(mapping_id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<StatusCode> {
    state
        .catalog_admin_service
        .delete_role_permission(&caller, mapping_id.as_str(), query.confirm)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
