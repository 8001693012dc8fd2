use modgate_application::CreatePermissionInput;

use super::*;

pub async fn list_permissions_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<Json<Vec<PermissionResponse>>> {
    let permissions = state
        .catalog_admin_service
        .list_permissions(&caller)
        .await?
        .into_iter()
        .map(PermissionResponse::from)
        .collect();

    Ok(Json(permissions))
}

pub async fn create_permission_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Json(payload): Json<CreatePermissionRequest>,
) -> ApiResult<(StatusCode, Json<PermissionResponse>)> {
    let permission = state
        .catalog_admin_service
        .create_permission(
            &caller,
            CreatePermissionInput {
                permission_name: payload.permission_name,
                description: payload.description,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(PermissionResponse::from(permission))))
}

pub async fn delete_permission_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(permission_id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<StatusCode> {
    state
        .catalog_admin_service
        .delete_permission(&caller, permission_id.as_str(), query.confirm)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_permission_status_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(permission_id): Path<String>,
    Json(payload): Json<UpdateCatalogStatusRequest>,
) -> ApiResult<StatusCode> {
    update_status(
        &state,
        &caller,
        CatalogEntryKind::Permission,
        permission_id.as_str(),
        payload,
    )
    .await
}
