use modgate_application::CreateCatalogEntryInput;

use super::*;

pub async fn list_roles_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let roles = state
        .catalog_admin_service
        .list_roles(&caller)
        .await?
        .into_iter()
        .map(RoleResponse::from)
        .collect();

    Ok(Json(roles))
}

pub async fn create_role_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Json(payload): Json<CreateRoleRequest>,
) -> ApiResult<(StatusCode, Json<RoleResponse>)> {
    let role = state
        .catalog_admin_service
        .create_role(
            &caller,
            CreateCatalogEntryInput {
                name: payload.role_name,
                description: payload.description,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(RoleResponse::from(role))))
}

pub async fn delete_role_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(role_id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<StatusCode> {
    state
        .catalog_admin_service
        .delete_role(&caller, role_id.as_str(), query.confirm)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_role_status_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(role_id): Path<String>,
    Json(payload): Json<UpdateCatalogStatusRequest>,
) -> ApiResult<StatusCode> {
    update_status(
        &state,
        &caller,
        CatalogEntryKind::Role,
        role_id.as_str(),
        payload,
    )
    .await
}
