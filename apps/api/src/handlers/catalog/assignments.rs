use modgate_application::AssignUserRoleInput;

use super::*;

#[derive(Debug, Deserialize)]
pub struct UserRolesQuery {
    pub user_id: Option<String>,
}

pub async fn list_user_roles_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Query(query): Query<UserRolesQuery>,
) -> ApiResult<Json<Vec<UserRoleResponse>>> {
    let assignments = state
        .catalog_admin_service
        .list_user_roles(&caller, query.user_id.as_deref())
        .await?
        .into_iter()
        .map(UserRoleResponse::from)
        .collect();

    Ok(Json(assignments))
}

pub async fn assign_user_role_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Json(payload): Json<AssignUserRoleRequest>,
) -> ApiResult<(StatusCode, Json<UserRoleResponse>)> {
    let assignment = state
        .catalog_admin_service
        .assign_user_role(
            &caller,
            AssignUserRoleInput {
                user_id: payload.user_id,
                role_id: payload.role_id,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(UserRoleResponse::from(assignment))))
}

pub async fn delete_user_role_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(user_role_id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<StatusCode> {
    state
        .catalog_admin_service
        .delete_user_role(&caller, user_role_id.as_str(), query.confirm)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
