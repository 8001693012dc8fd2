use modgate_application::CreateCatalogEntryInput;

use super::*;

pub async fn list_modules_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<Json<Vec<ModuleResponse>>> {
    let modules = state
        .catalog_admin_service
        .list_modules(&caller)
        .await?
        .into_iter()
        .map(ModuleResponse::from)
        .collect();

    Ok(Json(modules))
}

pub async fn list_mappable_modules_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<Json<Vec<ModuleResponse>>> {
    let modules = state
        .catalog_admin_service
        .list_mappable_modules(&caller)
        .await?
        .into_iter()
        .map(ModuleResponse::from)
        .collect();

    Ok(Json(modules))
}

pub async fn create_module_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Json(payload): Json<CreateModuleRequest>,
) -> ApiResult<(StatusCode, Json<ModuleResponse>)> {
    let module = state
        .catalog_admin_service
        .create_module(
            &caller,
            CreateCatalogEntryInput {
                name: payload.module_name,
                description: payload.description,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(ModuleResponse::from(module))))
}

pub async fn delete_module_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(module_id): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> ApiResult<StatusCode> {
    state
        .catalog_admin_service
        .delete_module(&caller, module_id.as_str(), query.confirm)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn update_module_status_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Path(module_id): Path<String>,
    Json(payload): Json<UpdateCatalogStatusRequest>,
) -> ApiResult<StatusCode> {
    update_status(
        &state,
        &caller,
        CatalogEntryKind::Module,
        module_id.as_str(),
        payload,
    )
    .await
}
