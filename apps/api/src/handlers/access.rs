use axum::Json;
use axum::extract::{Extension, Query, State};
use modgate_application::AccessCheck;
use modgate_core::CallerIdentity;
use serde::Deserialize;

use crate::dto::{
    AccessCheckResultResponse, CheckBatchRequest, CheckBatchResponse, CheckPermissionResponse,
    EffectiveGrantsResponse, ModuleGrantResponse, VisibleModuleResponse, VisibleModulesResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CheckPermissionQuery {
    #[serde(default)]
    pub module: String,
    #[serde(default)]
    pub permission: String,
}

#[derive(Debug, Deserialize)]
pub struct VisibleModulesQuery {
    pub selected: Option<String>,
}

/// Answers one decision. Denials, including unknown names and an
/// unreachable catalog, are reported as `has_permission: false`.
pub async fn check_permission_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Query(query): Query<CheckPermissionQuery>,
) -> Json<CheckPermissionResponse> {
    let has_permission = state
        .authorization_service
        .authorize(&caller, query.module.as_str(), query.permission.as_str())
        .await;

    Json(CheckPermissionResponse {
        module: query.module,
        permission: query.permission,
        has_permission,
    })
}

pub async fn check_batch_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Json(payload): Json<CheckBatchRequest>,
) -> Json<CheckBatchResponse> {
    let checks: Vec<AccessCheck> = payload
        .checks
        .into_iter()
        .map(|check| AccessCheck::new(check.module, check.permission))
        .collect();

    let decisions = state
        .authorization_service
        .authorize_many(&caller, &checks)
        .await;

    let results = checks
        .into_iter()
        .zip(decisions)
        .map(|(check, has_permission)| AccessCheckResultResponse {
            module: check.module_name,
            permission: check.permission,
            has_permission,
        })
        .collect();

    Json(CheckBatchResponse { results })
}

pub async fn visible_modules_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
    Query(query): Query<VisibleModulesQuery>,
) -> Json<VisibleModulesResponse> {
    let (modules, active_module) = state
        .authorization_service
        .visible_modules_with_selection(&caller, query.selected.as_deref())
        .await;

    Json(VisibleModulesResponse {
        modules: modules.into_iter().map(VisibleModuleResponse::from).collect(),
        active_module: active_module.map(|module| module.module_name),
    })
}

pub async fn effective_grants_handler(
    State(state): State<AppState>,
    Extension(caller): Extension<CallerIdentity>,
) -> ApiResult<Json<EffectiveGrantsResponse>> {
    let grants = state
        .authorization_service
        .effective_grants(&caller)
        .await?
        .into_iter()
        .map(ModuleGrantResponse::from)
        .collect();

    Ok(Json(EffectiveGrantsResponse {
        user_id: caller.user_id().to_owned(),
        role_tag: caller.role_tag().as_str().to_owned(),
        grants,
    }))
}
