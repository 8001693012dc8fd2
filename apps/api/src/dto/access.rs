use modgate_application::ModuleDefinition;
use modgate_domain::ModuleGrant;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One (module, permission) pair in a batched decision request.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-check-request.ts"
)]
pub struct AccessCheckRequest {
    pub module: String,
    pub permission: String,
}

/// Incoming payload for batched decisions.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/check-batch-request.ts"
)]
pub struct CheckBatchRequest {
    pub checks: Vec<AccessCheckRequest>,
}

/// Single decision answer.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/check-permission-response.ts"
)]
pub struct CheckPermissionResponse {
    pub module: String,
    pub permission: String,
    pub has_permission: bool,
}

/// One decision within a batch, echoed back with its request pair.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/access-check-result-response.ts"
)]
pub struct AccessCheckResultResponse {
    pub module: String,
    pub permission: String,
    pub has_permission: bool,
}

/// Batched decisions in request order.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/check-batch-response.ts"
)]
pub struct CheckBatchResponse {
    pub results: Vec<AccessCheckResultResponse>,
}

/// Navigation entry for one visible module.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/visible-module-response.ts"
)]
pub struct VisibleModuleResponse {
    pub module_id: String,
    pub module_name: String,
    pub description: Option<String>,
}

/// Visible modules in declaration order plus the module to keep selected.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/visible-modules-response.ts"
)]
pub struct VisibleModulesResponse {
    pub modules: Vec<VisibleModuleResponse>,
    pub active_module: Option<String>,
}

/// One effective grant.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/module-grant-response.ts"
)]
pub struct ModuleGrantResponse {
    pub module_name: String,
    pub permission: String,
}

/// Effective grants of the calling user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/effective-grants-response.ts"
)]
pub struct EffectiveGrantsResponse {
    pub user_id: String,
    pub role_tag: String,
    pub grants: Vec<ModuleGrantResponse>,
}

impl From<ModuleDefinition> for VisibleModuleResponse {
    fn from(value: ModuleDefinition) -> Self {
        Self {
            module_id: value.module_id.to_string(),
            module_name: value.module_name,
            description: value.description,
        }
    }
}

impl From<ModuleGrant> for ModuleGrantResponse {
    fn from(value: ModuleGrant) -> Self {
        Self {
            module_name: value.module_name().to_owned(),
            permission: value.level().as_str().to_owned(),
        }
    }
}
