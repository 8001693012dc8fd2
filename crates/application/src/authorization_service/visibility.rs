use modgate_core::RoleTag;
use modgate_domain::{is_module_visible, resolve_active_selection};

use crate::catalog_ports::ModuleDefinition;

use super::*;

impl AuthorizationService {
    /// Returns the declared modules the caller may navigate to, in catalog
    /// declaration order.
    ///
    /// `Admin` and `Viewer` callers are resolved from their role tag alone;
    /// any other caller sees the modules it can at least read. A store
    /// failure yields an empty list.
    pub async fn visible_modules(&self, caller: &CallerIdentity) -> Vec<ModuleDefinition> {
        let declared_modules = match self.repository.list_declared_modules().await {
            Ok(modules) => modules,
            Err(error) => {
                warn!(
                    user_id = caller.user_id(),
                    %error,
                    "hiding every module because the catalog could not be read"
                );
                return Vec::new();
            }
        };

        let grants = match caller.role_tag() {
            RoleTag::Admin | RoleTag::Viewer => Vec::new(),
            RoleTag::Standard => match self.load_grants(caller.user_id()).await {
                Ok(grants) => grants,
                Err(error) => {
                    warn!(
                        user_id = caller.user_id(),
                        %error,
                        "hiding every module because grants could not be loaded"
                    );
                    return Vec::new();
                }
            },
        };

        declared_modules
            .into_iter()
            .filter(|module| {
                module.status.is_active()
                    && is_module_visible(caller.role_tag(), &grants, module.module_name.as_str())
            })
            .collect()
    }

    /// Resolves visible modules together with the module that should stay
    /// selected given a previous selection.
    pub async fn visible_modules_with_selection(
        &self,
        caller: &CallerIdentity,
        previously_selected: Option<&str>,
    ) -> (Vec<ModuleDefinition>, Option<ModuleDefinition>) {
        let modules = self.visible_modules(caller).await;
        let active = resolve_active_selection(&modules, previously_selected, |module| {
            module.module_name.as_str()
        })
        .cloned();

        (modules, active)
    }
}
