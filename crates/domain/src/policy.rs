//! Pure access decisions over a caller's effective grants.
//!
//! Services load the grants reachable through a caller's active role
//! assignments and hand them to these functions; nothing here touches
//! storage, so every rule is evaluated against the catalog snapshot the
//! caller loaded.

use modgate_core::RoleTag;
use serde::{Deserialize, Serialize};

use crate::catalog::{ALL_MODULES_SENTINEL, PermissionLevel, SECURITY_MODULE};

/// One (module, level) grant reachable through an active role assignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ModuleGrant {
    module_name: String,
    level: PermissionLevel,
}

impl ModuleGrant {
    /// Creates a grant for a module name.
    #[must_use]
    pub fn new(module_name: impl Into<String>, level: PermissionLevel) -> Self {
        Self {
            module_name: module_name.into(),
            level,
        }
    }

    /// Returns the granted module name, possibly the `All` sentinel.
    #[must_use]
    pub fn module_name(&self) -> &str {
        self.module_name.as_str()
    }

    /// Returns the granted level.
    #[must_use]
    pub fn level(&self) -> PermissionLevel {
        self.level
    }

    fn covers(&self, module_name: &str, required: PermissionLevel) -> bool {
        (self.module_name == module_name || self.module_name == ALL_MODULES_SENTINEL)
            && self.level.satisfies(required)
    }
}

/// Decides whether a caller holds `required` on `module_name`.
///
/// Precedence: the `Admin` tag is granted unconditionally; otherwise a grant
/// on the module or on the `All` sentinel at a level that satisfies the
/// requirement (`READ_WRITE` satisfies `READ`) is needed.
#[must_use]
pub fn evaluate_access(
    role_tag: RoleTag,
    grants: &[ModuleGrant],
    module_name: &str,
    required: PermissionLevel,
) -> bool {
    if role_tag == RoleTag::Admin {
        return true;
    }

    grants.iter().any(|grant| grant.covers(module_name, required))
}

/// Decides whether a declared module belongs in the caller's navigation.
///
/// The sentinel is never navigable. `Viewer` sees every module but
/// `Security` regardless of grants.
#[must_use]
pub fn is_module_visible(role_tag: RoleTag, grants: &[ModuleGrant], module_name: &str) -> bool {
    if module_name == ALL_MODULES_SENTINEL {
        return false;
    }

    match role_tag {
        RoleTag::Admin => true,
        RoleTag::Viewer => module_name != SECURITY_MODULE,
        RoleTag::Standard => PermissionLevel::all()
            .iter()
            .any(|level| evaluate_access(role_tag, grants, module_name, *level)),
    }
}

/// Picks the module a consumer should keep selected after visibility changes.
///
/// Keeps the previous selection when still visible, otherwise falls back to
/// the first visible module.
pub fn resolve_active_selection<'a, T>(
    visible: &'a [T],
    previously_selected: Option<&str>,
    name_of: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    previously_selected
        .and_then(|selected| visible.iter().find(|module| name_of(*module) == selected))
        .or_else(|| visible.first())
}

#[cfg(test)]
mod tests {
    use modgate_core::RoleTag;
    use proptest::prelude::*;

    use crate::catalog::{ALL_MODULES_SENTINEL, DEFAULT_MODULES, PermissionLevel};

    use super::{ModuleGrant, evaluate_access, is_module_visible, resolve_active_selection};

    fn module_name_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            (0..DEFAULT_MODULES.len()).prop_map(|index| DEFAULT_MODULES[index].to_owned()),
            Just(ALL_MODULES_SENTINEL.to_owned()),
            Just("Unknown".to_owned()),
        ]
    }

    fn level_strategy() -> impl Strategy<Value = PermissionLevel> {
        prop_oneof![Just(PermissionLevel::Read), Just(PermissionLevel::ReadWrite)]
    }

    fn grants_strategy() -> impl Strategy<Value = Vec<ModuleGrant>> {
        prop::collection::vec(
            (module_name_strategy(), level_strategy())
                .prop_map(|(module_name, level)| ModuleGrant::new(module_name, level)),
            0..8,
        )
    }

    proptest! {
        #[test]
        fn read_write_access_implies_read_access(
            grants in grants_strategy(),
            module_name in module_name_strategy(),
        ) {
            let read_write = evaluate_access(
                RoleTag::Standard,
                &grants,
                &module_name,
                PermissionLevel::ReadWrite,
            );
            let read = evaluate_access(RoleTag::Standard, &grants, &module_name, PermissionLevel::Read);
            prop_assert!(!read_write || read);
        }

        #[test]
        fn admin_is_granted_everything(
            grants in grants_strategy(),
            module_name in module_name_strategy(),
            level in level_strategy(),
        ) {
            prop_assert!(evaluate_access(RoleTag::Admin, &grants, &module_name, level));
        }

        #[test]
        fn viewer_visibility_ignores_grants(grants in grants_strategy()) {
            for module_name in DEFAULT_MODULES {
                let visible = is_module_visible(RoleTag::Viewer, &grants, module_name);
                prop_assert_eq!(visible, *module_name != "Security");
            }
        }

        #[test]
        fn adding_a_grant_never_revokes_access(
            grants in grants_strategy(),
            extra_module in module_name_strategy(),
            extra_level in level_strategy(),
            module_name in module_name_strategy(),
            level in level_strategy(),
        ) {
            let before = evaluate_access(RoleTag::Standard, &grants, &module_name, level);
            let mut extended = grants.clone();
            extended.push(ModuleGrant::new(extra_module, extra_level));
            let after = evaluate_access(RoleTag::Standard, &extended, &module_name, level);
            prop_assert!(!before || after);
        }
    }

    #[test]
    fn standard_caller_without_grants_is_denied() {
        assert!(!evaluate_access(
            RoleTag::Standard,
            &[],
            "OrderEntry",
            PermissionLevel::Read
        ));
    }

    #[test]
    fn read_grant_does_not_satisfy_read_write() {
        let grants = vec![ModuleGrant::new("Trade", PermissionLevel::Read)];
        assert!(evaluate_access(
            RoleTag::Standard,
            &grants,
            "Trade",
            PermissionLevel::Read
        ));
        assert!(!evaluate_access(
            RoleTag::Standard,
            &grants,
            "Trade",
            PermissionLevel::ReadWrite
        ));
    }

    #[test]
    fn sentinel_read_grant_covers_every_module_for_read_only() {
        let grants = vec![ModuleGrant::new(ALL_MODULES_SENTINEL, PermissionLevel::Read)];
        assert!(evaluate_access(
            RoleTag::Standard,
            &grants,
            "Accounting",
            PermissionLevel::Read
        ));
        assert!(!evaluate_access(
            RoleTag::Standard,
            &grants,
            "Accounting",
            PermissionLevel::ReadWrite
        ));
    }

    #[test]
    fn viewer_is_still_evaluated_against_catalog_for_decisions() {
        assert!(!evaluate_access(
            RoleTag::Viewer,
            &[],
            "Trade",
            PermissionLevel::Read
        ));
    }

    #[test]
    fn sentinel_is_never_visible() {
        assert!(!is_module_visible(RoleTag::Admin, &[], ALL_MODULES_SENTINEL));
    }

    #[test]
    fn active_selection_falls_back_to_first_visible_module() {
        let visible = vec!["OrderEntry".to_owned(), "Trade".to_owned()];

        let kept = resolve_active_selection(&visible, Some("Trade"), String::as_str);
        assert_eq!(kept.map(String::as_str), Some("Trade"));

        let fallback = resolve_active_selection(&visible, Some("Security"), String::as_str);
        assert_eq!(fallback.map(String::as_str), Some("OrderEntry"));

        let empty: Vec<String> = Vec::new();
        assert!(resolve_active_selection(&empty, Some("Trade"), String::as_str).is_none());
    }
}
