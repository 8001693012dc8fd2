use std::str::FromStr;

use modgate_core::{AppError, RoleTag};
use modgate_domain::{PermissionLevel, evaluate_access};

use crate::authorization_ports::AccessCheck;

use super::*;

impl AuthorizationService {
    /// Returns whether the caller holds a named permission on a module.
    ///
    /// Unknown module or permission names simply evaluate to `false`.
    pub async fn authorize(
        &self,
        caller: &CallerIdentity,
        module_name: &str,
        permission: &str,
    ) -> bool {
        match PermissionLevel::from_str(permission) {
            Ok(level) => self.authorize_level(caller, module_name, level).await,
            Err(_) => caller.role_tag() == RoleTag::Admin,
        }
    }

    /// Returns whether the caller holds `level` on a module.
    pub async fn authorize_level(
        &self,
        caller: &CallerIdentity,
        module_name: &str,
        level: PermissionLevel,
    ) -> bool {
        if caller.role_tag() == RoleTag::Admin {
            return true;
        }

        match self.load_grants(caller.user_id()).await {
            Ok(grants) => evaluate_access(caller.role_tag(), &grants, module_name, level),
            Err(error) => {
                warn!(
                    user_id = caller.user_id(),
                    module_name,
                    permission = level.as_str(),
                    %error,
                    "denying access because grants could not be loaded"
                );
                false
            }
        }
    }

    /// Evaluates several checks against a single catalog read.
    ///
    /// Results are returned in request order. A store failure denies every
    /// check.
    pub async fn authorize_many(&self, caller: &CallerIdentity, checks: &[AccessCheck]) -> Vec<bool> {
        if caller.role_tag() == RoleTag::Admin {
            return vec![true; checks.len()];
        }

        let grants = match self.load_grants(caller.user_id()).await {
            Ok(grants) => grants,
            Err(error) => {
                warn!(
                    user_id = caller.user_id(),
                    checks = checks.len(),
                    %error,
                    "denying batch because grants could not be loaded"
                );
                return vec![false; checks.len()];
            }
        };

        checks
            .iter()
            .map(|check| {
                PermissionLevel::from_str(check.permission.as_str())
                    .map(|level| {
                        evaluate_access(
                            caller.role_tag(),
                            &grants,
                            check.module_name.as_str(),
                            level,
                        )
                    })
                    .unwrap_or(false)
            })
            .collect()
    }

    /// Ensures the caller holds `level` on a module.
    ///
    /// Missing grants fail with `Forbidden`; an unreachable store fails with
    /// the store error so callers can tell the two denials apart.
    pub async fn require_access(
        &self,
        caller: &CallerIdentity,
        module_name: &str,
        level: PermissionLevel,
    ) -> AppResult<()> {
        if caller.role_tag() == RoleTag::Admin {
            return Ok(());
        }

        let grants = self.load_grants(caller.user_id()).await?;
        if evaluate_access(caller.role_tag(), &grants, module_name, level) {
            return Ok(());
        }

        Err(AppError::Forbidden(format!(
            "user '{}' is missing permission '{}' on module '{module_name}'",
            caller.user_id(),
            level.as_str()
        )))
    }
}
