use std::sync::Arc;

use modgate_core::{AppError, AppResult, CallerIdentity};
use modgate_domain::{AuditAction, CatalogEntryKind, PermissionLevel, SECURITY_MODULE};
use tracing::warn;

use crate::{AuditEvent, AuditLogRepository, AuditRepository, AuthorizationService, CatalogRepository};

mod assignments;
mod audit;
mod lifecycle;
mod mappings;
mod modules;
mod permissions;
mod roles;


/// Application service for catalog administration workflows.
///
/// Every operation is gated by `READ_WRITE` on the security module, audit
/// listing by `READ`. Validation runs before the repository is touched.
#[derive(Clone)]
pub struct CatalogAdminService {
    authorization_service: AuthorizationService,
    repository: Arc<dyn CatalogRepository>,
    audit_log_repository: Arc<dyn AuditLogRepository>,
    audit_repository: Arc<dyn AuditRepository>,
}

impl CatalogAdminService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        authorization_service: AuthorizationService,
        repository: Arc<dyn CatalogRepository>,
        audit_log_repository: Arc<dyn AuditLogRepository>,
        audit_repository: Arc<dyn AuditRepository>,
    ) -> Self {
        Self {
            authorization_service,
            repository,
            audit_log_repository,
            audit_repository,
        }
    }

    async fn require_catalog_manage(&self, actor: &CallerIdentity) -> AppResult<()> {
        self.authorization_service
            .require_access(actor, SECURITY_MODULE, PermissionLevel::ReadWrite)
            .await
    }

    async fn record_event(
        &self,
        actor: &CallerIdentity,
        action: AuditAction,
        kind: CatalogEntryKind,
        resource_id: String,
        detail: String,
    ) {
        let event = AuditEvent {
            subject: actor.user_id().to_owned(),
            action,
            resource_type: kind.as_str().to_owned(),
            resource_id,
            detail: Some(detail),
        };

        // The mutation is already committed at this point.
        if let Err(error) = self.audit_repository.append_event(event).await {
            warn!(
                subject = actor.user_id(),
                action = action.as_str(),
                %error,
                "failed to append catalog audit event"
            );
        }
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn require_confirmation(confirmed: bool, kind: CatalogEntryKind) -> AppResult<()> {
    if confirmed {
        return Ok(());
    }

    Err(AppError::Validation(format!(
        "deleting a {} requires explicit confirmation",
        kind.as_str()
    )))
}
