use crate::{AuditLogEntry, AuditLogQuery};

use super::*;

impl CatalogAdminService {
    /// Returns recent audit entries, newest first.
    pub async fn list_audit_log(
        &self,
        actor: &CallerIdentity,
        query: AuditLogQuery,
    ) -> AppResult<Vec<AuditLogEntry>> {
        self.authorization_service
            .require_access(actor, SECURITY_MODULE, PermissionLevel::Read)
            .await?;

        self.audit_log_repository.list_recent_entries(query).await
    }
}
