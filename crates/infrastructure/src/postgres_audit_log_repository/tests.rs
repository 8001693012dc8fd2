use modgate_application::{AuditEvent, AuditLogQuery, AuditLogRepository, AuditRepository};
use modgate_domain::AuditAction;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use super::PostgresAuditLogRepository;
use crate::PostgresAuditRepository;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

async fn test_pool() -> Option<PgPool> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        return None;
    };

    let pool = match PgPoolOptions::new()
        .max_connections(2)
        .connect(database_url.as_str())
        .await
    {
        Ok(pool) => pool,
        Err(error) => panic!("failed to connect to DATABASE_URL in test: {error}"),
    };

    if let Err(error) = MIGRATOR.run(&pool).await {
        panic!("failed to run migrations for postgres audit log tests: {error}");
    }

    Some(pool)
}

#[tokio::test]
async fn appended_events_are_listed_newest_first_and_filtered() {
    let Some(pool) = test_pool().await else {
        return;
    };

    let writer = PostgresAuditRepository::new(pool.clone());
    let reader = PostgresAuditLogRepository::new(pool.clone());
    let subject = format!("auditor-{}", Uuid::new_v4());

    for (action, resource_id) in [
        (AuditAction::CatalogRoleCreated, "role-1"),
        (AuditAction::CatalogEntryDeleted, "role-1"),
    ] {
        let appended = writer
            .append_event(AuditEvent {
                subject: subject.clone(),
                action,
                resource_type: "catalog_role".to_owned(),
                resource_id: resource_id.to_owned(),
                detail: None,
            })
            .await;
        assert!(appended.is_ok());
    }

    let backdated = sqlx::query(
        r#"
            UPDATE audit_log_entries
            SET created_at = now() - interval '1 day'
            WHERE subject = $1 AND action = $2
            "#,
    )
    .bind(subject.as_str())
    .bind(AuditAction::CatalogRoleCreated.as_str())
    .execute(&pool)
    .await;
    assert!(backdated.is_ok());

    let listed = reader
        .list_recent_entries(AuditLogQuery {
            limit: 10,
            offset: 0,
            action: None,
            subject: Some(subject.clone()),
        })
        .await
        .unwrap_or_default();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].action, "catalog.entry.deleted");

    let filtered = reader
        .list_recent_entries(AuditLogQuery {
            limit: 10,
            offset: 0,
            action: Some("catalog.role.created".to_owned()),
            subject: Some(subject),
        })
        .await
        .unwrap_or_default();
    assert_eq!(filtered.len(), 1);
    assert!(filtered[0].created_at.ends_with('Z'));
}
