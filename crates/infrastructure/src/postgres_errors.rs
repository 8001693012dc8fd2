use modgate_core::AppError;

/// Maps a sqlx error onto the application taxonomy.
///
/// Connection-level failures surface as `Unavailable` so callers can tell an
/// unreachable store apart from a broken query.
pub(crate) fn map_store_error(error: sqlx::Error, context: &str) -> AppError {
    match error {
        sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => AppError::Unavailable(format!("{context}: {error}")),
        error => AppError::Internal(format!("{context}: {error}")),
    }
}

/// Maps unique violations to `Conflict`, everything else like
/// [`map_store_error`].
pub(crate) fn map_unique_violation(
    error: sqlx::Error,
    context: &str,
    conflict_message: impl FnOnce() -> String,
) -> AppError {
    if let sqlx::Error::Database(database_error) = &error
        && database_error.code().as_deref() == Some("23505")
    {
        return AppError::Conflict(conflict_message());
    }

    map_store_error(error, context)
}

#[cfg(test)]
mod tests {
    use modgate_core::AppError;

    use super::{map_store_error, map_unique_violation};

    #[test]
    fn pool_failures_are_unavailable() {
        assert!(matches!(
            map_store_error(sqlx::Error::PoolTimedOut, "failed to list roles"),
            AppError::Unavailable(_)
        ));
        assert!(matches!(
            map_store_error(sqlx::Error::PoolClosed, "failed to list roles"),
            AppError::Unavailable(_)
        ));
    }

    #[test]
    fn other_failures_are_internal() {
        let error = map_unique_violation(sqlx::Error::RowNotFound, "failed to create role", || {
            "role 'x' already exists".to_owned()
        });

        assert!(matches!(
            error,
            AppError::Internal(message) if message.starts_with("failed to create role")
        ));
    }
}
