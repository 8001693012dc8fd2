use axum::extract::Request;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use modgate_core::{AppError, CallerIdentity, RoleTag};

use crate::error::ApiResult;

/// Header carrying the external user id set by the upstream gateway.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Header carrying the caller's coarse role tag.
pub const ROLE_TAG_HEADER: &str = "x-role-tag";

/// Resolves the trusted caller identity and stores it as a request extension.
pub async fn require_caller(mut request: Request, next: Next) -> ApiResult<Response> {
    let identity = caller_from_headers(request.headers())?;

    request.extensions_mut().insert(identity);
    Ok(next.run(request).await)
}

fn caller_from_headers(headers: &HeaderMap) -> Result<CallerIdentity, AppError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Unauthorized(format!("{USER_ID_HEADER} header is required")))?;

    let role_tag = RoleTag::from_transport(
        headers
            .get(ROLE_TAG_HEADER)
            .and_then(|value| value.to_str().ok()),
    );

    Ok(CallerIdentity::new(user_id, role_tag))
}
