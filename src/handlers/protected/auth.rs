use axum::Extension;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

/// GET /api/auth/me - Decoded claims identity for the caller
pub async fn me(Extension(user): Extension<AuthUser>) -> ApiResult<AuthUser> {
    Ok(ApiResponse::success(user))
}
