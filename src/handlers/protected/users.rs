use std::sync::Arc;

use axum::{extract::State, Extension};

use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /api/users - All users, admin only
pub async fn list(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
) -> ApiResult<Vec<User>> {
    if !user.role.can_manage_users() {
        return Err(ApiError::forbidden("Administrator access required"));
    }

    let users = User::find_all(&state.db).await?;

    Ok(ApiResponse::success(users))
}
