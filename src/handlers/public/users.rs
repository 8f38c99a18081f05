use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde::Deserialize;
use serde_json::Value;

use crate::auth::password::hash_password;
use crate::database::models::User;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;
use crate::types::Role;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub email: String,
}

/// POST /api/users/create - Open user creation endpoint
///
/// Takes an arbitrary JSON body; shape errors and store-level
/// uniqueness violations both surface as 400 with the underlying
/// message. No authentication or role restriction.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> ApiResult<User> {
    let req: CreateUserRequest =
        serde_json::from_value(body).map_err(|e| ApiError::bad_request(e.to_string()))?;

    let password_hash = hash_password(&req.password)?;

    let user = User::create(&state.db, &req.username, &password_hash, req.role, &req.email)
        .await
        .map_err(|e| ApiError::bad_request(e.to_string()))?;

    Ok(ApiResponse::created(user))
}
