use std::sync::Arc;

use axum::{extract::State, response::Json};
use serde_json::{json, Value};

use crate::auth::password::verify_password;
use crate::auth::{generate_jwt, Claims};
use crate::database::models::User;
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/auth/login - Authenticate user and receive a bearer token
///
/// Expects `{"username": ..., "password": ...}`; missing fields fail
/// before any store access. On success the token embeds id, username
/// and role with the configured expiry.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let username = credentials.get("username").and_then(Value::as_str);
    let password = credentials.get("password").and_then(Value::as_str);

    let (Some(username), Some(password)) = (username, password) else {
        return Err(ApiError::bad_request("Username and password are required"));
    };

    let user = User::find_by_username(&state.db, username)
        .await
        .map_err(|e| ApiError::internal_server_error(e.to_string()))?;

    match user {
        Some(user) if verify_password(&user.password_hash, password) => {
            let claims = Claims::new(
                user.id,
                user.username,
                user.role,
                state.config.security.jwt_expiry_hours,
            );
            let token = generate_jwt(&claims, &state.config.security.jwt_secret)?;

            Ok(Json(json!({ "token": token })))
        }
        _ => Err(ApiError::unauthorized("Invalid credentials")),
    }
}
