use std::sync::Arc;

use axum::extract::State;

use crate::database::models::Company;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/companies - All registered companies, 404 when none exist
pub async fn list(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Company>> {
    let companies = Company::find_all(&state.db).await?;

    if companies.is_empty() {
        return Err(ApiError::not_found("No companies found"));
    }

    Ok(ApiResponse::success(companies))
}
