use std::sync::Arc;

use axum::extract::{Path, State};
use chrono::{DateTime, Days, NaiveDate, NaiveTime, Utc};

use crate::database::models::Contract;
use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /api/contracts/:companyId/:inicio - Contracts for a company
/// starting on the given day
///
/// `inicio` is a `YYYY-MM-DD` date; matching is over the half-open
/// window `[inicio, inicio+1day)`. An unparseable date surfaces as an
/// internal error, not a client error.
pub async fn lookup(
    State(state): State<Arc<AppState>>,
    Path((company_id, inicio)): Path<(i64, String)>,
) -> ApiResult<Vec<Contract>> {
    let day: NaiveDate = inicio.parse().map_err(|e| {
        tracing::error!("Failed to parse contract start date {:?}: {}", inicio, e);
        ApiError::internal_server_error("Internal server error")
    })?;

    let (from, to) = day_window(day);

    let contracts = Contract::find_by_company_in_window(&state.db, company_id, from, to).await?;

    if contracts.is_empty() {
        return Err(ApiError::not_found("No contracts found"));
    }

    Ok(ApiResponse::success(contracts))
}

/// Half-open UTC window covering one calendar day
fn day_window(day: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = day.and_time(NaiveTime::MIN).and_utc();
    let end = (day + Days::new(1)).and_time(NaiveTime::MIN).and_utc();
    (start, end)
}
