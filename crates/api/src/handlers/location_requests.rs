//! Handlers for restaurant-location requests.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use matjib_core::lead::LeadKind;
use matjib_db::models::lead::StoredLead;
use matjib_db::models::location_request::LocationRequest;
use serde_json::Value;

use super::leads;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// POST /api/location-requests
pub async fn submit_location_request(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<StoredLead>> {
    leads::submit(&state, LeadKind::LocationRequest, payload).await
}

/// GET /api/location-requests
///
/// All requests, newest first. Admin only.
pub async fn list_location_requests(
    admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<LocationRequest>>> {
    let rows = state
        .storage
        .list_location_requests()
        .await
        .map_err(|source| AppError::FetchFailed {
            what: "location requests",
            source,
        })?;
    tracing::debug!(
        admin = %admin.username,
        count = rows.len(),
        "Listed location requests"
    );
    Ok(Json(rows))
}
