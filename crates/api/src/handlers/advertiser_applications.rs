//! Handlers for advertiser applications.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use matjib_core::lead::LeadKind;
use matjib_db::models::advertiser_application::AdvertiserApplication;
use matjib_db::models::lead::StoredLead;
use serde_json::Value;

use super::leads;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// POST /api/advertiser-applications
pub async fn submit_advertiser_application(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<StoredLead>> {
    leads::submit(&state, LeadKind::AdvertiserApplication, payload).await
}

/// GET /api/advertiser-applications
pub async fn list_advertiser_applications(
    admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AdvertiserApplication>>> {
    let rows = state
        .storage
        .list_advertiser_applications()
        .await
        .map_err(|source| AppError::FetchFailed {
            what: "advertiser applications",
            source,
        })?;
    tracing::debug!(
        admin = %admin.username,
        count = rows.len(),
        "Listed advertiser applications"
    );
    Ok(Json(rows))
}
