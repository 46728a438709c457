//! Handlers for food-critic applications.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use matjib_core::lead::LeadKind;
use matjib_db::models::critic_application::CriticApplication;
use matjib_db::models::lead::StoredLead;
use serde_json::Value;

use super::leads;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

/// POST /api/critic-applications
pub async fn submit_critic_application(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<StoredLead>> {
    leads::submit(&state, LeadKind::CriticApplication, payload).await
}

/// GET /api/critic-applications
pub async fn list_critic_applications(
    admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CriticApplication>>> {
    let rows = state
        .storage
        .list_critic_applications()
        .await
        .map_err(|source| AppError::FetchFailed {
            what: "critic applications",
            source,
        })?;
    tracing::debug!(
        admin = %admin.username,
        count = rows.len(),
        "Listed critic applications"
    );
    Ok(Json(rows))
}
