//! Submission pipeline shared by the three public lead endpoints.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use matjib_core::lead::{parse_lead, LeadKind};
use matjib_db::models::lead::StoredLead;
use serde_json::Value;

use super::json_body;
use crate::error::AppResult;
use crate::state::AppState;

/// Validate a raw body as `kind` and persist it.
///
/// Validation runs to completion before storage is touched, so a rejected
/// payload never produces a partial write.
pub(crate) async fn submit(
    state: &AppState,
    kind: LeadKind,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<StoredLead>> {
    let raw = json_body(payload)?;

    let lead = parse_lead(kind, &raw).inspect_err(|err| {
        tracing::warn!(%kind, error = %err, "Rejected lead submission");
    })?;

    let stored = state.storage.create_lead(&lead).await?;

    tracing::info!(
        %kind,
        lead_id = %stored.id(),
        created_at = %stored.created_at(),
        "Lead submitted",
    );

    Ok(Json(stored))
}
