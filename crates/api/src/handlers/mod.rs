pub mod advertiser_applications;
pub mod auth;
pub mod critic_applications;
pub mod leads;
pub mod location_requests;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Unwrap a raw JSON body, turning axum's rejection (bad syntax, wrong
/// content type) into a 400 with the same JSON error shape as everything else.
pub(crate) fn json_body(payload: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))
}
