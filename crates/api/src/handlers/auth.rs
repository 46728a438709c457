//! Handlers for the `/auth` resource (admin login and identity).

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use matjib_core::error::CoreError;
use matjib_db::models::user::UserResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::json_body;
use crate::auth::jwt::generate_access_token;
use crate::auth::password::{verify_dummy_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub access_token: String,
    /// Always `"Bearer"`.
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
///
/// Authenticate with username + password. Unknown usernames and wrong
/// passwords are indistinguishable to the caller.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<AuthResponse>> {
    let input: LoginRequest = serde_json::from_value(json_body(payload)?)
        .map_err(|e| AppError::BadRequest(format!("Invalid login request: {e}")))?;

    if input.username.is_empty() {
        return Err(CoreError::invalid_field("username", "must not be empty").into());
    }
    if input.password.is_empty() {
        return Err(CoreError::invalid_field("password", "must not be empty").into());
    }

    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid username or password".into()));

    let Some(user) = state.storage.get_user_by_username(&input.username).await? else {
        verify_dummy_password(&input.password);
        tracing::warn!(username = %input.username, "Login for unknown user");
        return Err(invalid());
    };

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        tracing::warn!(username = %input.username, "Failed admin login");
        return Err(invalid());
    }

    let access_token = generate_access_token(user.id, &user.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = %user.id, "Admin logged in");

    Ok(Json(AuthResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.expires_in_secs(),
        user: UserResponse::from(&user),
    }))
}

/// GET /api/auth/me
///
/// The admin behind the presented token. A token for a since-removed user is
/// rejected even if it has not expired.
pub async fn me(admin: AdminUser, State(state): State<AppState>) -> AppResult<Json<UserResponse>> {
    let user = state
        .storage
        .get_user(admin.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("User no longer exists".into())))?;

    Ok(Json(UserResponse::from(&user)))
}
