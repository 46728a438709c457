pub mod advertiser_applications;
pub mod auth;
pub mod critic_applications;
pub mod health;
pub mod location_requests;

use axum::Router;
use matjib_core::lead::LeadKind;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                    login (public)
/// /auth/me                       current admin (admin)
///
/// /location-requests             submit (public), list (admin)
/// /critic-applications           submit (public), list (admin)
/// /advertiser-applications       submit (public), list (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest(
            LeadKind::LocationRequest.route(),
            location_requests::router(),
        )
        .nest(
            LeadKind::CriticApplication.route(),
            critic_applications::router(),
        )
        .nest(
            LeadKind::AdvertiserApplication.route(),
            advertiser_applications::router(),
        )
}
