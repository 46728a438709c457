//! Route definitions for `/advertiser-applications`.

use axum::routing::post;
use axum::Router;

use crate::handlers::advertiser_applications;
use crate::state::AppState;

/// ```text
/// POST   /   -> submit_advertiser_application (public)
/// GET    /   -> list_advertiser_applications (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(advertiser_applications::submit_advertiser_application)
            .get(advertiser_applications::list_advertiser_applications),
    )
}
