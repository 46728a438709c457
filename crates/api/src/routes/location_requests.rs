//! Route definitions for `/location-requests`.

use axum::routing::post;
use axum::Router;

use crate::handlers::location_requests;
use crate::state::AppState;

/// ```text
/// POST   /   -> submit_location_request (public)
/// GET    /   -> list_location_requests (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(location_requests::submit_location_request)
            .get(location_requests::list_location_requests),
    )
}
