//! Route definitions for `/critic-applications`.

use axum::routing::post;
use axum::Router;

use crate::handlers::critic_applications;
use crate::state::AppState;

/// ```text
/// POST   /   -> submit_critic_application (public)
/// GET    /   -> list_critic_applications (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        post(critic_applications::submit_critic_application)
            .get(critic_applications::list_critic_applications),
    )
}
