//! The HTTP surface of the lead intake service.
//!
//! `main.rs` and the integration tests both build the app through
//! [`build_app_router`], so tests exercise the production middleware.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Assemble every route behind the shared middleware.
///
/// ```text
/// GET  /health                        public
/// POST /api/auth/login                public
/// GET  /api/auth/me                   admin token
/// POST /api/{location-requests,critic-applications,advertiser-applications}
///                                     public form submission
/// GET  /api/{...same three...}        admin token, newest first
/// ```
///
/// Admin-only routes are guarded per handler by the
/// [`AdminUser`](crate::middleware::auth::AdminUser) extractor, not by a
/// layer. Every request gets an `x-request-id`, a trace span, a timeout
/// answered with 408, and panic recovery. CORS admits only the configured
/// origins, and only the GET and POST methods.
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let cors = build_cors_layer(config);
    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        // Probes hit /health directly, outside /api.
        .merge(routes::health::router())
        .nest("/api", routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// CORS for the browser front end. The public forms and the admin
/// dashboard only issue GET and POST, carrying a JSON body or a bearer token.
///
/// # Panics
///
/// On an origin that is not a valid header value.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins: Vec<_> = config
        .cors_origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}
