#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use async_trait::async_trait;
use http_body_util::BodyExt;
use tower::ServiceExt;

use matjib_api::auth::jwt::{generate_access_token, JwtConfig};
use matjib_api::auth::password::hash_password;
use matjib_api::config::ServerConfig;
use matjib_api::router::build_app_router;
use matjib_api::state::AppState;
use matjib_core::lead::{NewAdvertiserApplication, NewCriticApplication, NewLocationRequest};
use matjib_core::types::DbId;
use matjib_db::models::advertiser_application::AdvertiserApplication;
use matjib_db::models::critic_application::CriticApplication;
use matjib_db::models::location_request::LocationRequest;
use matjib_db::models::user::{CreateUser, User};
use matjib_db::{MemoryStorage, Storage, StoreError};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 5,
        jwt: JwtConfig {
            secret: "test-secret-for-integration-tests".to_string(),
            access_token_expiry_mins: 60,
        },
        admin_seed: None,
    }
}

/// Fresh in-memory backend, shared between the app and the test body.
pub fn memory_storage() -> Arc<dyn Storage> {
    Arc::new(MemoryStorage::new())
}

/// Storage whose lead tables are unreachable. User lookups go to an inner
/// [`MemoryStorage`] so an admin can still authenticate.
#[derive(Default)]
pub struct UnavailableLeadStorage {
    users: MemoryStorage,
}

fn unavailable() -> StoreError {
    StoreError::Unavailable("connection refused".to_string())
}

#[async_trait]
impl Storage for UnavailableLeadStorage {
    fn backend(&self) -> &'static str {
        "unavailable"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn create_location_request(
        &self,
        _input: &NewLocationRequest,
    ) -> Result<LocationRequest, StoreError> {
        Err(unavailable())
    }

    async fn list_location_requests(&self) -> Result<Vec<LocationRequest>, StoreError> {
        Err(unavailable())
    }

    async fn create_critic_application(
        &self,
        _input: &NewCriticApplication,
    ) -> Result<CriticApplication, StoreError> {
        Err(unavailable())
    }

    async fn list_critic_applications(&self) -> Result<Vec<CriticApplication>, StoreError> {
        Err(unavailable())
    }

    async fn create_advertiser_application(
        &self,
        _input: &NewAdvertiserApplication,
    ) -> Result<AdvertiserApplication, StoreError> {
        Err(unavailable())
    }

    async fn list_advertiser_applications(
        &self,
    ) -> Result<Vec<AdvertiserApplication>, StoreError> {
        Err(unavailable())
    }

    async fn get_user(&self, id: DbId) -> Result<Option<User>, StoreError> {
        self.users.get_user(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        self.users.get_user_by_username(username).await
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        self.users.create_user(input).await
    }
}

/// Build the full application router (same middleware stack as `main.rs`)
/// over the given storage.
pub fn build_test_app(storage: Arc<dyn Storage>) -> Router {
    let config = test_config();
    let state = AppState {
        storage,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Insert the test admin directly into storage and return it.
pub async fn seed_admin(storage: &dyn Storage) -> User {
    let input = CreateUser {
        username: ADMIN_USERNAME.to_string(),
        password_hash: hash_password(ADMIN_PASSWORD).expect("hashing should succeed"),
    };
    storage
        .create_user(&input)
        .await
        .expect("admin creation should succeed")
}

/// Seed the admin and mint an access token for it without going through login.
pub async fn admin_token(storage: &dyn Storage) -> String {
    let admin = seed_admin(storage).await;
    generate_access_token(admin.id, &admin.username, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, &body.to_string()).await
}

/// POST an arbitrary string labelled as JSON.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
