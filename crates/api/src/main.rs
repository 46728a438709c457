use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use matjib_api::bootstrap::{ensure_admin, AdminProvision};
use matjib_api::config::ServerConfig;
use matjib_api::router::build_app_router;
use matjib_api::state::AppState;
use matjib_db::{MemoryStorage, PgStorage, Storage};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "matjib_api=debug,matjib_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Storage ---
    let storage: Arc<dyn Storage> = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = matjib_db::create_pool(database_url, config.db_max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            matjib_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            matjib_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgStorage::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage; data is lost on exit");
            Arc::new(MemoryStorage::new())
        }
    };

    // --- Admin account ---
    if let Some(seed) = &config.admin_seed {
        match ensure_admin(storage.as_ref(), seed)
            .await
            .expect("Failed to provision admin account")
        {
            AdminProvision::Created(user) => {
                tracing::info!(user_id = %user.id, username = %user.username, "Admin account created");
            }
            AdminProvision::AlreadyExists(user) => {
                tracing::debug!(username = %user.username, "Admin account already present");
            }
        }
    }

    // --- App state ---
    let state = AppState {
        storage,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
