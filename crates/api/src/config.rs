use std::fmt;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// PostgreSQL URL. `None` selects the in-memory storage backend.
    pub database_url: Option<String>,
    /// Connection pool size (default: `20`).
    pub db_max_connections: u32,
    /// JWT token configuration.
    pub jwt: JwtConfig,
    /// Admin account to provision at startup, if configured.
    pub admin_seed: Option<AdminSeed>,
}

/// Credentials for the admin account ensured at startup.
#[derive(Clone)]
pub struct AdminSeed {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminSeed")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `DATABASE_URL`         | unset (in-memory storage)  |
    /// | `DB_MAX_CONNECTIONS`   | `20`                       |
    /// | `ADMIN_USERNAME`       | unset                      |
    /// | `ADMIN_PASSWORD`       | unset                      |
    ///
    /// JWT settings are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let database_url = std::env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let admin_seed = parse_admin_seed(
            std::env::var("ADMIN_USERNAME").ok(),
            std::env::var("ADMIN_PASSWORD").ok(),
        )
        .unwrap_or_else(|msg| panic!("{msg}"));

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            database_url,
            db_max_connections,
            jwt: JwtConfig::from_env(),
            admin_seed,
        }
    }
}

/// Pair up the admin seed variables. Both unset means no bootstrap.
fn parse_admin_seed(
    username: Option<String>,
    password: Option<String>,
) -> Result<Option<AdminSeed>, &'static str> {
    match (username, password) {
        (None, None) => Ok(None),
        (Some(username), Some(_)) if username.trim().is_empty() => {
            Err("ADMIN_USERNAME must not be empty")
        }
        (Some(username), Some(password)) => Ok(Some(AdminSeed { username, password })),
        _ => Err("ADMIN_USERNAME and ADMIN_PASSWORD must be set together"),
    }
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
