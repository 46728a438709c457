//! Storage backends behind a single object-safe trait.
//!
//! Handlers hold an `Arc<dyn Storage>` so the same router runs against
//! Postgres in production and against [`MemoryStorage`] in tests or local
//! runs without `DATABASE_URL`.

mod memory;
mod postgres;

use async_trait::async_trait;
use matjib_core::lead::{
    NewAdvertiserApplication, NewCriticApplication, NewLead, NewLocationRequest,
};
use matjib_core::types::DbId;

use crate::models::advertiser_application::AdvertiserApplication;
use crate::models::critic_application::CriticApplication;
use crate::models::lead::StoredLead;
use crate::models::location_request::LocationRequest;
use crate::models::user::{CreateUser, User};

pub use memory::MemoryStorage;
pub use postgres::PgStorage;

/// PostgreSQL `unique_violation`.
const PG_UNIQUE_VIOLATION: &str = "23505";

/// Failure reported by a storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The backend could not be reached.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err)
                if db_err.code().as_deref() == Some(PG_UNIQUE_VIOLATION) =>
            {
                let constraint = db_err.constraint().unwrap_or("unknown");
                StoreError::Conflict(format!(
                    "Duplicate value violates unique constraint: {constraint}"
                ))
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                StoreError::Unavailable(err.to_string())
            }
            _ => StoreError::Database(err),
        }
    }
}

/// Create and list-all per lead kind, plus admin user lookup and provisioning.
///
/// Backends own identifier and timestamp assignment; callers never supply them.
/// Every `list_*` returns rows ordered by `created_at` descending.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    async fn health_check(&self) -> Result<(), StoreError>;

    async fn create_location_request(
        &self,
        input: &NewLocationRequest,
    ) -> Result<LocationRequest, StoreError>;

    async fn list_location_requests(&self) -> Result<Vec<LocationRequest>, StoreError>;

    async fn create_critic_application(
        &self,
        input: &NewCriticApplication,
    ) -> Result<CriticApplication, StoreError>;

    async fn list_critic_applications(&self) -> Result<Vec<CriticApplication>, StoreError>;

    async fn create_advertiser_application(
        &self,
        input: &NewAdvertiserApplication,
    ) -> Result<AdvertiserApplication, StoreError>;

    async fn list_advertiser_applications(
        &self,
    ) -> Result<Vec<AdvertiserApplication>, StoreError>;

    async fn get_user(&self, id: DbId) -> Result<Option<User>, StoreError>;

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Fails with [`StoreError::Conflict`] if the username is taken.
    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError>;

    /// Persist a validated lead of any kind.
    async fn create_lead(&self, lead: &NewLead) -> Result<StoredLead, StoreError> {
        let stored = match lead {
            NewLead::LocationRequest(input) => {
                StoredLead::LocationRequest(self.create_location_request(input).await?)
            }
            NewLead::CriticApplication(input) => {
                StoredLead::CriticApplication(self.create_critic_application(input).await?)
            }
            NewLead::AdvertiserApplication(input) => {
                StoredLead::AdvertiserApplication(self.create_advertiser_application(input).await?)
            }
        };
        Ok(stored)
    }
}
