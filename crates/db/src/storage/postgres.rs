use async_trait::async_trait;
use matjib_core::lead::{NewAdvertiserApplication, NewCriticApplication, NewLocationRequest};
use matjib_core::types::DbId;

use super::{Storage, StoreError};
use crate::models::advertiser_application::AdvertiserApplication;
use crate::models::critic_application::CriticApplication;
use crate::models::location_request::LocationRequest;
use crate::models::user::{CreateUser, User};
use crate::repositories::{
    AdvertiserApplicationRepo, CriticApplicationRepo, LocationRequestRepo, UserRepo,
};
use crate::DbPool;

/// [`Storage`] backed by the PostgreSQL repositories.
#[derive(Debug, Clone)]
pub struct PgStorage {
    pool: DbPool,
}

impl PgStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }

    async fn create_location_request(
        &self,
        input: &NewLocationRequest,
    ) -> Result<LocationRequest, StoreError> {
        Ok(LocationRequestRepo::create(&self.pool, input).await?)
    }

    async fn list_location_requests(&self) -> Result<Vec<LocationRequest>, StoreError> {
        Ok(LocationRequestRepo::list(&self.pool).await?)
    }

    async fn create_critic_application(
        &self,
        input: &NewCriticApplication,
    ) -> Result<CriticApplication, StoreError> {
        Ok(CriticApplicationRepo::create(&self.pool, input).await?)
    }

    async fn list_critic_applications(&self) -> Result<Vec<CriticApplication>, StoreError> {
        Ok(CriticApplicationRepo::list(&self.pool).await?)
    }

    async fn create_advertiser_application(
        &self,
        input: &NewAdvertiserApplication,
    ) -> Result<AdvertiserApplication, StoreError> {
        Ok(AdvertiserApplicationRepo::create(&self.pool, input).await?)
    }

    async fn list_advertiser_applications(
        &self,
    ) -> Result<Vec<AdvertiserApplication>, StoreError> {
        Ok(AdvertiserApplicationRepo::list(&self.pool).await?)
    }

    async fn get_user(&self, id: DbId) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_id(&self.pool, id).await?)
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(UserRepo::find_by_username(&self.pool, username).await?)
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        Ok(UserRepo::create(&self.pool, input).await?)
    }
}
