use async_trait::async_trait;
use chrono::Utc;
use matjib_core::lead::{NewAdvertiserApplication, NewCriticApplication, NewLocationRequest};
use matjib_core::types::{DbId, Timestamp};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Storage, StoreError};
use crate::models::advertiser_application::AdvertiserApplication;
use crate::models::critic_application::CriticApplication;
use crate::models::location_request::LocationRequest;
use crate::models::user::{CreateUser, User};

/// Process-local [`Storage`]. Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    location_requests: Vec<LocationRequest>,
    critic_applications: Vec<CriticApplication>,
    advertiser_applications: Vec<AdvertiserApplication>,
    users: Vec<User>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Rows are kept in insertion order; reversing before a stable sort keeps
/// later inserts first when two timestamps tie.
fn newest_first<T: Clone>(rows: &[T], created_at: impl Fn(&T) -> Timestamp) -> Vec<T> {
    let mut out: Vec<T> = rows.iter().rev().cloned().collect();
    out.sort_by_key(|row| std::cmp::Reverse(created_at(row)));
    out
}

#[async_trait]
impl Storage for MemoryStorage {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    async fn create_location_request(
        &self,
        input: &NewLocationRequest,
    ) -> Result<LocationRequest, StoreError> {
        let row = LocationRequest::from_new(Uuid::new_v4(), input, Utc::now());
        self.tables.write().await.location_requests.push(row.clone());
        Ok(row)
    }

    async fn list_location_requests(&self) -> Result<Vec<LocationRequest>, StoreError> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.location_requests, |r| r.created_at))
    }

    async fn create_critic_application(
        &self,
        input: &NewCriticApplication,
    ) -> Result<CriticApplication, StoreError> {
        let row = CriticApplication::from_new(Uuid::new_v4(), input, Utc::now());
        self.tables.write().await.critic_applications.push(row.clone());
        Ok(row)
    }

    async fn list_critic_applications(&self) -> Result<Vec<CriticApplication>, StoreError> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.critic_applications, |r| r.created_at))
    }

    async fn create_advertiser_application(
        &self,
        input: &NewAdvertiserApplication,
    ) -> Result<AdvertiserApplication, StoreError> {
        let row = AdvertiserApplication::from_new(Uuid::new_v4(), input, Utc::now());
        self.tables
            .write()
            .await
            .advertiser_applications
            .push(row.clone());
        Ok(row)
    }

    async fn list_advertiser_applications(
        &self,
    ) -> Result<Vec<AdvertiserApplication>, StoreError> {
        let tables = self.tables.read().await;
        Ok(newest_first(&tables.advertiser_applications, |r| r.created_at))
    }

    async fn get_user(&self, id: DbId) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, input: &CreateUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == input.username) {
            return Err(StoreError::Conflict(
                "Duplicate value violates unique constraint: uq_users_username".into(),
            ));
        }
        let user = User {
            id: Uuid::new_v4(),
            username: input.username.clone(),
            password_hash: input.password_hash.clone(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    #[test]
    fn newest_first_orders_descending_and_breaks_ties_by_insertion() {
        let t0 = Utc::now();
        let rows = vec![
            (1, t0),
            (2, t0 + Duration::seconds(5)),
            (3, t0),
            (4, t0 + Duration::seconds(1)),
        ];
        let ordered: Vec<i32> = newest_first(&rows, |r| r.1).into_iter().map(|r| r.0).collect();
        assert_eq!(ordered, vec![2, 4, 3, 1]);
    }

    #[test]
    fn newest_first_of_nothing_is_empty() {
        let rows: Vec<(i32, Timestamp)> = Vec::new();
        assert!(newest_first(&rows, |r| r.1).is_empty());
    }
}
