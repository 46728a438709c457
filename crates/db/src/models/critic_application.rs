//! Food-critic application entity model.

use matjib_core::lead::NewCriticApplication;
use matjib_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `critic_applications` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticApplication {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub created_at: Timestamp,
}

impl CriticApplication {
    pub fn from_new(id: DbId, input: &NewCriticApplication, created_at: Timestamp) -> Self {
        Self {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            created_at,
        }
    }
}
