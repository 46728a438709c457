//! Advertiser application entity model.

use matjib_core::lead::NewAdvertiserApplication;
use matjib_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `advertiser_applications` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvertiserApplication {
    pub id: DbId,
    pub company_name: String,
    pub representative: String,
    pub phone: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl AdvertiserApplication {
    pub fn from_new(id: DbId, input: &NewAdvertiserApplication, created_at: Timestamp) -> Self {
        Self {
            id,
            company_name: input.company_name.clone(),
            representative: input.representative.clone(),
            phone: input.phone.clone(),
            email: input.email.clone(),
            created_at,
        }
    }
}
