//! Location request entity model.

use matjib_core::lead::NewLocationRequest;
use matjib_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `location_requests` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub created_at: Timestamp,
}

impl LocationRequest {
    /// Attach server-assigned fields to a validated submission.
    pub fn from_new(id: DbId, input: &NewLocationRequest, created_at: Timestamp) -> Self {
        Self {
            id,
            name: input.name.clone(),
            address: input.address.clone(),
            created_at,
        }
    }
}
