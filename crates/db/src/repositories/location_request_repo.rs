//! Repository for the `location_requests` table.

use matjib_core::lead::NewLocationRequest;
use sqlx::PgPool;

use crate::models::location_request::LocationRequest;

const COLUMNS: &str = "id, name, address, created_at";

/// Append-only access to location requests.
pub struct LocationRequestRepo;

impl LocationRequestRepo {
    /// Insert a new request. `id` and `created_at` come from column defaults.
    pub async fn create(
        pool: &PgPool,
        input: &NewLocationRequest,
    ) -> Result<LocationRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO location_requests (name, address)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LocationRequest>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .fetch_one(pool)
            .await
    }

    /// List all requests, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<LocationRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM location_requests ORDER BY created_at DESC");
        sqlx::query_as::<_, LocationRequest>(&query)
            .fetch_all(pool)
            .await
    }
}
