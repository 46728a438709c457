//! Repository for the `advertiser_applications` table.

use matjib_core::lead::NewAdvertiserApplication;
use sqlx::PgPool;

use crate::models::advertiser_application::AdvertiserApplication;

const COLUMNS: &str = "id, company_name, representative, phone, email, created_at";

/// Append-only access to advertiser applications.
pub struct AdvertiserApplicationRepo;

impl AdvertiserApplicationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewAdvertiserApplication,
    ) -> Result<AdvertiserApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO advertiser_applications (company_name, representative, phone, email)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AdvertiserApplication>(&query)
            .bind(&input.company_name)
            .bind(&input.representative)
            .bind(&input.phone)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<AdvertiserApplication>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM advertiser_applications ORDER BY created_at DESC");
        sqlx::query_as::<_, AdvertiserApplication>(&query)
            .fetch_all(pool)
            .await
    }
}
