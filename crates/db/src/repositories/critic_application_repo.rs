//! Repository for the `critic_applications` table.

use matjib_core::lead::NewCriticApplication;
use sqlx::PgPool;

use crate::models::critic_application::CriticApplication;

const COLUMNS: &str = "id, name, email, phone, created_at";

/// Append-only access to food-critic applications.
pub struct CriticApplicationRepo;

impl CriticApplicationRepo {
    pub async fn create(
        pool: &PgPool,
        input: &NewCriticApplication,
    ) -> Result<CriticApplication, sqlx::Error> {
        let query = format!(
            "INSERT INTO critic_applications (name, email, phone)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CriticApplication>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .fetch_one(pool)
            .await
    }

    /// List all applications, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<CriticApplication>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM critic_applications ORDER BY created_at DESC");
        sqlx::query_as::<_, CriticApplication>(&query)
            .fetch_all(pool)
            .await
    }
}
