//! Out-of-band admin provisioning.
//!
//! There is no registration endpoint. When `ADMIN_USERNAME` and
//! `ADMIN_PASSWORD` are configured, startup calls [`ensure_admin`] so the
//! account exists before the server accepts traffic.

use matjib_db::models::user::{CreateUser, UserResponse};
use matjib_db::{Storage, StoreError};

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::AdminSeed;

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Admin password rejected: {0}")]
    WeakPassword(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// What [`ensure_admin`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminProvision {
    Created(UserResponse),
    AlreadyExists(UserResponse),
}

/// Create the seeded admin unless a user with that name already exists.
///
/// An existing account is left untouched; its password is not reset.
pub async fn ensure_admin(
    storage: &dyn Storage,
    seed: &AdminSeed,
) -> Result<AdminProvision, BootstrapError> {
    if let Some(existing) = storage.get_user_by_username(&seed.username).await? {
        return Ok(AdminProvision::AlreadyExists(UserResponse::from(&existing)));
    }

    validate_password_strength(&seed.password, MIN_PASSWORD_LENGTH)
        .map_err(BootstrapError::WeakPassword)?;

    let password_hash =
        hash_password(&seed.password).map_err(|e| BootstrapError::Hash(e.to_string()))?;

    let input = CreateUser {
        username: seed.username.clone(),
        password_hash,
    };

    match storage.create_user(&input).await {
        Ok(user) => Ok(AdminProvision::Created(UserResponse::from(&user))),
        // Another instance provisioned it between the lookup and the insert.
        Err(StoreError::Conflict(_)) => {
            let existing = storage
                .get_user_by_username(&seed.username)
                .await?
                .ok_or_else(|| StoreError::Conflict(seed.username.clone()))?;
            Ok(AdminProvision::AlreadyExists(UserResponse::from(&existing)))
        }
        Err(e) => Err(e.into()),
    }
}
