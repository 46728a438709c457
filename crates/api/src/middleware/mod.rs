//! Request extractors enforcing authentication.
//!
//! - [`auth::AdminUser`] -- Extracts the admin from a JWT Bearer token.

pub mod auth;
