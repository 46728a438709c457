//! Row structs and DTOs.
//!
//! Each submodule contains a `FromRow` + `Serialize` entity struct matching
//! the database row. Create DTOs for leads live in `matjib_core::lead`.

pub mod advertiser_application;
pub mod critic_application;
pub mod lead;
pub mod location_request;
pub mod user;
