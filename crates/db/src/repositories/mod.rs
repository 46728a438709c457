//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod advertiser_application_repo;
pub mod critic_application_repo;
pub mod location_request_repo;
pub mod user_repo;

pub use advertiser_application_repo::AdvertiserApplicationRepo;
pub use critic_application_repo::CriticApplicationRepo;
pub use location_request_repo::LocationRequestRepo;
pub use user_repo::UserRepo;
