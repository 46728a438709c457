//! Domain types and validation shared by the storage and HTTP layers.

pub mod error;
pub mod lead;
pub mod types;
