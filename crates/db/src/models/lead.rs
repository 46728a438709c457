//! Kind-tagged wrapper over the three stored lead rows.

use matjib_core::lead::LeadKind;
use matjib_core::types::{DbId, Timestamp};
use serde::Serialize;

use super::advertiser_application::AdvertiserApplication;
use super::critic_application::CriticApplication;
use super::location_request::LocationRequest;

/// A stored lead of any kind.
///
/// Serializes untagged, so the JSON is exactly the inner row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StoredLead {
    LocationRequest(LocationRequest),
    CriticApplication(CriticApplication),
    AdvertiserApplication(AdvertiserApplication),
}

impl StoredLead {
    pub const fn kind(&self) -> LeadKind {
        match self {
            StoredLead::LocationRequest(_) => LeadKind::LocationRequest,
            StoredLead::CriticApplication(_) => LeadKind::CriticApplication,
            StoredLead::AdvertiserApplication(_) => LeadKind::AdvertiserApplication,
        }
    }

    pub const fn id(&self) -> DbId {
        match self {
            StoredLead::LocationRequest(r) => r.id,
            StoredLead::CriticApplication(r) => r.id,
            StoredLead::AdvertiserApplication(r) => r.id,
        }
    }

    pub const fn created_at(&self) -> Timestamp {
        match self {
            StoredLead::LocationRequest(r) => r.created_at,
            StoredLead::CriticApplication(r) => r.created_at,
            StoredLead::AdvertiserApplication(r) => r.created_at,
        }
    }
}
