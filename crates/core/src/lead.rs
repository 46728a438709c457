//! Lead kinds, submission DTOs, and payload validation.
//!
//! A "lead" is a public form submission awaiting admin review. Each kind has
//! a strictly-typed DTO holding only the client-supplied fields; the server
//! assigns `id` and `createdAt` later, so those keys are stripped here if a
//! client sends them.
//!
//! Validation is pure: [`parse_lead`] either returns a validated [`NewLead`]
//! or a [`CoreError::InvalidField`] naming the first offending wire field.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Kinds
// ---------------------------------------------------------------------------

/// The three kinds of public submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadKind {
    LocationRequest,
    CriticApplication,
    AdvertiserApplication,
}

impl LeadKind {
    pub const ALL: [LeadKind; 3] = [
        LeadKind::LocationRequest,
        LeadKind::CriticApplication,
        LeadKind::AdvertiserApplication,
    ];

    /// Backing table name.
    pub const fn table(self) -> &'static str {
        match self {
            LeadKind::LocationRequest => "location_requests",
            LeadKind::CriticApplication => "critic_applications",
            LeadKind::AdvertiserApplication => "advertiser_applications",
        }
    }

    /// Route prefix under `/api`.
    pub const fn route(self) -> &'static str {
        match self {
            LeadKind::LocationRequest => "/location-requests",
            LeadKind::CriticApplication => "/critic-applications",
            LeadKind::AdvertiserApplication => "/advertiser-applications",
        }
    }

    /// Human-readable name used in log lines and error messages.
    pub const fn label(self) -> &'static str {
        match self {
            LeadKind::LocationRequest => "location request",
            LeadKind::CriticApplication => "critic application",
            LeadKind::AdvertiserApplication => "advertiser application",
        }
    }

    const fn fields(self) -> &'static [FieldSpec] {
        match self {
            LeadKind::LocationRequest => LOCATION_REQUEST_FIELDS,
            LeadKind::CriticApplication => CRITIC_APPLICATION_FIELDS,
            LeadKind::AdvertiserApplication => ADVERTISER_APPLICATION_FIELDS,
        }
    }

    /// Wire names of the client-supplied fields, in declaration order.
    pub fn field_names(self) -> impl Iterator<Item = &'static str> {
        self.fields().iter().map(|f| f.wire)
    }
}

impl fmt::Display for LeadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Field tables
// ---------------------------------------------------------------------------

/// Maps a camelCase wire name to the struct field name `validator` reports.
struct FieldSpec {
    wire: &'static str,
    rust: &'static str,
}

const LOCATION_REQUEST_FIELDS: &[FieldSpec] = &[
    FieldSpec { wire: "name", rust: "name" },
    FieldSpec { wire: "address", rust: "address" },
];

const CRITIC_APPLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec { wire: "name", rust: "name" },
    FieldSpec { wire: "email", rust: "email" },
    FieldSpec { wire: "phone", rust: "phone" },
];

const ADVERTISER_APPLICATION_FIELDS: &[FieldSpec] = &[
    FieldSpec { wire: "companyName", rust: "company_name" },
    FieldSpec { wire: "representative", rust: "representative" },
    FieldSpec { wire: "phone", rust: "phone" },
    FieldSpec { wire: "email", rust: "email" },
];

const EMPTY: &str = "must not be empty";

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Client-supplied fields of a restaurant-location request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewLocationRequest {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub address: String,
}

/// Client-supplied fields of a food-critic application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCriticApplication {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone: String,
}

/// Client-supplied fields of an advertiser application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAdvertiserApplication {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company_name: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub representative: String,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub phone: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
}

/// A validated submission of any kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewLead {
    LocationRequest(NewLocationRequest),
    CriticApplication(NewCriticApplication),
    AdvertiserApplication(NewAdvertiserApplication),
}

impl NewLead {
    pub const fn kind(&self) -> LeadKind {
        match self {
            NewLead::LocationRequest(_) => LeadKind::LocationRequest,
            NewLead::CriticApplication(_) => LeadKind::CriticApplication,
            NewLead::AdvertiserApplication(_) => LeadKind::AdvertiserApplication,
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Validate a raw JSON payload as a submission of the given kind.
pub fn parse_lead(kind: LeadKind, raw: &Value) -> Result<NewLead, CoreError> {
    match kind {
        LeadKind::LocationRequest => parse_location_request(raw).map(NewLead::LocationRequest),
        LeadKind::CriticApplication => {
            parse_critic_application(raw).map(NewLead::CriticApplication)
        }
        LeadKind::AdvertiserApplication => {
            parse_advertiser_application(raw).map(NewLead::AdvertiserApplication)
        }
    }
}

pub fn parse_location_request(raw: &Value) -> Result<NewLocationRequest, CoreError> {
    parse_validated(raw, LeadKind::LocationRequest.fields())
}

pub fn parse_critic_application(raw: &Value) -> Result<NewCriticApplication, CoreError> {
    parse_validated(raw, LeadKind::CriticApplication.fields())
}

pub fn parse_advertiser_application(raw: &Value) -> Result<NewAdvertiserApplication, CoreError> {
    parse_validated(raw, LeadKind::AdvertiserApplication.fields())
}

/// Shared pipeline: shape check, strip unknown keys, deserialize, validate.
fn parse_validated<T>(raw: &Value, fields: &[FieldSpec]) -> Result<T, CoreError>
where
    T: DeserializeOwned + Validate,
{
    let object = raw
        .as_object()
        .ok_or_else(|| CoreError::Validation("Request body must be a JSON object".into()))?;

    let mut known = Map::with_capacity(fields.len());
    for field in fields {
        match object.get(field.wire) {
            None | Some(Value::Null) => {
                return Err(CoreError::invalid_field(field.wire, "is required"));
            }
            Some(Value::String(s)) => {
                known.insert(field.wire.to_string(), Value::String(s.clone()));
            }
            Some(_) => {
                return Err(CoreError::invalid_field(field.wire, "must be a string"));
            }
        }
    }

    let dto: T = serde_json::from_value(Value::Object(known))
        .map_err(|e| CoreError::Validation(e.to_string()))?;

    dto.validate()
        .map_err(|errors| first_field_error(&errors, fields))?;

    Ok(dto)
}

/// Report the first failing field in declaration order.
fn first_field_error(errors: &ValidationErrors, fields: &[FieldSpec]) -> CoreError {
    let by_field = errors.errors();
    for field in fields {
        if let Some(ValidationErrorsKind::Field(list)) = by_field.get(field.rust) {
            if let Some(first) = list.first() {
                let reason = first
                    .message
                    .as_ref()
                    .map_or_else(|| EMPTY.to_string(), ToString::to_string);
                return CoreError::invalid_field(field.wire, reason);
            }
        }
    }
    CoreError::Validation(errors.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
