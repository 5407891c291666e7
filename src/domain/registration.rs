//! Registration domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::{
    PROGRAM_S1D3D4, PROGRAM_S2, S1D3D4_BILL, S2_BILL, STATUS_CREATED, STATUS_UPDATED,
};

/// Recognized study programs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Program {
    S1D3D4,
    S2,
}

impl Program {
    /// Parse a raw program label; `None` for anything outside the enum
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            PROGRAM_S1D3D4 => Some(Program::S1D3D4),
            PROGRAM_S2 => Some(Program::S2),
            _ => None,
        }
    }

    /// Fixed bill amount for this program
    pub fn bill(&self) -> u64 {
        match self {
            Program::S1D3D4 => S1D3D4_BILL,
            Program::S2 => S2_BILL,
        }
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Program::S1D3D4 => write!(f, "{}", PROGRAM_S1D3D4),
            Program::S2 => write!(f, "{}", PROGRAM_S2),
        }
    }
}

/// Registration lifecycle status; `created` and `updated` are the only states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Created,
    Updated,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Created => write!(f, "{}", STATUS_CREATED),
            Status::Updated => write!(f, "{}", STATUS_UPDATED),
        }
    }
}

/// Persisted registration record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password: String,
    pub bill: u64,
    pub virtual_account: String,
    pub status: Status,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub registered_at: DateTime<Utc>,
}

impl Registration {
    /// Create a new record with a fresh id and `created` status
    pub fn new(
        name: String,
        email: String,
        phone: String,
        username: String,
        password: String,
        bill: u64,
        virtual_account: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            username,
            password,
            bill,
            virtual_account,
            status: Status::Created,
            registered_at: Utc::now(),
        }
    }
}

/// Incoming registration form. Missing fields default to empty strings so
/// they run through the same validation path as blank submissions.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RegistrationRequest {
    #[serde(default)]
    #[schema(example = "Sammi Aldhi Yanto")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "sammidev@gmail.com")]
    pub email: String,
    #[serde(default)]
    #[schema(example = "082387325971")]
    pub phone: String,
    #[serde(default)]
    #[schema(example = "S2")]
    pub program: String,
}

/// Credentials and billing details returned after a successful create
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    #[schema(example = "sammi4821")]
    pub username: String,
    pub password: String,
    #[schema(example = 250000)]
    pub bill: u64,
    #[schema(example = "8277103954126")]
    pub virtual_account: String,
}

impl From<&Registration> for RegistrationResponse {
    fn from(registration: &Registration) -> Self {
        Self {
            username: registration.username.clone(),
            password: registration.password.clone(),
            bill: registration.bill,
            virtual_account: registration.virtual_account.clone(),
        }
    }
}

/// Status-update request keyed by virtual account
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    #[serde(default)]
    #[schema(example = "8277103954126")]
    pub virtual_account: String,
}

/// Confirmation payload for a successful status update
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatusUpdated {
    #[schema(example = "updated")]
    pub status: String,
}

impl StatusUpdated {
    pub fn new() -> Self {
        Self {
            status: STATUS_UPDATED.to_string(),
        }
    }
}

impl Default for StatusUpdated {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn program_parse_accepts_both_tracks() {
        assert_eq!(Program::parse("S1D3D4"), Some(Program::S1D3D4));
        assert_eq!(Program::parse("S2"), Some(Program::S2));
        assert_eq!(Program::parse("xxxx"), None);
        assert_eq!(Program::parse(""), None);
    }

    #[test]
    fn bill_tiers_are_distinct() {
        assert_ne!(Program::S1D3D4.bill(), Program::S2.bill());
        assert_eq!(Program::S2.bill(), S2_BILL);
    }

    #[test]
    fn new_registration_starts_as_created() {
        let registration = Registration::new(
            "Sammi Aldhi Yanto".to_string(),
            "sammidev@gmail.com".to_string(),
            "082387325971".to_string(),
            "sammi4821".to_string(),
            "s3cr3tpass123".to_string(),
            Program::S2.bill(),
            "8277103954126".to_string(),
        );

        assert_eq!(registration.status, Status::Created);
        assert!(!registration.id.is_empty());
    }

    #[test]
    fn response_fields_serialize_camel_case() {
        let response = RegistrationResponse {
            username: "sammi4821".to_string(),
            password: "s3cr3tpass123".to_string(),
            bill: 250_000,
            virtual_account: "8277103954126".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["virtualAccount"], "8277103954126");
    }
}
