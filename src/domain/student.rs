//! Student aggregate.
//!
//! Kept separate from registrations; the caller supplies a pre-existing
//! unique id which becomes the document key.

use serde::{Deserialize, Serialize};

/// Student domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: String,
    pub identifier: String,
    pub name: String,
    pub email: String,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        identifier: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            identifier: identifier.into(),
            name: name.into(),
            email: email.into(),
        }
    }
}
