use std::collections::BTreeMap;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

/// Error payload carried by the envelope: either a single message
/// (conflicts, lookup failures) or a violation-code -> message map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Message(String),
    Violations(BTreeMap<String, String>),
}

/// Uniform response wrapper (consistent envelope for every endpoint).
///
/// `error_message` is null on success; `data` is null on failure.
#[derive(Debug, Serialize)]
pub struct WebResponse<T: Serialize> {
    pub code: u16,
    pub status: String,
    pub error: bool,
    pub error_message: Option<ErrorMessage>,
    pub data: Option<T>,
}

impl<T: Serialize> WebResponse<T> {
    /// 201 envelope for a successful create
    pub fn created(data: T) -> Self {
        Self {
            code: 201,
            status: "Created".to_string(),
            error: false,
            error_message: None,
            data: Some(data),
        }
    }

    /// 200 envelope for a successful update
    pub fn ok(data: T) -> Self {
        Self {
            code: 200,
            status: "Ok".to_string(),
            error: false,
            error_message: None,
            data: Some(data),
        }
    }

    /// Failure envelope; only 400 and 500 are produced by the error taxonomy
    pub fn failure(code: u16, error_message: ErrorMessage) -> Self {
        let status = match code {
            400 => "Bad Request",
            _ => "Internal Server Error",
        };

        Self {
            code,
            status: status.to_string(),
            error: true,
            error_message: Some(error_message),
            data: None,
        }
    }
}

impl<T: Serialize> IntoResponse for WebResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
