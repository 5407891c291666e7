//! Registration form validation.
//!
//! Every rule is evaluated independently so a single response surfaces all
//! violations at once. An empty phone or email fails both the required and
//! the format rule; that doubling is long-standing observed behavior and is
//! kept as-is.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::{
    CODE_INVALID_EMAIL, CODE_INVALID_PHONE, CODE_PROGRAM_NOT_AVAILABLE, CODE_REQUIRED_EMAIL,
    CODE_REQUIRED_NAME, CODE_REQUIRED_PHONE, MSG_EMAIL_EMPTY, MSG_EMAIL_INVALID, MSG_NAME_EMPTY,
    MSG_PHONE_EMPTY, MSG_PHONE_INVALID, MSG_PROGRAM_NOT_AVAILABLE,
};
use crate::domain::{Program, RegistrationRequest};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern must compile")
});

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{9,15}$").expect("phone pattern must compile"));

/// Violation-code -> human-readable message
pub type Violations = BTreeMap<String, String>;

/// Validate a registration form.
///
/// Returns the parsed [`Program`] when every rule passes, otherwise the full
/// violation map.
pub fn validate(request: &RegistrationRequest) -> Result<Program, Violations> {
    let mut violations = Violations::new();

    if request.name.is_empty() {
        violations.insert(CODE_REQUIRED_NAME.to_string(), MSG_NAME_EMPTY.to_string());
    }

    if request.email.is_empty() {
        violations.insert(CODE_REQUIRED_EMAIL.to_string(), MSG_EMAIL_EMPTY.to_string());
    }
    if !EMAIL_RE.is_match(&request.email) {
        violations.insert(CODE_INVALID_EMAIL.to_string(), MSG_EMAIL_INVALID.to_string());
    }

    if request.phone.is_empty() {
        violations.insert(CODE_REQUIRED_PHONE.to_string(), MSG_PHONE_EMPTY.to_string());
    }
    if !PHONE_RE.is_match(&request.phone) {
        violations.insert(CODE_INVALID_PHONE.to_string(), MSG_PHONE_INVALID.to_string());
    }

    let program = Program::parse(&request.program);
    if program.is_none() {
        violations.insert(
            CODE_PROGRAM_NOT_AVAILABLE.to_string(),
            MSG_PROGRAM_NOT_AVAILABLE.to_string(),
        );
    }

    match program {
        Some(program) if violations.is_empty() => Ok(program),
        _ => Err(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegistrationRequest {
        RegistrationRequest {
            name: "Sammi Aldhi Yanto".to_string(),
            email: "sammidev@gmail.com".to_string(),
            phone: "082387325971".to_string(),
            program: "S2".to_string(),
        }
    }

    #[test]
    fn valid_request_yields_program() {
        assert_eq!(validate(&valid_request()), Ok(Program::S2));
    }

    #[test]
    fn empty_name_reports_exactly_required_name() {
        let request = RegistrationRequest {
            name: String::new(),
            ..valid_request()
        };
        let violations = validate(&request).unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(violations.get("Required_Name").map(String::as_str), Some("Name Is Empty"));
    }

    #[test]
    fn all_empty_fields_report_five_codes_at_once() {
        let request = RegistrationRequest {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            program: "S2".to_string(),
        };
        let violations = validate(&request).unwrap_err();

        assert_eq!(violations.len(), 5);
        assert_eq!(violations.get("Required_Name").map(String::as_str), Some("Name Is Empty"));
        assert_eq!(violations.get("Required_Email").map(String::as_str), Some("Email Is Empty"));
        assert_eq!(violations.get("invalid_Email").map(String::as_str), Some("Email Is Not Valid"));
        assert_eq!(violations.get("Required_Phone").map(String::as_str), Some("Phone Is Empty"));
        assert_eq!(
            violations.get("invalid_Phone").map(String::as_str),
            Some("Phone Number Is Not Valid")
        );
    }

    #[test]
    fn malformed_phone_reports_invalid_only() {
        let request = RegistrationRequest {
            phone: "aoksoadal".to_string(),
            ..valid_request()
        };
        let violations = validate(&request).unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.get("invalid_Phone").map(String::as_str),
            Some("Phone Number Is Not Valid")
        );
    }

    #[test]
    fn malformed_phone_and_email_report_both_invalid_codes() {
        let request = RegistrationRequest {
            email: "sammiasam".to_string(),
            phone: "aoksoadal".to_string(),
            ..valid_request()
        };
        let violations = validate(&request).unwrap_err();

        assert_eq!(violations.len(), 2);
        assert!(violations.contains_key("invalid_Email"));
        assert!(violations.contains_key("invalid_Phone"));
    }

    #[test]
    fn unknown_program_reports_exactly_program_not_available() {
        let request = RegistrationRequest {
            program: "xxxx".to_string(),
            ..valid_request()
        };
        let violations = validate(&request).unwrap_err();

        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations.get("Program_Not_Available").map(String::as_str),
            Some("Please Choose Between S1D3D4 or S2")
        );
    }
}
