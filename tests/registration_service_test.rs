//! Registration service unit tests.

use std::sync::Arc;

use chrono::Utc;

use registration_api::domain::{
    Program, Registration, RegistrationRequest, Status, StatusUpdated,
};
use registration_api::errors::AppError;
use registration_api::infra::MockRegistrationRepository;
use registration_api::services::{Registrar, RegistrationService};

fn sample_registration() -> Registration {
    Registration {
        id: "b9f1c2ce-6f6d-4f3c-9a2e-52a8f29dc701".to_string(),
        name: "Sammi Aldhi Yanto".to_string(),
        email: "sammidev@gmail.com".to_string(),
        phone: "082387325971".to_string(),
        username: "sammialdhiya4821".to_string(),
        password: "s3cr3tpass12".to_string(),
        bill: Program::S2.bill(),
        virtual_account: "8277103954126".to_string(),
        status: Status::Created,
        registered_at: Utc::now(),
    }
}

fn valid_request() -> RegistrationRequest {
    RegistrationRequest {
        name: "Sammi Aldhi Yanto".to_string(),
        email: "sammidev@gmail.com".to_string(),
        phone: "082387325971".to_string(),
        program: "S2".to_string(),
    }
}

#[tokio::test]
async fn create_returns_credentials_and_s2_bill() {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_find_by_phone().returning(|_| Ok(None));
    repo.expect_insert()
        .withf(|r| {
            r.status == Status::Created
                && r.email == "sammidev@gmail.com"
                && !r.username.is_empty()
                && !r.password.is_empty()
        })
        .returning(|_| Ok(()));

    let service = Registrar::new(Arc::new(repo));
    let response = service.create(valid_request()).await.unwrap();

    assert!(!response.username.is_empty());
    assert!(!response.password.is_empty());
    assert_eq!(response.bill, Program::S2.bill());
    assert_ne!(response.bill, Program::S1D3D4.bill());
    assert!(!response.virtual_account.is_empty());
}

#[tokio::test]
async fn create_validation_failure_skips_storage_entirely() {
    // No expectations: any repository call panics the test
    let repo = MockRegistrationRepository::new();
    let service = Registrar::new(Arc::new(repo));

    let request = RegistrationRequest {
        name: String::new(),
        ..valid_request()
    };
    let err = service.create(request).await.unwrap_err();

    match err {
        AppError::Validation(violations) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(
                violations.get("Required_Name").map(String::as_str),
                Some("Name Is Empty")
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn create_with_recorded_email_conflicts_without_writing() {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_find_by_email()
        .withf(|email| email == "sammidev@gmail.com")
        .returning(|_| Ok(Some(sample_registration())));

    let service = Registrar::new(Arc::new(repo));
    let err = service.create(valid_request()).await.unwrap_err();

    match err {
        AppError::Conflict(msg) => assert_eq!(msg, "email has been recorded"),
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn create_with_recorded_phone_conflicts_without_writing() {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_find_by_phone()
        .withf(|phone| phone == "082387325971")
        .returning(|_| Ok(Some(sample_registration())));

    let service = Registrar::new(Arc::new(repo));

    let request = RegistrationRequest {
        email: "sammidev2@gmail.com".to_string(),
        ..valid_request()
    };
    let err = service.create(request).await.unwrap_err();

    match err {
        AppError::Conflict(msg) => assert_eq!(msg, "phone has been recorded"),
        other => panic!("expected conflict, got {:?}", other),
    }
}

#[tokio::test]
async fn create_propagates_unique_index_conflict_from_insert() {
    // Both pre-checks pass but a concurrent create won the race;
    // the store translates the duplicate-key error into a conflict
    let mut repo = MockRegistrationRepository::new();
    repo.expect_find_by_email().returning(|_| Ok(None));
    repo.expect_find_by_phone().returning(|_| Ok(None));
    repo.expect_insert()
        .returning(|_| Err(AppError::conflict("email has been recorded")));

    let service = Registrar::new(Arc::new(repo));
    let err = service.create(valid_request()).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(msg) if msg == "email has been recorded"));
}

#[tokio::test]
async fn create_with_unknown_program_reports_program_not_available() {
    let repo = MockRegistrationRepository::new();
    let service = Registrar::new(Arc::new(repo));

    let request = RegistrationRequest {
        program: "xxxx".to_string(),
        ..valid_request()
    };
    let err = service.create(request).await.unwrap_err();

    match err {
        AppError::Validation(violations) => {
            assert_eq!(violations.len(), 1);
            assert_eq!(
                violations.get("Program_Not_Available").map(String::as_str),
                Some("Please Choose Between S1D3D4 or S2")
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn update_with_empty_va_fails_before_any_lookup() {
    let repo = MockRegistrationRepository::new();
    let service = Registrar::new(Arc::new(repo));

    let err = service.update_status("").await.unwrap_err();

    match err {
        AppError::Validation(violations) => {
            assert_eq!(
                violations.get("Required_VA").map(String::as_str),
                Some("Virtual Account Is Empty")
            );
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn update_with_unknown_va_is_not_found() {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_find_by_virtual_account()
        .withf(|va| va == "1241231321231")
        .returning(|_| Ok(None));

    let service = Registrar::new(Arc::new(repo));
    let err = service.update_status("1241231321231").await.unwrap_err();

    assert!(matches!(err, AppError::NotFound(msg) if msg == "va not found"));
}

#[tokio::test]
async fn update_flips_status_to_updated() {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_find_by_virtual_account()
        .returning(|_| Ok(Some(sample_registration())));
    repo.expect_update_status()
        .withf(|va, status| va == "8277103954126" && *status == Status::Updated)
        .returning(|_, _| Ok(true));

    let service = Registrar::new(Arc::new(repo));
    let updated: StatusUpdated = service.update_status("8277103954126").await.unwrap();

    assert_eq!(updated.status, "updated");
}

#[tokio::test]
async fn update_is_idempotent_when_nothing_was_modified() {
    let mut repo = MockRegistrationRepository::new();
    repo.expect_find_by_virtual_account()
        .returning(|_| Ok(Some(sample_registration())));
    repo.expect_update_status().returning(|_, _| Ok(false));

    let service = Registrar::new(Arc::new(repo));
    let updated = service.update_status("8277103954126").await.unwrap();

    assert_eq!(updated.status, "updated");
}
