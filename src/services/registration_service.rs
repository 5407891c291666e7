//! Registration service - orchestrates validation, uniqueness checks,
//! billing, credential generation and persistence.

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{
    CODE_REQUIRED_VA, MSG_EMAIL_RECORDED, MSG_PHONE_RECORDED, MSG_VA_EMPTY, MSG_VA_NOT_FOUND,
};
use crate::domain::{
    credentials, validation, Registration, RegistrationRequest, RegistrationResponse, Status,
    StatusUpdated,
};
use crate::errors::{AppError, AppResult};
use crate::infra::RegistrationRepository;

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Validate and persist a registration, returning the generated
    /// credentials, bill and virtual account
    async fn create(&self, request: RegistrationRequest) -> AppResult<RegistrationResponse>;

    /// Flip the record matching the virtual account to `updated`
    async fn update_status(&self, virtual_account: &str) -> AppResult<StatusUpdated>;
}

/// Concrete implementation of RegistrationService over a repository.
pub struct Registrar<R: RegistrationRepository> {
    registrations: Arc<R>,
}

impl<R: RegistrationRepository> Registrar<R> {
    pub fn new(registrations: Arc<R>) -> Self {
        Self { registrations }
    }
}

#[async_trait]
impl<R: RegistrationRepository> RegistrationService for Registrar<R> {
    async fn create(&self, request: RegistrationRequest) -> AppResult<RegistrationResponse> {
        // Every field rule runs before anything touches storage
        let program = validation::validate(&request).map_err(AppError::Validation)?;

        // Friendly pre-checks; the unique indexes backstop the race where
        // two concurrent creates pass these simultaneously
        if self.registrations.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::conflict(MSG_EMAIL_RECORDED));
        }
        if self.registrations.find_by_phone(&request.phone).await?.is_some() {
            return Err(AppError::conflict(MSG_PHONE_RECORDED));
        }

        let username = credentials::generate_username(&request.name);
        let registration = Registration::new(
            request.name,
            request.email,
            request.phone,
            username,
            credentials::generate_password(),
            program.bill(),
            credentials::generate_virtual_account(),
        );

        let response = RegistrationResponse::from(&registration);
        self.registrations.insert(registration).await?;

        tracing::info!(program = %program, "registration created");
        Ok(response)
    }

    async fn update_status(&self, virtual_account: &str) -> AppResult<StatusUpdated> {
        if virtual_account.is_empty() {
            return Err(AppError::validation_field(CODE_REQUIRED_VA, MSG_VA_EMPTY));
        }

        if self
            .registrations
            .find_by_virtual_account(virtual_account)
            .await?
            .is_none()
        {
            return Err(AppError::not_found(MSG_VA_NOT_FOUND));
        }

        // Idempotent: re-confirming an already-updated record is fine,
        // so the modified count is not checked here
        self.registrations
            .update_status(virtual_account, Status::Updated)
            .await?;

        tracing::info!("registration status updated");
        Ok(StatusUpdated::new())
    }
}
