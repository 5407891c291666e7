//! Registration handlers.

use axum::{
    extract::State,
    routing::{post, put},
    Json, Router,
};

use crate::api::AppState;
use crate::domain::{RegistrationRequest, RegistrationResponse, StatusUpdated, UpdateStatusRequest};
use crate::errors::AppResult;
use crate::types::WebResponse;

/// Create registration routes
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_registration))
        .route("/status", put(update_registration_status))
}

/// Register a student for a program
#[utoipa::path(
    post,
    path = "/api/v1/registration",
    tag = "Registration",
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "Registration created", body = RegistrationResponse),
        (status = 400, description = "Validation or uniqueness failure")
    )
)]
pub async fn create_registration(
    State(state): State<AppState>,
    Json(payload): Json<RegistrationRequest>,
) -> AppResult<WebResponse<RegistrationResponse>> {
    let created = state.registration_service.create(payload).await?;
    Ok(WebResponse::created(created))
}

/// Confirm a registration by virtual account
#[utoipa::path(
    put,
    path = "/api/v1/registration/status",
    tag = "Registration",
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = StatusUpdated),
        (status = 400, description = "Virtual account missing"),
        (status = 500, description = "Virtual account not found")
    )
)]
pub async fn update_registration_status(
    State(state): State<AppState>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<WebResponse<StatusUpdated>> {
    let updated = state
        .registration_service
        .update_status(&payload.virtual_account)
        .await?;

    Ok(WebResponse::ok(updated))
}
