//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::registration_handler;
use crate::domain::{
    Program, RegistrationRequest, RegistrationResponse, Status, StatusUpdated, UpdateStatusRequest,
};

/// OpenAPI documentation for the registration API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Registration API",
        version = "0.1.0",
        description = "Student/course registration backend with MongoDB persistence",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        registration_handler::create_registration,
        registration_handler::update_registration_status,
    ),
    components(
        schemas(
            Program,
            Status,
            RegistrationRequest,
            RegistrationResponse,
            UpdateStatusRequest,
            StatusUpdated,
        )
    ),
    tags(
        (name = "Registration", description = "Registration and status confirmation")
    )
)]
pub struct ApiDoc;
