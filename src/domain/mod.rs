//! Domain layer - Core business entities and logic.

pub mod credentials;
mod registration;
mod student;
pub mod validation;

pub use registration::{
    Program, Registration, RegistrationRequest, RegistrationResponse, Status, StatusUpdated,
    UpdateStatusRequest,
};
pub use student::Student;
pub use validation::Violations;
