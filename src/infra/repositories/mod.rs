//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over document persistence,
//! following the Repository pattern for clean separation of concerns.

mod registration_repository;
mod student_repository;

pub use registration_repository::{RegistrationRepository, RegistrationStore};
pub use student_repository::{StudentRepository, StudentStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use registration_repository::MockRegistrationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use student_repository::MockStudentRepository;
