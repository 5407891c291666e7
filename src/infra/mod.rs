//! Infrastructure layer - External systems integration
//!
//! This module handles the document store: connection management and
//! repositories over the named collections.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{
    RegistrationRepository, RegistrationStore, StudentRepository, StudentStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockRegistrationRepository, MockStudentRepository};
