//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::infra::{Database, RegistrationStore};
use crate::services::{Registrar, RegistrationService};

/// Application state containing the services handlers depend on.
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub registration_service: Arc<dyn RegistrationService>,
    /// Database handle for health checks; absent in handler tests
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Wire the full production state from a connected database.
    pub fn from_database(database: Arc<Database>) -> Self {
        let store = Arc::new(RegistrationStore::new(&database));
        let registration_service = Arc::new(Registrar::new(store));

        Self {
            registration_service,
            database: Some(database),
        }
    }

    /// Create state with a manually injected service (tests).
    pub fn new(registration_service: Arc<dyn RegistrationService>) -> Self {
        Self {
            registration_service,
            database: None,
        }
    }
}
