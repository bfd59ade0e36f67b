//! Application state - Dependency injection container.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::DatabaseConnection;

use crate::services::{ClinicManager, ClinicService};

/// Application state shared by every handler.
#[derive(Clone)]
pub struct AppState {
    /// Clinic data service
    pub clinic: Arc<dyn ClinicService>,
}

impl AppState {
    /// Build the production state over an open connection.
    pub fn from_connection(connection: DatabaseConnection, query_timeout: Duration) -> Self {
        Self::new(Arc::new(ClinicManager::new(connection, query_timeout)))
    }

    /// Create application state with a manually injected service.
    pub fn new(clinic: Arc<dyn ClinicService>) -> Self {
        Self { clinic }
    }
}
