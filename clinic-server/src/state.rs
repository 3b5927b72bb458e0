//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::db::{DoctorRepo, PatientRepo, Store};
use crate::models::{Doctor, Patient};

/// Shared application state
///
/// Holds one store per resource. Cloning is cheap; the stores themselves
/// share the connection pool.
#[derive(Clone)]
pub struct AppState {
    pub doctors: Arc<dyn Store<Doctor>>,
    pub patients: Arc<dyn Store<Patient>>,
}

impl AppState {
    pub fn new(doctors: Arc<dyn Store<Doctor>>, patients: Arc<dyn Store<Patient>>) -> Self {
        Self { doctors, patients }
    }

    /// State backed by PostgreSQL repositories over `pool`.
    pub fn postgres(pool: PgPool) -> Self {
        Self::new(
            Arc::new(DoctorRepo::new(pool.clone())),
            Arc::new(PatientRepo::new(pool)),
        )
    }
}
