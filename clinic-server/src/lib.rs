//! clinic-server: HTTP CRUD service for patients and doctors
//!
//! Request flow: axum handler decodes the path id and JSON body, calls the
//! resource's `Store`, and maps the result or `DbError` to a status code and
//! JSON body.

pub mod db;
pub mod http;
pub mod models;
pub mod state;

pub use db::{connect, DbError, DoctorRepo, PatientRepo, Store};
pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
pub use models::{Doctor, Patient, RecordId};
pub use state::AppState;

