//! Patient endpoints
//!
//! Writes persist only `doctor.id`; reads return the doctor resolved by join.

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::models::Patient;
use crate::state::AppState;

/// GET /patient - list all patients
async fn list_patients(State(state): State<AppState>) -> Result<Json<Vec<Patient>>, ApiError> {
    let patients = state.patients.list().await?;
    Ok(Json(patients))
}

/// GET /patient/{id} - get a single patient
async fn get_patient(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Patient>, ApiError> {
    let patient = state.patients.get(id.get()).await?;
    Ok(Json(patient))
}

/// POST /patient - admit a patient
async fn create_patient(
    State(state): State<AppState>,
    JsonBody(patient): JsonBody<Patient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let patient = state.patients.create(patient).await?;
    tracing::info!(id = patient.id, doctor_id = patient.doctor_id(), "patient created");
    Ok((StatusCode::CREATED, Json(patient)))
}

/// PUT /patient/{id} - full replace of a patient
async fn update_patient(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    JsonBody(patient): JsonBody<Patient>,
) -> Result<Json<Patient>, ApiError> {
    let patient = state.patients.update(id.get(), patient).await?;
    Ok(Json(patient))
}

/// DELETE /patient/{id} - discharge a patient
async fn delete_patient(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<&'static str>, ApiError> {
    state.patients.delete(id.get()).await?;
    tracing::info!(%id, "patient deleted");
    Ok(Json("Patient deleted"))
}

/// Patient routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/patient", get(list_patients).post(create_patient))
        .route(
            "/patient/{id}",
            get(get_patient).put(update_patient).delete(delete_patient),
        )
}
