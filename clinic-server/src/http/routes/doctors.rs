//! Doctor endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ValidId};
use crate::models::Doctor;
use crate::state::AppState;

/// GET /doctor - list all doctors
async fn list_doctors(State(state): State<AppState>) -> Result<Json<Vec<Doctor>>, ApiError> {
    let doctors = state.doctors.list().await?;
    Ok(Json(doctors))
}

/// GET /doctor/{id} - get a single doctor
async fn get_doctor(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<Doctor>, ApiError> {
    let doctor = state.doctors.get(id.get()).await?;
    Ok(Json(doctor))
}

/// POST /doctor - create a doctor, ignoring any id in the body
async fn create_doctor(
    State(state): State<AppState>,
    JsonBody(doctor): JsonBody<Doctor>,
) -> Result<(StatusCode, Json<Doctor>), ApiError> {
    let doctor = state.doctors.create(doctor).await?;
    tracing::info!(id = doctor.id, "doctor created");
    Ok((StatusCode::CREATED, Json(doctor)))
}

/// PUT /doctor/{id} - replace name and specialization
async fn update_doctor(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    JsonBody(doctor): JsonBody<Doctor>,
) -> Result<Json<Doctor>, ApiError> {
    let doctor = state.doctors.update(id.get(), doctor).await?;
    Ok(Json(doctor))
}

/// DELETE /doctor/{id} - delete a doctor
async fn delete_doctor(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<Json<&'static str>, ApiError> {
    state.doctors.delete(id.get()).await?;
    tracing::info!(%id, "doctor deleted");
    Ok(Json("Doctor deleted"))
}

/// Doctor routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/doctor", get(list_doctors).post(create_doctor))
        .route(
            "/doctor/{id}",
            get(get_doctor).put(update_doctor).delete(delete_doctor),
        )
}
