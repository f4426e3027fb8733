//! Patient endpoints.
//!
//! CRUD plus lookup by identification number. Create and update go
//! through the consistency checks in `crate::patients`; delete is an
//! unconditional idempotent success.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Patient;
use crate::patients::{self, PatientPayload};

/// `GET /api/patients` — list all patients.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Patient>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let patients = patients::list_patients(&conn).map_err(ApiError::from)?;
    Ok(Json(patients))
}

/// `GET /api/patients/:id` — get one patient.
pub async fn detail(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Patient>, ApiError> {
    let conn = ctx.core.open_db()?;
    let patient_id = parse_patient_id(&id)?;
    let patient = patients::get_patient(&conn, &patient_id).map_err(ApiError::from)?;
    Ok(Json(patient))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub identification_number: String,
}

/// `GET /api/patients/search?identificationNumber=` — lookup by document.
pub async fn search(
    State(ctx): State<ApiContext>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Patient>, ApiError> {
    let conn = ctx.core.open_db()?;
    let patient =
        patients::find_patient_by_identification(&conn, &query.identification_number)
            .map_err(ApiError::from)?;
    Ok(Json(patient))
}

/// `POST /api/patients` — create a patient.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(payload): Json<PatientPayload>,
) -> Result<Json<Patient>, ApiError> {
    let conn = ctx.core.open_db()?;
    let patient = patients::create_patient(&conn, payload).map_err(ApiError::from)?;
    Ok(Json(patient))
}

/// `PUT /api/patients/:id` — full-replace update.
pub async fn update(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
    Json(payload): Json<PatientPayload>,
) -> Result<Json<Patient>, ApiError> {
    let conn = ctx.core.open_db()?;
    let patient_id = parse_patient_id(&id)?;
    let patient =
        patients::update_patient(&conn, &patient_id, payload).map_err(ApiError::from)?;
    Ok(Json(patient))
}

/// `DELETE /api/patients/:id` — idempotent delete.
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    let conn = ctx.core.open_db()?;
    let patient_id = parse_patient_id(&id)?;
    patients::delete_patient(&conn, &patient_id).map_err(ApiError::from)?;
    Ok(())
}

fn parse_patient_id(id: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(id).map_err(|e| ApiError::BadRequest(format!("Invalid patient ID: {e}")))
}
