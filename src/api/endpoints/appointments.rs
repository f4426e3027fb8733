//! Appointment endpoints.
//!
//! Creation resolves `patientId` server-side and rejects unknown
//! patients; listing takes an optional `patientId` filter; there is no
//! update surface.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::appointments::{self, AppointmentRequest};
use crate::models::Appointment;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub patient_id: Option<String>,
}

/// `GET /api/appointments` — list, optionally filtered by patient.
pub async fn list(
    State(ctx): State<ApiContext>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let conn = ctx.core.open_db()?;

    let patient_id = match query.patient_id.as_deref() {
        Some(raw) => Some(
            Uuid::parse_str(raw)
                .map_err(|e| ApiError::BadRequest(format!("Invalid patient ID: {e}")))?,
        ),
        None => None,
    };

    let appointments =
        appointments::list_appointments(&conn, patient_id).map_err(ApiError::from)?;
    Ok(Json(appointments))
}

/// `POST /api/appointments` — create for an existing patient.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(request): Json<AppointmentRequest>,
) -> Result<Json<Appointment>, ApiError> {
    let conn = ctx.core.open_db()?;
    let appointment =
        appointments::create_appointment(&conn, request).map_err(ApiError::from)?;
    Ok(Json(appointment))
}

/// `DELETE /api/appointments/:id` — idempotent delete.
pub async fn delete(
    State(ctx): State<ApiContext>,
    Path(id): Path<String>,
) -> Result<(), ApiError> {
    let conn = ctx.core.open_db()?;
    let appointment_id = Uuid::parse_str(&id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid appointment ID: {e}")))?;
    appointments::delete_appointment(&conn, &appointment_id).map_err(ApiError::from)?;
    Ok(())
}
