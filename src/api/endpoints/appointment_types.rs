//! Appointment type endpoint — read-only reference data.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::appointments;
use crate::models::AppointmentType;

/// `GET /api/appointment-types` — all types, name-ascending.
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<AppointmentType>>, ApiError> {
    let conn = ctx.core.open_db()?;
    let types = appointments::list_appointment_types(&conn).map_err(ApiError::from)?;
    Ok(Json(types))
}
