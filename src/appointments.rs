//! Appointment operations — patient-existence precondition on creation,
//! optional patient filter on listing. Appointments are never updated;
//! status is effectively write-once at creation.

use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{repository, DatabaseError};
use crate::models::enums::AppointmentStatus;
use crate::models::{Appointment, AppointmentType};

/// Creation request. Carries the patient id only — the patient object is
/// never accepted in the body; it is resolved server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRequest {
    pub date: NaiveDate,
    #[serde(deserialize_with = "deserialize_time")]
    pub time: NaiveTime,
    pub specialty: String,
    pub status: Option<AppointmentStatus>,
    pub patient_id: Uuid,
}

/// The front end sends HH:MM; seconds are optional.
fn deserialize_time<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NaiveTime::parse_from_str(&s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M"))
        .map_err(serde::de::Error::custom)
}

/// Create an appointment for an existing patient. `status` defaults to
/// `PENDING` when the request omits it. Fails with `NotFound` (and writes
/// nothing) when the patient id resolves to no patient.
pub fn create_appointment(
    conn: &Connection,
    request: AppointmentRequest,
) -> Result<Appointment, DatabaseError> {
    let patient =
        repository::get_patient(conn, &request.patient_id)?.ok_or_else(|| {
            DatabaseError::NotFound {
                entity_type: "Patient".into(),
                id: request.patient_id.to_string(),
            }
        })?;

    let appointment = Appointment {
        id: Uuid::new_v4(),
        date: request.date,
        time: request.time,
        specialty: request.specialty,
        status: request.status.unwrap_or(AppointmentStatus::Pending),
        patient,
        created_at: Local::now().naive_local(),
    };
    repository::insert_appointment(conn, &appointment)?;

    tracing::debug!(appointment_id = %appointment.id, "appointment created");
    Ok(appointment)
}

/// All appointments, or only those referencing the given patient.
pub fn list_appointments(
    conn: &Connection,
    patient_id: Option<Uuid>,
) -> Result<Vec<Appointment>, DatabaseError> {
    match patient_id {
        Some(pid) => repository::get_appointments_by_patient(conn, &pid),
        None => repository::get_all_appointments(conn),
    }
}

/// Idempotent: deleting an unknown id succeeds.
pub fn delete_appointment(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    repository::delete_appointment(conn, id)
}

pub fn list_appointment_types(conn: &Connection) -> Result<Vec<AppointmentType>, DatabaseError> {
    repository::get_all_appointment_types(conn)
}
