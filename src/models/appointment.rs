use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::AppointmentStatus;
use super::patient::Patient;

/// A scheduled clinical encounter tied to exactly one patient.
/// Responses embed the full patient record; the store keeps only the
/// patient id. Appointments are never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub specialty: String,
    pub status: AppointmentStatus,
    pub patient: Patient,
    pub created_at: NaiveDateTime,
}
