use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::IdentificationType;

/// The subject of care. `identification_number` is the real-world unique
/// identifier (cédula); everything past `date_of_birth` is independently
/// nullable demographic/clinical data.
///
/// Wire format is camelCase — the web front end consumes it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub identification_number: String,
    pub identification_type: IdentificationType,
    pub date_of_birth: NaiveDate,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub eps: Option<String>,
    pub address: Option<String>,
    pub blood_type: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub sex_biological: Option<String>,
    pub gender_identity: Option<String>,
    pub marital_status: Option<String>,
    pub education_level: Option<String>,
    pub occupation: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
    pub city: Option<String>,
    pub municipality: Option<String>,
    pub neighborhood: Option<String>,
    pub postal_code: Option<String>,
    pub housing_type: Option<String>,
    pub socioeconomic_stratum: Option<i32>,
    pub residence_duration_months: Option<i32>,
    pub abdominal_circumference_cm: Option<f64>,
    pub heart_rate_bpm: Option<i32>,
    pub respiratory_rate_rpm: Option<i32>,
    pub blood_pressure_sys: Option<i32>,
    pub blood_pressure_dia: Option<i32>,
    pub temperature_c: Option<f64>,
    pub spo2: Option<i32>,
    pub allergies: Option<String>,
    pub medications: Option<String>,
    pub surgeries: Option<String>,
    pub family_history: Option<String>,
    pub habits: Option<String>,
    pub vaccines: Option<String>,
    pub chronic_conditions: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
