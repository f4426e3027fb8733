//! Patient operations — identification-number uniqueness and the
//! full-replace update contract.
//!
//! Timestamps are assigned here, not by store triggers: `created_at` is
//! set once at creation, `updated_at` on creation and every update.
//! The uniqueness pre-check produces the conflict in the common case;
//! the store's UNIQUE constraint backs it when two writers race.

use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{repository, DatabaseError};
use crate::models::enums::IdentificationType;
use crate::models::Patient;

/// Incoming patient record for create and full-replace update. Mirrors
/// `Patient` minus the server-assigned identity and audit columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
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
}

impl PatientPayload {
    /// Build the stored record. Every mutable field comes from the payload
    /// (full-replace — omitted optionals land as NULL); identity and audit
    /// columns come from the caller.
    fn into_patient(self, id: Uuid, created_at: NaiveDateTime, updated_at: NaiveDateTime) -> Patient {
        Patient {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            identification_number: self.identification_number,
            identification_type: self.identification_type,
            date_of_birth: self.date_of_birth,
            email: self.email,
            phone_number: self.phone_number,
            eps: self.eps,
            address: self.address,
            blood_type: self.blood_type,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            sex_biological: self.sex_biological,
            gender_identity: self.gender_identity,
            marital_status: self.marital_status,
            education_level: self.education_level,
            occupation: self.occupation,
            emergency_contact_name: self.emergency_contact_name,
            emergency_contact_phone: self.emergency_contact_phone,
            city: self.city,
            municipality: self.municipality,
            neighborhood: self.neighborhood,
            postal_code: self.postal_code,
            housing_type: self.housing_type,
            socioeconomic_stratum: self.socioeconomic_stratum,
            residence_duration_months: self.residence_duration_months,
            abdominal_circumference_cm: self.abdominal_circumference_cm,
            heart_rate_bpm: self.heart_rate_bpm,
            respiratory_rate_rpm: self.respiratory_rate_rpm,
            blood_pressure_sys: self.blood_pressure_sys,
            blood_pressure_dia: self.blood_pressure_dia,
            temperature_c: self.temperature_c,
            spo2: self.spo2,
            allergies: self.allergies,
            medications: self.medications,
            surgeries: self.surgeries,
            family_history: self.family_history,
            habits: self.habits,
            vaccines: self.vaccines,
            chronic_conditions: self.chronic_conditions,
            created_at,
            updated_at,
        }
    }
}

/// Create a patient. Fails with `ConstraintViolation` when any patient
/// already holds the identification number; nothing is written then.
pub fn create_patient(conn: &Connection, payload: PatientPayload) -> Result<Patient, DatabaseError> {
    if repository::get_patient_by_identification(conn, &payload.identification_number)?.is_some() {
        return Err(DatabaseError::ConstraintViolation(
            "identification number already registered".into(),
        ));
    }

    let now = Local::now().naive_local();
    let patient = payload.into_patient(Uuid::new_v4(), now, now);
    repository::insert_patient(conn, &patient)?;

    tracing::debug!(patient_id = %patient.id, "patient created");
    Ok(patient)
}

/// Full-replace update. The patient must exist, and the payload's
/// identification number must not belong to a *different* patient —
/// reasserting the patient's own number is not a conflict.
pub fn update_patient(
    conn: &Connection,
    id: &Uuid,
    payload: PatientPayload,
) -> Result<Patient, DatabaseError> {
    let existing = repository::get_patient(conn, id)?.ok_or_else(|| DatabaseError::NotFound {
        entity_type: "Patient".into(),
        id: id.to_string(),
    })?;

    if let Some(holder) =
        repository::get_patient_by_identification(conn, &payload.identification_number)?
    {
        if holder.id != *id {
            return Err(DatabaseError::ConstraintViolation(
                "identification number already registered".into(),
            ));
        }
    }

    let updated = payload.into_patient(existing.id, existing.created_at, Local::now().naive_local());
    repository::update_patient(conn, &updated)?;

    tracing::debug!(patient_id = %updated.id, "patient updated");
    Ok(updated)
}

pub fn get_patient(conn: &Connection, id: &Uuid) -> Result<Patient, DatabaseError> {
    repository::get_patient(conn, id)?.ok_or_else(|| DatabaseError::NotFound {
        entity_type: "Patient".into(),
        id: id.to_string(),
    })
}

pub fn find_patient_by_identification(
    conn: &Connection,
    identification_number: &str,
) -> Result<Patient, DatabaseError> {
    repository::get_patient_by_identification(conn, identification_number)?.ok_or_else(|| {
        DatabaseError::NotFound {
            entity_type: "Patient".into(),
            id: identification_number.to_string(),
        }
    })
}

pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    repository::get_all_patients(conn)
}

/// Idempotent: deleting an unknown id succeeds. Appointments referencing
/// the patient are removed by the store's cascade policy.
pub fn delete_patient(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    repository::delete_patient(conn, id)
}
