use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::enums::IdentificationType;
use crate::models::Patient;

const PATIENT_COLUMNS: &str = "id, first_name, last_name, identification_number, identification_type, \
     date_of_birth, email, phone, eps, address, blood_type, height_cm, weight_kg, sex_biological, \
     gender_identity, marital_status, education_level, occupation, emergency_contact_name, \
     emergency_contact_phone, city, municipality, neighborhood, postal_code, housing_type, \
     socioeconomic_stratum, residence_duration_months, abdominal_circumference_cm, heart_rate_bpm, \
     respiratory_rate_rpm, blood_pressure_sys, blood_pressure_dia, temperature_c, spo2, allergies, \
     medications, surgeries, family_history, habits, vaccines, chronic_conditions, created_at, updated_at";

pub fn insert_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    let sql = format!(
        "INSERT INTO patients ({PATIENT_COLUMNS})
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15, ?16, ?17, ?18,
                 ?19, ?20, ?21, ?22, ?23, ?24, ?25, ?26, ?27, ?28, ?29, ?30, ?31, ?32, ?33, ?34,
                 ?35, ?36, ?37, ?38, ?39, ?40, ?41, ?42, ?43)"
    );
    conn.execute(
        &sql,
        params![
            patient.id.to_string(),
            patient.first_name,
            patient.last_name,
            patient.identification_number,
            patient.identification_type.as_str(),
            patient.date_of_birth.to_string(),
            patient.email,
            patient.phone_number,
            patient.eps,
            patient.address,
            patient.blood_type,
            patient.height_cm,
            patient.weight_kg,
            patient.sex_biological,
            patient.gender_identity,
            patient.marital_status,
            patient.education_level,
            patient.occupation,
            patient.emergency_contact_name,
            patient.emergency_contact_phone,
            patient.city,
            patient.municipality,
            patient.neighborhood,
            patient.postal_code,
            patient.housing_type,
            patient.socioeconomic_stratum,
            patient.residence_duration_months,
            patient.abdominal_circumference_cm,
            patient.heart_rate_bpm,
            patient.respiratory_rate_rpm,
            patient.blood_pressure_sys,
            patient.blood_pressure_dia,
            patient.temperature_c,
            patient.spo2,
            patient.allergies,
            patient.medications,
            patient.surgeries,
            patient.family_history,
            patient.habits,
            patient.vaccines,
            patient.chronic_conditions,
            patient.created_at.to_string(),
            patient.updated_at.to_string(),
        ],
    )
    .map_err(map_identification_conflict)?;
    Ok(())
}

/// Full-row replace. `id` and `created_at` are left untouched; the caller
/// is responsible for refreshing `updated_at`.
pub fn update_patient(conn: &Connection, patient: &Patient) -> Result<(), DatabaseError> {
    let rows = conn
        .execute(
            "UPDATE patients SET first_name = ?2, last_name = ?3, identification_number = ?4,
             identification_type = ?5, date_of_birth = ?6, email = ?7, phone = ?8, eps = ?9,
             address = ?10, blood_type = ?11, height_cm = ?12, weight_kg = ?13,
             sex_biological = ?14, gender_identity = ?15, marital_status = ?16,
             education_level = ?17, occupation = ?18, emergency_contact_name = ?19,
             emergency_contact_phone = ?20, city = ?21, municipality = ?22, neighborhood = ?23,
             postal_code = ?24, housing_type = ?25, socioeconomic_stratum = ?26,
             residence_duration_months = ?27, abdominal_circumference_cm = ?28,
             heart_rate_bpm = ?29, respiratory_rate_rpm = ?30, blood_pressure_sys = ?31,
             blood_pressure_dia = ?32, temperature_c = ?33, spo2 = ?34, allergies = ?35,
             medications = ?36, surgeries = ?37, family_history = ?38, habits = ?39,
             vaccines = ?40, chronic_conditions = ?41, updated_at = ?42
             WHERE id = ?1",
            params![
                patient.id.to_string(),
                patient.first_name,
                patient.last_name,
                patient.identification_number,
                patient.identification_type.as_str(),
                patient.date_of_birth.to_string(),
                patient.email,
                patient.phone_number,
                patient.eps,
                patient.address,
                patient.blood_type,
                patient.height_cm,
                patient.weight_kg,
                patient.sex_biological,
                patient.gender_identity,
                patient.marital_status,
                patient.education_level,
                patient.occupation,
                patient.emergency_contact_name,
                patient.emergency_contact_phone,
                patient.city,
                patient.municipality,
                patient.neighborhood,
                patient.postal_code,
                patient.housing_type,
                patient.socioeconomic_stratum,
                patient.residence_duration_months,
                patient.abdominal_circumference_cm,
                patient.heart_rate_bpm,
                patient.respiratory_rate_rpm,
                patient.blood_pressure_sys,
                patient.blood_pressure_dia,
                patient.temperature_c,
                patient.spo2,
                patient.allergies,
                patient.medications,
                patient.surgeries,
                patient.family_history,
                patient.habits,
                patient.vaccines,
                patient.chronic_conditions,
                patient.updated_at.to_string(),
            ],
        )
        .map_err(map_identification_conflict)?;
    if rows == 0 {
        return Err(DatabaseError::NotFound {
            entity_type: "Patient".into(),
            id: patient.id.to_string(),
        });
    }
    Ok(())
}

pub fn get_patient(conn: &Connection, id: &Uuid) -> Result<Option<Patient>, DatabaseError> {
    let sql = format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?1");
    let mut stmt = conn.prepare(&sql)?;
    let result = stmt.query_row(params![id.to_string()], read_patient_row);

    match result {
        Ok(row) => Ok(Some(patient_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_patient_by_identification(
    conn: &Connection,
    identification_number: &str,
) -> Result<Option<Patient>, DatabaseError> {
    let sql = format!(
        "SELECT {PATIENT_COLUMNS} FROM patients WHERE identification_number = ?1 LIMIT 1"
    );
    let mut stmt = conn.prepare(&sql)?;
    let result = stmt.query_row(params![identification_number], read_patient_row);

    match result {
        Ok(row) => Ok(Some(patient_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_all_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let sql = format!("SELECT {PATIENT_COLUMNS} FROM patients");
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], read_patient_row)?;

    let mut patients = Vec::new();
    for row in rows {
        patients.push(patient_from_row(row?)?);
    }
    Ok(patients)
}

/// Unconditional delete by id. Deleting an id that does not exist is a
/// no-op success, and appointments cascade via the store's FK policy.
pub fn delete_patient(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    conn.execute("DELETE FROM patients WHERE id = ?1", params![id.to_string()])?;
    Ok(())
}

/// The only UNIQUE column on `patients` is `identification_number`, so a
/// constraint failure on insert/update can be reported as the uniqueness
/// conflict directly. This is the backstop for two concurrent writers
/// passing the domain-level pre-check at the same time.
fn map_identification_conflict(e: rusqlite::Error) -> DatabaseError {
    if let rusqlite::Error::SqliteFailure(err, _) = &e {
        if err.code == rusqlite::ErrorCode::ConstraintViolation {
            return DatabaseError::ConstraintViolation(
                "identification number already registered".into(),
            );
        }
    }
    e.into()
}

struct PatientRow {
    id: String,
    first_name: String,
    last_name: String,
    identification_number: String,
    identification_type: String,
    date_of_birth: String,
    email: Option<String>,
    phone_number: Option<String>,
    eps: Option<String>,
    address: Option<String>,
    blood_type: Option<String>,
    height_cm: Option<f64>,
    weight_kg: Option<f64>,
    sex_biological: Option<String>,
    gender_identity: Option<String>,
    marital_status: Option<String>,
    education_level: Option<String>,
    occupation: Option<String>,
    emergency_contact_name: Option<String>,
    emergency_contact_phone: Option<String>,
    city: Option<String>,
    municipality: Option<String>,
    neighborhood: Option<String>,
    postal_code: Option<String>,
    housing_type: Option<String>,
    socioeconomic_stratum: Option<i32>,
    residence_duration_months: Option<i32>,
    abdominal_circumference_cm: Option<f64>,
    heart_rate_bpm: Option<i32>,
    respiratory_rate_rpm: Option<i32>,
    blood_pressure_sys: Option<i32>,
    blood_pressure_dia: Option<i32>,
    temperature_c: Option<f64>,
    spo2: Option<i32>,
    allergies: Option<String>,
    medications: Option<String>,
    surgeries: Option<String>,
    family_history: Option<String>,
    habits: Option<String>,
    vaccines: Option<String>,
    chronic_conditions: Option<String>,
    created_at: String,
    updated_at: String,
}

fn read_patient_row(row: &Row) -> rusqlite::Result<PatientRow> {
    Ok(PatientRow {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        identification_number: row.get(3)?,
        identification_type: row.get(4)?,
        date_of_birth: row.get(5)?,
        email: row.get(6)?,
        phone_number: row.get(7)?,
        eps: row.get(8)?,
        address: row.get(9)?,
        blood_type: row.get(10)?,
        height_cm: row.get(11)?,
        weight_kg: row.get(12)?,
        sex_biological: row.get(13)?,
        gender_identity: row.get(14)?,
        marital_status: row.get(15)?,
        education_level: row.get(16)?,
        occupation: row.get(17)?,
        emergency_contact_name: row.get(18)?,
        emergency_contact_phone: row.get(19)?,
        city: row.get(20)?,
        municipality: row.get(21)?,
        neighborhood: row.get(22)?,
        postal_code: row.get(23)?,
        housing_type: row.get(24)?,
        socioeconomic_stratum: row.get(25)?,
        residence_duration_months: row.get(26)?,
        abdominal_circumference_cm: row.get(27)?,
        heart_rate_bpm: row.get(28)?,
        respiratory_rate_rpm: row.get(29)?,
        blood_pressure_sys: row.get(30)?,
        blood_pressure_dia: row.get(31)?,
        temperature_c: row.get(32)?,
        spo2: row.get(33)?,
        allergies: row.get(34)?,
        medications: row.get(35)?,
        surgeries: row.get(36)?,
        family_history: row.get(37)?,
        habits: row.get(38)?,
        vaccines: row.get(39)?,
        chronic_conditions: row.get(40)?,
        created_at: row.get(41)?,
        updated_at: row.get(42)?,
    })
}

fn patient_from_row(row: PatientRow) -> Result<Patient, DatabaseError> {
    Ok(Patient {
        id: Uuid::parse_str(&row.id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        first_name: row.first_name,
        last_name: row.last_name,
        identification_number: row.identification_number,
        identification_type: IdentificationType::from_str(&row.identification_type)?,
        date_of_birth: NaiveDate::parse_from_str(&row.date_of_birth, "%Y-%m-%d")
            .unwrap_or_default(),
        email: row.email,
        phone_number: row.phone_number,
        eps: row.eps,
        address: row.address,
        blood_type: row.blood_type,
        height_cm: row.height_cm,
        weight_kg: row.weight_kg,
        sex_biological: row.sex_biological,
        gender_identity: row.gender_identity,
        marital_status: row.marital_status,
        education_level: row.education_level,
        occupation: row.occupation,
        emergency_contact_name: row.emergency_contact_name,
        emergency_contact_phone: row.emergency_contact_phone,
        city: row.city,
        municipality: row.municipality,
        neighborhood: row.neighborhood,
        postal_code: row.postal_code,
        housing_type: row.housing_type,
        socioeconomic_stratum: row.socioeconomic_stratum,
        residence_duration_months: row.residence_duration_months,
        abdominal_circumference_cm: row.abdominal_circumference_cm,
        heart_rate_bpm: row.heart_rate_bpm,
        respiratory_rate_rpm: row.respiratory_rate_rpm,
        blood_pressure_sys: row.blood_pressure_sys,
        blood_pressure_dia: row.blood_pressure_dia,
        temperature_c: row.temperature_c,
        spo2: row.spo2,
        allergies: row.allergies,
        medications: row.medications,
        surgeries: row.surgeries,
        family_history: row.family_history,
        habits: row.habits,
        vaccines: row.vaccines,
        chronic_conditions: row.chronic_conditions,
        created_at: parse_timestamp(&row.created_at),
        updated_at: parse_timestamp(&row.updated_at),
    })
}

pub(crate) fn parse_timestamp(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f"))
        .unwrap_or_default()
}
