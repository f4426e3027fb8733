use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::db::repository::patient::{get_patient, parse_timestamp};
use crate::db::DatabaseError;
use crate::models::enums::AppointmentStatus;
use crate::models::Appointment;

pub fn insert_appointment(conn: &Connection, appointment: &Appointment) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO appointments (id, date, time, specialty, status, patient_id, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            appointment.id.to_string(),
            appointment.date.to_string(),
            appointment.time.format("%H:%M:%S").to_string(),
            appointment.specialty,
            appointment.status.as_str(),
            appointment.patient.id.to_string(),
            appointment.created_at.to_string(),
        ],
    )?;
    Ok(())
}

pub fn get_appointment(conn: &Connection, id: &Uuid) -> Result<Option<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, specialty, status, patient_id, created_at
         FROM appointments WHERE id = ?1",
    )?;
    let result = stmt.query_row(params![id.to_string()], read_appointment_row);

    match result {
        Ok(row) => Ok(Some(appointment_from_row(conn, row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn get_all_appointments(conn: &Connection) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, specialty, status, patient_id, created_at
         FROM appointments",
    )?;
    let rows = stmt.query_map([], read_appointment_row)?;

    let mut appointments = Vec::new();
    for row in rows {
        appointments.push(appointment_from_row(conn, row?)?);
    }
    Ok(appointments)
}

pub fn get_appointments_by_patient(
    conn: &Connection,
    patient_id: &Uuid,
) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, date, time, specialty, status, patient_id, created_at
         FROM appointments WHERE patient_id = ?1",
    )?;
    let rows = stmt.query_map(params![patient_id.to_string()], read_appointment_row)?;

    let mut appointments = Vec::new();
    for row in rows {
        appointments.push(appointment_from_row(conn, row?)?);
    }
    Ok(appointments)
}

/// Unconditional delete by id; deleting an id that does not exist is a
/// no-op success.
pub fn delete_appointment(conn: &Connection, id: &Uuid) -> Result<(), DatabaseError> {
    conn.execute(
        "DELETE FROM appointments WHERE id = ?1",
        params![id.to_string()],
    )?;
    Ok(())
}

struct AppointmentRow {
    id: String,
    date: String,
    time: String,
    specialty: String,
    status: String,
    patient_id: String,
    created_at: String,
}

fn read_appointment_row(row: &Row) -> rusqlite::Result<AppointmentRow> {
    Ok(AppointmentRow {
        id: row.get(0)?,
        date: row.get(1)?,
        time: row.get(2)?,
        specialty: row.get(3)?,
        status: row.get(4)?,
        patient_id: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Resolve the owning patient and build the full record. The FK guarantees
/// the patient row exists; a miss here means the store is corrupt.
fn appointment_from_row(conn: &Connection, row: AppointmentRow) -> Result<Appointment, DatabaseError> {
    let patient_id = Uuid::parse_str(&row.patient_id)
        .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;
    let patient = get_patient(conn, &patient_id)?.ok_or_else(|| DatabaseError::NotFound {
        entity_type: "Patient".into(),
        id: row.patient_id.clone(),
    })?;

    Ok(Appointment {
        id: Uuid::parse_str(&row.id)
            .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?,
        date: NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").unwrap_or_default(),
        time: NaiveTime::parse_from_str(&row.time, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&row.time, "%H:%M"))
            .unwrap_or_default(),
        specialty: row.specialty,
        status: AppointmentStatus::from_str(&row.status)?,
        patient,
        created_at: parse_timestamp(&row.created_at),
    })
}
