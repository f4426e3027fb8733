use rusqlite::Connection;
use uuid::Uuid;

use crate::db::DatabaseError;
use crate::models::AppointmentType;

/// Name-ascending, id as the deterministic tiebreak.
pub fn get_all_appointment_types(conn: &Connection) -> Result<Vec<AppointmentType>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name FROM appointment_types ORDER BY name ASC, id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(AppointmentType {
            id: Uuid::parse_str(&row.get::<_, String>(0)?).unwrap_or_default(),
            name: row.get(1)?,
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
