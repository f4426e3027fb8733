//! Repository layer — entity-scoped database operations.
//!
//! Free functions over `&Connection`; no logic beyond translating calls
//! to store queries. All public functions are re-exported here.

mod appointment;
mod appointment_type;
mod patient;

pub use appointment::*;
pub use appointment_type::*;
pub use patient::*;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, NaiveDate, NaiveTime};
    use rusqlite::Connection;
    use uuid::Uuid;

    use crate::db::sqlite::open_memory_database;
    use crate::db::DatabaseError;
    use crate::models::enums::{AppointmentStatus, IdentificationType};
    use crate::models::{Appointment, Patient};

    fn test_db() -> Connection {
        open_memory_database().unwrap()
    }

    fn make_patient(identification: &str) -> Patient {
        let now = Local::now().naive_local();
        Patient {
            id: Uuid::new_v4(),
            first_name: "Ana".into(),
            last_name: "Ruiz".into(),
            identification_number: identification.into(),
            identification_type: IdentificationType::Cc,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            email: Some("ana.ruiz@example.com".into()),
            phone_number: None,
            eps: None,
            address: None,
            blood_type: Some("O+".into()),
            height_cm: Some(165.0),
            weight_kg: None,
            sex_biological: None,
            gender_identity: None,
            marital_status: None,
            education_level: None,
            occupation: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            city: None,
            municipality: None,
            neighborhood: None,
            postal_code: None,
            housing_type: None,
            socioeconomic_stratum: Some(3),
            residence_duration_months: None,
            abdominal_circumference_cm: None,
            heart_rate_bpm: None,
            respiratory_rate_rpm: None,
            blood_pressure_sys: None,
            blood_pressure_dia: None,
            temperature_c: None,
            spo2: None,
            allergies: None,
            medications: None,
            surgeries: None,
            family_history: None,
            habits: None,
            vaccines: None,
            chronic_conditions: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn make_appointment(patient: &Patient) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            specialty: "Cardiología".into(),
            status: AppointmentStatus::Pending,
            patient: patient.clone(),
            created_at: Local::now().naive_local(),
        }
    }

    #[test]
    fn patient_insert_and_retrieve() {
        let conn = test_db();
        let patient = make_patient("CC-1001");
        insert_patient(&conn, &patient).unwrap();

        let stored = get_patient(&conn, &patient.id).unwrap().unwrap();
        assert_eq!(stored.first_name, "Ana");
        assert_eq!(stored.identification_number, "CC-1001");
        assert_eq!(stored.identification_type, IdentificationType::Cc);
        assert_eq!(stored.blood_type.as_deref(), Some("O+"));
        assert_eq!(stored.socioeconomic_stratum, Some(3));
        assert_eq!(stored.date_of_birth, patient.date_of_birth);
    }

    #[test]
    fn patient_lookup_by_identification() {
        let conn = test_db();
        let patient = make_patient("CC-2002");
        insert_patient(&conn, &patient).unwrap();

        let found = get_patient_by_identification(&conn, "CC-2002").unwrap();
        assert_eq!(found.unwrap().id, patient.id);

        let missing = get_patient_by_identification(&conn, "CC-9999").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn duplicate_identification_rejected_by_store() {
        let conn = test_db();
        insert_patient(&conn, &make_patient("CC-3003")).unwrap();

        let result = insert_patient(&conn, &make_patient("CC-3003"));
        assert!(matches!(
            result,
            Err(DatabaseError::ConstraintViolation(_))
        ));

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM patients", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn patient_update_replaces_all_fields() {
        let conn = test_db();
        let patient = make_patient("CC-4004");
        insert_patient(&conn, &patient).unwrap();

        let mut updated = patient.clone();
        updated.first_name = "Jane".into();
        updated.email = None;
        updated.occupation = Some("Ingeniera".into());
        updated.heart_rate_bpm = Some(72);
        update_patient(&conn, &updated).unwrap();

        let stored = get_patient(&conn, &patient.id).unwrap().unwrap();
        assert_eq!(stored.first_name, "Jane");
        assert!(stored.email.is_none());
        assert_eq!(stored.occupation.as_deref(), Some("Ingeniera"));
        assert_eq!(stored.heart_rate_bpm, Some(72));
    }

    #[test]
    fn patient_update_to_taken_identification_is_conflict() {
        let conn = test_db();
        insert_patient(&conn, &make_patient("CC-5005")).unwrap();
        let second = make_patient("CC-5006");
        insert_patient(&conn, &second).unwrap();

        let mut moved = second.clone();
        moved.identification_number = "CC-5005".into();
        let result = update_patient(&conn, &moved);
        assert!(matches!(
            result,
            Err(DatabaseError::ConstraintViolation(_))
        ));
    }

    #[test]
    fn patient_update_not_found() {
        let conn = test_db();
        let result = update_patient(&conn, &make_patient("CC-6006"));
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[test]
    fn patient_delete_is_idempotent() {
        let conn = test_db();
        let patient = make_patient("CC-7007");
        insert_patient(&conn, &patient).unwrap();

        delete_patient(&conn, &patient.id).unwrap();
        assert!(get_patient(&conn, &patient.id).unwrap().is_none());

        // Second delete of the same id is a no-op success
        delete_patient(&conn, &patient.id).unwrap();
    }

    #[test]
    fn patient_delete_cascades_appointments() {
        let conn = test_db();
        let patient = make_patient("CC-8008");
        insert_patient(&conn, &patient).unwrap();
        insert_appointment(&conn, &make_appointment(&patient)).unwrap();

        delete_patient(&conn, &patient.id).unwrap();

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM appointments", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn appointment_insert_and_retrieve_embeds_patient() {
        let conn = test_db();
        let patient = make_patient("CC-9009");
        insert_patient(&conn, &patient).unwrap();

        let appointment = make_appointment(&patient);
        insert_appointment(&conn, &appointment).unwrap();

        let stored = get_appointment(&conn, &appointment.id).unwrap().unwrap();
        assert_eq!(stored.specialty, "Cardiología");
        assert_eq!(stored.status, AppointmentStatus::Pending);
        assert_eq!(stored.time, NaiveTime::from_hms_opt(9, 0, 0).unwrap());
        assert_eq!(stored.patient.id, patient.id);
        assert_eq!(stored.patient.identification_number, "CC-9009");
    }

    #[test]
    fn appointment_foreign_key_enforced() {
        let conn = test_db();
        // Patient never inserted
        let orphan = make_patient("CC-0000");
        let result = insert_appointment(&conn, &make_appointment(&orphan));
        assert!(result.is_err());
    }

    #[test]
    fn appointments_by_patient_filters() {
        let conn = test_db();
        let ana = make_patient("CC-1111");
        let luis = make_patient("CC-2222");
        insert_patient(&conn, &ana).unwrap();
        insert_patient(&conn, &luis).unwrap();

        insert_appointment(&conn, &make_appointment(&ana)).unwrap();
        insert_appointment(&conn, &make_appointment(&ana)).unwrap();
        insert_appointment(&conn, &make_appointment(&luis)).unwrap();

        let for_ana = get_appointments_by_patient(&conn, &ana.id).unwrap();
        assert_eq!(for_ana.len(), 2);
        assert!(for_ana.iter().all(|a| a.patient.id == ana.id));

        let all = get_all_appointments(&conn).unwrap();
        assert_eq!(all.len(), 3);
    }

    #[test]
    fn appointment_delete_is_idempotent() {
        let conn = test_db();
        delete_appointment(&conn, &Uuid::new_v4()).unwrap();
    }

    #[test]
    fn appointment_types_sorted_by_name() {
        let conn = test_db();
        // Insert out of order relative to the seed data
        conn.execute(
            "INSERT INTO appointment_types (id, name) VALUES (?1, 'Urología'), (?2, 'Anestesiología')",
            rusqlite::params![Uuid::new_v4().to_string(), Uuid::new_v4().to_string()],
        )
        .unwrap();

        let types = get_all_appointment_types(&conn).unwrap();
        assert!(types.len() >= 12);
        assert_eq!(types.first().unwrap().name, "Anestesiología");
        assert_eq!(types.last().unwrap().name, "Urología");
        let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
