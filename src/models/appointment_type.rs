use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Read-only specialty/visit-type lookup entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentType {
    pub id: Uuid,
    pub name: String,
}
