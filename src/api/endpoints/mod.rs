//! API endpoint handlers.
//!
//! One module per resource. Handlers translate requests into domain
//! calls and map outcomes to status codes via `ApiError`.

pub mod appointment_types;
pub mod appointments;
pub mod health;
pub mod patients;
