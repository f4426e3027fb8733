pub mod appointment;
pub mod appointment_type;
pub mod enums;
pub mod patient;

pub use appointment::Appointment;
pub use appointment_type::AppointmentType;
pub use patient::Patient;
