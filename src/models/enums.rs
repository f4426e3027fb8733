use crate::db::DatabaseError;
use serde::{Deserialize, Serialize};

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde rename matches the stored form exactly, so the same
/// uppercase token round-trips through both JSON and the database.
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = DatabaseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(DatabaseError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

// Colombian identification document classes: cédula de ciudadanía,
// tarjeta de identidad (minors), cédula de extranjería.
str_enum!(IdentificationType {
    Cc => "CC",
    Ti => "TI",
    Ce => "CE",
});

// Free-standing status value; no transition rules are enforced anywhere.
str_enum!(AppointmentStatus {
    Pending => "PENDING",
    Completed => "COMPLETED",
    Cancelled => "CANCELLED",
});

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn identification_type_round_trip() {
        for (variant, s) in [
            (IdentificationType::Cc, "CC"),
            (IdentificationType::Ti, "TI"),
            (IdentificationType::Ce, "CE"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(IdentificationType::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn appointment_status_round_trip() {
        for (variant, s) in [
            (AppointmentStatus::Pending, "PENDING"),
            (AppointmentStatus::Completed, "COMPLETED"),
            (AppointmentStatus::Cancelled, "CANCELLED"),
        ] {
            assert_eq!(variant.as_str(), s);
            assert_eq!(AppointmentStatus::from_str(s).unwrap(), variant);
        }
    }

    #[test]
    fn unknown_status_is_invalid_enum() {
        let err = AppointmentStatus::from_str("RESCHEDULED").unwrap_err();
        assert!(matches!(err, DatabaseError::InvalidEnum { .. }));
    }

    #[test]
    fn status_serializes_as_wire_token() {
        let json = serde_json::to_string(&AppointmentStatus::Pending).unwrap();
        assert_eq!(json, "\"PENDING\"");
        let back: AppointmentStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(back, AppointmentStatus::Cancelled);
    }
}
