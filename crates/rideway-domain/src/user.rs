//! User domain types.

use serde::{Deserialize, Serialize};

/// Account role.
///
/// Wire format: lowercase string (`"passenger"` | `"driver"`), matching the
/// `users.role` column. Every account starts as a passenger; the role flips to
/// driver when a driver profile is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Passenger,
    Driver,
}

impl Role {
    /// Convert from the stored string value. Returns `None` for unknown values.
    pub fn from_name(v: &str) -> Option<Self> {
        match v {
            "passenger" => Some(Self::Passenger),
            "driver" => Some(Self::Driver),
            _ => None,
        }
    }

    /// Convert to the stored string value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Passenger => "passenger",
            Self::Driver => "driver",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Passenger
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_name_to_role() {
        assert_eq!(Role::from_name("passenger"), Some(Role::Passenger));
        assert_eq!(Role::from_name("driver"), Some(Role::Driver));
        assert_eq!(Role::from_name("admin"), None);
        assert_eq!(Role::from_name(""), None);
    }

    #[test]
    fn should_convert_role_to_name() {
        assert_eq!(Role::Passenger.as_str(), "passenger");
        assert_eq!(Role::Driver.as_str(), "driver");
    }

    #[test]
    fn should_default_to_passenger() {
        assert_eq!(Role::default(), Role::Passenger);
    }

    #[test]
    fn should_round_trip_role_via_serde() {
        for role in [Role::Passenger, Role::Driver] {
            let json = serde_json::to_string(&role).unwrap();
            let parsed: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn should_serialize_role_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Role::Passenger).unwrap(),
            "\"passenger\""
        );
        assert_eq!(serde_json::to_string(&Role::Driver).unwrap(), "\"driver\"");
    }
}
