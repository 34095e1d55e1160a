/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role codes attached to authenticated callers and to route policies.
/// The set is closed: tokens carrying any other code fail to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoleCode {
    Admin,
    Doctor,
    Patient,
    LabOperator,
}

impl RoleCode {
    pub const ALL: [RoleCode; 4] = [
        RoleCode::Admin,
        RoleCode::Doctor,
        RoleCode::Patient,
        RoleCode::LabOperator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCode::Admin => "ADMIN",
            RoleCode::Doctor => "DOCTOR",
            RoleCode::Patient => "PATIENT",
            RoleCode::LabOperator => "LAB_OPERATOR",
        }
    }

    /// Wire codes for every role, in declaration order
    pub fn codes() -> Vec<&'static str> {
        Self::ALL.iter().map(RoleCode::as_str).collect()
    }
}

impl fmt::Display for RoleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Appointment states reported back after a mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role code: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for RoleCode {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_as_wire_code() {
        let json = serde_json::to_value(RoleCode::LabOperator).unwrap();
        assert_eq!(json, "LAB_OPERATOR");

        let role: RoleCode = serde_json::from_value(serde_json::json!("DOCTOR")).unwrap();
        assert_eq!(role, RoleCode::Doctor);
    }

    #[test]
    fn test_role_from_str_is_case_insensitive() {
        assert_eq!("patient".parse::<RoleCode>(), Ok(RoleCode::Patient));
        assert_eq!(" ADMIN ".parse::<RoleCode>(), Ok(RoleCode::Admin));
        assert!("NURSE".parse::<RoleCode>().is_err());
    }

    #[test]
    fn test_codes_match_as_str() {
        assert_eq!(RoleCode::codes(), vec!["ADMIN", "DOCTOR", "PATIENT", "LAB_OPERATOR"]);
    }
}
