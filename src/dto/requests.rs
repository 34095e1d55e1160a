// Typed request bodies, one per mutating endpoint.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

use super::RequestDto;
use crate::schema::{self, Schema};
use crate::types::RoleCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmAppointment {
    pub id_paciente: i64,
    pub id_turno: i64,
}

impl RequestDto for ConfirmAppointment {
    fn schema() -> &'static Schema {
        &schema::CONFIRM_APPOINTMENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAppointment {
    pub id_turno: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
}

impl RequestDto for CancelAppointment {
    fn schema() -> &'static Schema {
        &schema::CANCEL_APPOINTMENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTreatment {
    pub id_paciente: i64,
    pub id_medico: i64,
    pub protocolo: String,
    pub fecha_inicio: NaiveDate,
}

impl RequestDto for CreateTreatment {
    fn schema() -> &'static Schema {
        &schema::CREATE_TREATMENT
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateMonitoring {
    pub id_tratamiento: i64,
    pub fecha_atencion: DateTime<FixedOffset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folicular_count: Option<i64>,
}

impl RequestDto for CreateMonitoring {
    fn schema() -> &'static Schema {
        &schema::CREATE_MONITORING
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub nombre: String,
    pub rol: RoleCode,
}

impl RequestDto for CreateUser {
    fn schema() -> &'static Schema {
        &schema::CREATE_USER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_treatment_parses_start_date() {
        let raw = json!({
            "id_paciente": 5,
            "id_medico": 2,
            "protocolo": "FIV-ICSI",
            "fecha_inicio": "2026-03-01"
        });
        let treatment = CreateTreatment::dto().validate(&raw).unwrap();
        assert_eq!(treatment.fecha_inicio, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap());
        assert_eq!(serde_json::to_value(&treatment).unwrap(), raw);
    }

    #[test]
    fn test_monitoring_keeps_offset() {
        let raw = json!({
            "id_tratamiento": 9,
            "fecha_atencion": "2026-03-04T09:30:00-03:00",
            "folicular_count": 7
        });
        let monitoring = CreateMonitoring::dto().validate(&raw).unwrap();
        assert_eq!(monitoring.fecha_atencion.offset().local_minus_utc(), -3 * 3600);
        assert_eq!(monitoring.folicular_count, Some(7));
        assert!(monitoring.descripcion.is_none());
    }

    #[test]
    fn test_user_role_is_typed() {
        let raw = json!({"email": "lab@clinica.com", "nombre": "Lucia", "rol": "LAB_OPERATOR"});
        let user = CreateUser::dto().validate(&raw).unwrap();
        assert_eq!(user.rol, RoleCode::LabOperator);
    }

    #[test]
    fn test_cancel_without_reason() {
        let cancel = CancelAppointment::dto().validate(&json!({"id_turno": 4})).unwrap();
        assert_eq!(cancel, CancelAppointment { id_turno: 4, motivo: None });
    }
}
