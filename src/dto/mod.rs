//! DTO adapters: typed request objects composed from a [`Schema`].
//!
//! A [`Dto<T>`] pairs a schema with the struct it produces. The schema is
//! checked first, so deserializing into `T` only ever sees payloads that
//! already satisfy every declared constraint.

pub mod error;
pub mod requests;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::marker::PhantomData;

use crate::schema::{Schema, ValidationIssue, BODY_FIELD};

pub use error::ValidationException;
pub use requests::*;

/// Validator produced from a schema description
pub struct Dto<T> {
    schema: &'static Schema,
    _target: PhantomData<fn() -> T>,
}

impl<T> Clone for Dto<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Dto<T> {}

impl<T: DeserializeOwned> Dto<T> {
    pub fn new(schema: &'static Schema) -> Self {
        Self {
            schema,
            _target: PhantomData,
        }
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    pub fn validate(&self, raw: &Value) -> Result<T, ValidationIssue> {
        self.schema.check(raw)?;

        T::deserialize(raw).map_err(|e| {
            // Schema and struct disagree; surface it as a body-level issue
            tracing::error!("{} passed its schema but failed to deserialize: {}", self.schema.name(), e);
            ValidationIssue::new(BODY_FIELD, format!("request body does not match {}", self.schema.name()))
        })
    }

    /// Same as [`Dto::validate`], raising the failure as a [`ValidationException`]
    pub fn parse(&self, raw: &Value) -> Result<T, ValidationException> {
        self.validate(raw).map_err(ValidationException::new)
    }
}

/// Request bodies that know which schema guards them
pub trait RequestDto: DeserializeOwned + Send + 'static {
    fn schema() -> &'static Schema;

    fn dto() -> Dto<Self> {
        Dto::new(Self::schema())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_confirm_appointment_round_trip() {
        let raw = json!({"id_paciente": 5, "id_turno": 12});
        let confirm = ConfirmAppointment::dto().validate(&raw).unwrap();

        assert_eq!(confirm, ConfirmAppointment { id_paciente: 5, id_turno: 12 });
        assert_eq!(serde_json::to_value(&confirm).unwrap(), raw);
    }

    #[test]
    fn test_confirm_appointment_negative_patient() {
        let raw = json!({"id_paciente": -1, "id_turno": 12});
        let issue = ConfirmAppointment::dto().validate(&raw).unwrap_err();

        assert_eq!(issue.field_name, "id_paciente");
        assert_eq!(issue.message, "id_paciente must be a positive number");
    }

    #[test]
    fn test_unknown_keys_are_dropped() {
        let raw = json!({"id_paciente": 5, "id_turno": 12, "extra": true});
        let confirm = ConfirmAppointment::dto().validate(&raw).unwrap();
        assert_eq!(
            serde_json::to_value(&confirm).unwrap(),
            json!({"id_paciente": 5, "id_turno": 12})
        );
    }

    #[test]
    fn test_parse_raises_exception() {
        let err = CancelAppointment::dto().parse(&json!({"id_turno": "12"})).unwrap_err();
        assert_eq!(err.issue().field_name, "id_turno");
        assert_eq!(err.to_string(), "Validation failed on 'id_turno': id_turno must be an integer");
    }

    #[test]
    fn test_adapter_exposes_its_schema() {
        assert_eq!(CreateTreatment::dto().schema().name(), "CreateTreatment");
    }
}
