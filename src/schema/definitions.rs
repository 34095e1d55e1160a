// Request schemas for every mutating endpoint, built once on first use.

use once_cell::sync::Lazy;

use super::{Field, Schema, StringFormat};

/// Wire codes accepted wherever a payload names a role.
///
/// One entry per [`RoleCode`](crate::types::RoleCode) variant, spelled as
/// `RoleCode::as_str` returns it. Adding a role means updating both.
pub const ROLE_CODES: &[&str] = &["ADMIN", "DOCTOR", "PATIENT", "LAB_OPERATOR"];

pub static CONFIRM_APPOINTMENT: Lazy<Schema> = Lazy::new(|| {
    Schema::new("ConfirmAppointment")
        .field(Field::integer("id_paciente").positive())
        .field(Field::integer("id_turno").positive())
});

pub static CANCEL_APPOINTMENT: Lazy<Schema> = Lazy::new(|| {
    Schema::new("CancelAppointment")
        .field(Field::integer("id_turno").positive())
        .field(Field::string("motivo").optional().min_length(3))
});

pub static CREATE_TREATMENT: Lazy<Schema> = Lazy::new(|| {
    Schema::new("CreateTreatment")
        .field(Field::integer("id_paciente").positive())
        .field(Field::integer("id_medico").positive())
        .field(Field::string("protocolo").min_length(1))
        .field(Field::string("fecha_inicio").format(StringFormat::Date))
});

pub static CREATE_MONITORING: Lazy<Schema> = Lazy::new(|| {
    Schema::new("CreateMonitoring")
        .field(Field::integer("id_tratamiento").positive())
        .field(Field::string("fecha_atencion").format(StringFormat::DateTime))
        .field(Field::string("descripcion").optional())
        .field(Field::integer("folicular_count").optional().positive())
});

pub static CREATE_USER: Lazy<Schema> = Lazy::new(|| {
    Schema::new("CreateUser")
        .field(Field::string("email").format(StringFormat::Email))
        .field(Field::string("nombre").min_length(1))
        .field(Field::string("rol").one_of(ROLE_CODES))
});
