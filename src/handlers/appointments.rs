// handlers/appointments.rs - POST /api/appointments/{confirm,cancel} handlers

use axum::Extension;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::dto::{CancelAppointment, ConfirmAppointment};
use crate::middleware::{ApiResult, CallerIdentity, ValidatedJson};
use crate::policy::RoutePolicy;
use crate::types::AppointmentStatus;

#[derive(Debug, Serialize)]
pub struct AppointmentConfirmation {
    pub id_paciente: i64,
    pub id_turno: i64,
    pub estado: AppointmentStatus,
    pub confirmed_by: i64,
    pub confirmed_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct AppointmentCancellation {
    pub id_turno: i64,
    pub estado: AppointmentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub motivo: Option<String>,
    pub cancelled_by: i64,
    pub cancelled_at: DateTime<Utc>,
}

/// POST /api/appointments/confirm - Confirm a patient's slot
pub async fn confirm(
    Extension(policy): Extension<Arc<RoutePolicy>>,
    caller: CallerIdentity,
    ValidatedJson(body): ValidatedJson<ConfirmAppointment>,
) -> ApiResult<AppointmentConfirmation> {
    tracing::info!(
        id_paciente = body.id_paciente,
        id_turno = body.id_turno,
        by = caller.user_id,
        "appointment confirmed"
    );

    Ok(policy.respond(AppointmentConfirmation {
        id_paciente: body.id_paciente,
        id_turno: body.id_turno,
        estado: AppointmentStatus::Confirmed,
        confirmed_by: caller.user_id,
        confirmed_at: Utc::now(),
    }))
}

/// POST /api/appointments/cancel - Cancel a booked slot
pub async fn cancel(
    Extension(policy): Extension<Arc<RoutePolicy>>,
    caller: CallerIdentity,
    ValidatedJson(body): ValidatedJson<CancelAppointment>,
) -> ApiResult<AppointmentCancellation> {
    tracing::info!(id_turno = body.id_turno, by = caller.user_id, "appointment cancelled");

    Ok(policy.respond(AppointmentCancellation {
        id_turno: body.id_turno,
        estado: AppointmentStatus::Cancelled,
        motivo: body.motivo.map(|m| m.trim().to_string()),
        cancelled_by: caller.user_id,
        cancelled_at: Utc::now(),
    }))
}
