// handlers/treatments.rs - POST /api/treatments handler

use axum::Extension;
use chrono::NaiveDate;
use serde::Serialize;
use std::sync::Arc;

use crate::dto::CreateTreatment;
use crate::middleware::{ApiResult, CallerIdentity, ValidatedJson};
use crate::policy::RoutePolicy;

#[derive(Debug, Serialize)]
pub struct TreatmentRecord {
    pub id_paciente: i64,
    pub id_medico: i64,
    pub protocolo: String,
    pub fecha_inicio: NaiveDate,
    pub created_by: i64,
}

/// POST /api/treatments - Open a treatment for a patient
pub async fn create(
    Extension(policy): Extension<Arc<RoutePolicy>>,
    caller: CallerIdentity,
    ValidatedJson(body): ValidatedJson<CreateTreatment>,
) -> ApiResult<TreatmentRecord> {
    tracing::info!(
        id_paciente = body.id_paciente,
        id_medico = body.id_medico,
        protocolo = %body.protocolo,
        "treatment created"
    );

    Ok(policy.respond_created(TreatmentRecord {
        id_paciente: body.id_paciente,
        id_medico: body.id_medico,
        protocolo: body.protocolo.trim().to_string(),
        fecha_inicio: body.fecha_inicio,
        created_by: caller.user_id,
    }))
}
