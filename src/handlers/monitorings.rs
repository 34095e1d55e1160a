// handlers/monitorings.rs - POST /api/monitorings handler

use axum::Extension;
use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;
use std::sync::Arc;

use crate::dto::CreateMonitoring;
use crate::middleware::{ApiResult, CallerIdentity, ValidatedJson};
use crate::policy::RoutePolicy;

#[derive(Debug, Serialize)]
pub struct MonitoringEntry {
    pub id_tratamiento: i64,
    pub fecha_atencion: DateTime<FixedOffset>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folicular_count: Option<i64>,
    pub recorded_by: i64,
    pub recorded_at: DateTime<Utc>,
}

/// POST /api/monitorings - Record a monitoring visit within a treatment
pub async fn create(
    Extension(policy): Extension<Arc<RoutePolicy>>,
    caller: CallerIdentity,
    ValidatedJson(body): ValidatedJson<CreateMonitoring>,
) -> ApiResult<MonitoringEntry> {
    tracing::info!(id_tratamiento = body.id_tratamiento, by = caller.user_id, "monitoring entry created");

    Ok(policy.respond_created(MonitoringEntry {
        id_tratamiento: body.id_tratamiento,
        fecha_atencion: body.fecha_atencion,
        // Blank notes are dropped
        descripcion: body
            .descripcion
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty()),
        folicular_count: body.folicular_count,
        recorded_by: caller.user_id,
        recorded_at: Utc::now(),
    }))
}
