// handlers/system.rs - Public service endpoints: /, /health, /api/roles

use axum::{http::Uri, Extension};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::error::ApiError;
use crate::middleware::{ApiResponse, ApiResult};
use crate::policy::{self, RoutePolicy};
use crate::types::RoleCode;

/// GET / - Service description
pub async fn root() -> ApiResponse<Value> {
    let version = env!("CARGO_PKG_VERSION");

    ApiResponse::success(json!({
        "name": "Clinic API",
        "version": version,
        "endpoints": {
            "health": "/health (public)",
            "roles": "/api/roles (public)",
            "auth": "/api/auth/whoami (public, reports bearer identity)",
            "appointments": "/api/appointments/{confirm,cancel} (PATIENT, DOCTOR, ADMIN)",
            "treatments": "/api/treatments (DOCTOR)",
            "monitorings": "/api/monitorings (DOCTOR, LAB_OPERATOR)",
            "users": "/api/users (ADMIN)",
        }
    }))
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub routes: usize,
}

/// GET /health - Liveness check
pub async fn health() -> ApiResponse<Health> {
    ApiResponse::success(Health {
        status: "ok",
        timestamp: chrono::Utc::now(),
        routes: policy::registry().len(),
    })
}

/// GET /api/roles - Closed set of role codes
pub async fn roles(Extension(policy): Extension<Arc<RoutePolicy>>) -> ApiResult<Vec<&'static str>> {
    Ok(policy.respond(RoleCode::codes()))
}

/// Fallback for unmatched paths
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
