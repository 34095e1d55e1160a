// handlers/users.rs - POST /api/users handler

use axum::Extension;
use serde::Serialize;
use std::sync::Arc;

use crate::dto::CreateUser;
use crate::middleware::{ApiResult, CallerIdentity, ValidatedJson};
use crate::policy::RoutePolicy;
use crate::types::RoleCode;

#[derive(Debug, Serialize)]
pub struct UserRecord {
    pub email: String,
    pub nombre: String,
    pub rol: RoleCode,
    pub created_by: i64,
}

/// POST /api/users - Register a staff or patient account
pub async fn create(
    Extension(policy): Extension<Arc<RoutePolicy>>,
    caller: CallerIdentity,
    ValidatedJson(body): ValidatedJson<CreateUser>,
) -> ApiResult<UserRecord> {
    tracing::info!(rol = %body.rol, by = caller.user_id, "user created");

    Ok(policy.respond_created(UserRecord {
        email: body.email.to_lowercase(),
        nombre: body.nombre.trim().to_string(),
        rol: body.rol,
        created_by: caller.user_id,
    }))
}
