// handlers/session.rs - GET /api/auth/whoami handler

use axum::Extension;
use serde::Serialize;
use std::sync::Arc;

use crate::middleware::{ApiResult, CallerIdentity};
use crate::policy::RoutePolicy;

#[derive(Debug, Serialize)]
pub struct SessionInfo {
    pub authenticated: bool,
    pub user: Option<CallerIdentity>,
}

/// GET /api/auth/whoami - Describe the caller; anonymous callers are allowed
pub async fn whoami(
    Extension(policy): Extension<Arc<RoutePolicy>>,
    caller: Option<CallerIdentity>,
) -> ApiResult<SessionInfo> {
    Ok(policy.respond(SessionInfo {
        authenticated: caller.is_some(),
        user: caller,
    }))
}
