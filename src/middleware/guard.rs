use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use thiserror::Error;

use super::auth::CallerIdentity;
use crate::error::ApiError;
use crate::policy::RoutePolicy;
use crate::types::RoleCode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorizationError {
    #[error("route requires an authenticated caller")]
    Unauthenticated,

    #[error("role {caller} is not permitted on this route")]
    Forbidden { caller: RoleCode },
}

/// Role membership check.
///
/// `None` means the route is unrestricted. `Some(&[])` admits nobody.
pub fn check_roles(
    allowed: Option<&[RoleCode]>,
    caller: Option<RoleCode>,
) -> Result<(), AuthorizationError> {
    let Some(allowed) = allowed else {
        return Ok(());
    };

    let caller = caller.ok_or(AuthorizationError::Unauthenticated)?;

    if allowed.contains(&caller) {
        Ok(())
    } else {
        Err(AuthorizationError::Forbidden { caller })
    }
}

/// Per-route guard. Runs after [`super::authenticate`] and before body extraction.
///
/// On success the route policy is placed in request extensions so the
/// handler can build its envelope from it.
pub async fn authorize(
    State(policy): State<Arc<RoutePolicy>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let caller = request.extensions().get::<CallerIdentity>().map(|c| c.role);

    if let Err(err) = check_roles(policy.allowed_roles.as_deref(), caller) {
        tracing::warn!(
            route = policy.name,
            caller = ?caller,
            required = ?policy.allowed_roles,
            "authorization denied: {}", err
        );
        return Err(err.into());
    }

    request.extensions_mut().insert(policy);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use RoleCode::*;

    #[test]
    fn test_member_role_allowed() {
        assert_eq!(check_roles(Some(&[Doctor]), Some(Doctor)), Ok(()));
    }

    #[test]
    fn test_non_member_role_forbidden() {
        assert_eq!(
            check_roles(Some(&[Doctor]), Some(Patient)),
            Err(AuthorizationError::Forbidden { caller: Patient })
        );
    }

    #[test]
    fn test_unrestricted_never_rejects() {
        for role in RoleCode::ALL {
            assert_eq!(check_roles(None, Some(role)), Ok(()));
        }
        assert_eq!(check_roles(None, None), Ok(()));
    }

    #[test]
    fn test_empty_list_fails_closed() {
        for role in RoleCode::ALL {
            assert_eq!(
                check_roles(Some(&[]), Some(role)),
                Err(AuthorizationError::Forbidden { caller: role })
            );
        }
        assert_eq!(check_roles(Some(&[]), None), Err(AuthorizationError::Unauthenticated));
    }

    #[test]
    fn test_restricted_route_needs_identity() {
        assert_eq!(
            check_roles(Some(&[Admin, Doctor]), None),
            Err(AuthorizationError::Unauthenticated)
        );
    }
}
