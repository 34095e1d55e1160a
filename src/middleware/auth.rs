use axum::{
    extract::{FromRequestParts, Request},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use serde::Serialize;

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::types::RoleCode;

/// Authenticated caller, extracted from a verified JWT
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CallerIdentity {
    pub user_id: i64,
    pub email: String,
    pub role: RoleCode,
}

impl From<Claims> for CallerIdentity {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
            role: claims.role,
        }
    }
}

/// Handlers that need an identity get a 401 when the request is anonymous
#[axum::async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CallerIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CallerIdentity>()
            .cloned()
            .ok_or_else(|| ApiError::unauthorized("Authentication required"))
    }
}

/// Establishes the caller identity from a bearer token when one is sent.
///
/// Requests without an Authorization header continue anonymously; route
/// guards decide whether that is acceptable. A header that is present but
/// malformed or carries an invalid token is rejected here.
pub async fn authenticate(mut request: Request, next: Next) -> Result<Response, ApiError> {
    let Some(token) = extract_jwt_from_headers(request.headers()).map_err(ApiError::unauthorized)? else {
        return Ok(next.run(request).await);
    };

    let claims = auth::validate_jwt(&token)?;
    let identity = CallerIdentity::from(claims);

    tracing::debug!(user_id = identity.user_id, role = %identity.role, "authenticated caller");
    request.extensions_mut().insert(identity);

    Ok(next.run(request).await)
}

/// Extract JWT token from Authorization header
fn extract_jwt_from_headers(headers: &HeaderMap) -> Result<Option<String>, String> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    // Scheme names are case-insensitive
    match auth_str.trim_start().split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") => {
            let token = token.trim();
            if token.is_empty() {
                return Err("Empty JWT token".to_string());
            }
            Ok(Some(token.to_string()))
        }
        _ => Err("Authorization header must use Bearer token format".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        assert_eq!(extract_jwt_from_headers(&HeaderMap::new()), Ok(None));
    }

    #[test]
    fn test_bearer_token_extracted() {
        assert_eq!(
            extract_jwt_from_headers(&headers("Bearer abc.def.ghi")),
            Ok(Some("abc.def.ghi".to_string()))
        );
    }

    #[test]
    fn test_rejects_other_schemes_and_empty_tokens() {
        assert!(extract_jwt_from_headers(&headers("Basic dXNlcjpwYXNz")).is_err());
        assert!(extract_jwt_from_headers(&headers("Bearer   ")).is_err());
        assert!(extract_jwt_from_headers(&headers("Bearerabc.def.ghi")).is_err());
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        for value in ["bearer abc.def.ghi", "BEARER abc.def.ghi", "BeArEr  abc.def.ghi"] {
            assert_eq!(
                extract_jwt_from_headers(&headers(value)),
                Ok(Some("abc.def.ghi".to_string()))
            );
        }
    }
}
