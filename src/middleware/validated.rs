use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde_json::Value;

use crate::dto::RequestDto;
use crate::error::ApiError;

/// JSON body checked against the request type's schema.
///
/// Malformed JSON is rejected by the inner `Json` extractor; a well-formed
/// body that breaks a constraint raises a validation exception naming the
/// first offending field.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: RequestDto,
{
    type Rejection = ApiError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(raw) = Json::<Value>::from_request(request, state).await?;

        let dto = T::dto();
        let value = dto.parse(&raw).map_err(|err| {
            tracing::debug!(schema = dto.schema().name(), "{}", err);
            err
        })?;

        Ok(ValidatedJson(value))
    }
}
