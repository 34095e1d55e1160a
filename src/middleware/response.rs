use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiError;

/// Wrapper for API responses that automatically adds success envelope
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status_code: Option<StatusCode>,
    pub message: Option<&'static str>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self {
            data,
            status_code: None, // Default to 200 OK
            message: None,
        }
    }

    /// Create an API response with custom status code
    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self {
            data,
            status_code: Some(status_code),
            message: None,
        }
    }

    /// Create a 201 Created response
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }

    pub fn with_message(mut self, message: Option<&'static str>) -> Self {
        self.message = message;
        self
    }

    /// Envelope body as JSON
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        let data = serde_json::to_value(&self.data)?;

        let mut envelope = json!({
            "success": true,
            "data": data,
        });

        if let Some(message) = self.message {
            envelope["message"] = json!(message);
        }

        Ok(envelope)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        match self.to_json() {
            Ok(envelope) => (status, Json(envelope)).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                ApiError::internal_server_error("Failed to serialize response data").into_response()
            }
        }
    }
}

// Convenience type alias
pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_with_message() {
        let response = ApiResponse::success(json!({"id_turno": 12}))
            .with_message(Some("Appointment confirmed"));

        assert_eq!(
            response.to_json().unwrap(),
            json!({
                "success": true,
                "message": "Appointment confirmed",
                "data": {"id_turno": 12}
            })
        );
    }

    #[test]
    fn test_envelope_without_message() {
        let body = ApiResponse::success(vec![1, 2]).to_json().unwrap();
        assert!(body.get("message").is_none());
        assert_eq!(body["data"], json!([1, 2]));
    }

    #[test]
    fn test_created_status() {
        let response = ApiResponse::created("ok").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
