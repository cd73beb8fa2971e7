use crate::dto::HealthResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    Unauthorized,
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ApiError::Unauthorized => "Unauthorized",
            ApiError::NotFound => "Not Found",
        }
    }
}

/// Convert our errors to HTTP responses
///
/// Every error uses the same envelope as a healthy response, with
/// `status: "error"` and a `message`, so clients only parse one shape.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(HealthResponse::error(self.message())),
        )
            .into_response()
    }
}
