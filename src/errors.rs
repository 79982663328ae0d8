use actix_web::http::StatusCode;
use actix_web::{error, HttpRequest, HttpResponse, ResponseError};
use serde_json::json;
use std::fmt;

/// Every failure a handler can report, rendered as `{"error": <message>}`
/// with the mapped status code.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed required field.
    Validation(String),
    /// Uniqueness invariant violated at creation.
    Conflict(String),
    /// Unknown identifier, or an empty collection on the resources that
    /// treat an empty list as an error.
    NotFound(String),
    /// Login failure. Single message for unknown email and wrong password.
    InvalidCredentials,
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(msg)
            | ApiError::Conflict(msg)
            | ApiError::NotFound(msg)
            | ApiError::Internal(msg) => f.write_str(msg),
            ApiError::InvalidCredentials => f.write_str("Invalid email or password"),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) | ApiError::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if let ApiError::Internal(msg) = self {
            log::error!("Internal error: {}", msg);
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}

/// Rewrites body-deserialization failures into the same `{"error": ...}`
/// shape the handlers use.
pub fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let resp = HttpResponse::BadRequest().json(json!({ "error": "Invalid request body" }));
    error::InternalError::from_response(err, resp).into()
}
