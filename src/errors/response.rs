use axum::{
    response::{IntoResponse, Response, Json},
    http::StatusCode,
};
use serde_json::json;
use crate::errors::AppError;

// The IntoResponse trait implementation converts AppError into a well-formed
// HTTP response: a status code plus a JSON body carrying a human-readable
// message.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            // Missing or empty request fields are bad requests
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),

            // Unknown users and bad passwords share this variant so the
            // responses are indistinguishable
            AppError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),

            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),

            AppError::Conflict(msg) => (StatusCode::CONFLICT, msg),

            // Store and hashing failures are internal server errors; log the
            // cause and keep the body generic
            AppError::File(e) => {
                tracing::error!("Store I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }

            AppError::Hash(e) => {
                tracing::error!("Password hash error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }

            AppError::Json(e) => {
                tracing::error!("Store parse error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
