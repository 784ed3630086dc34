// Defines a custom error type and a result type alias for the service using
// the thiserror crate.
use thiserror::Error;

// Make the response module public
pub mod response;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    // The #[from] attributes convert store I/O, hashing and serialization
    // failures into AppError via the From trait.
    #[error("File error: {0}")]
    File(#[from] std::io::Error),

    #[error("Hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Custom result type
pub type AppResult<T> = Result<T, AppError>;
