use axum::{
    extract::State,
    response::{IntoResponse, Response, Json},
    http::StatusCode,
};
use serde_json::json;
use crate::errors::{AppError, AppResult};
use crate::models::CredentialsForm;
use crate::services::{TaskRegistry, UserStore};

pub async fn handle_register(
    State((_, users)): State<(TaskRegistry, UserStore)>,
    Json(form): Json<CredentialsForm>,
) -> AppResult<Response> {
    let (username, password) = require_credentials(form)?;
    tracing::info!("Registration attempt for user: {}", username);

    users.register(&username, &password).await?;

    tracing::info!("Registered user: {}", username);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "User registered successfully" })),
    )
        .into_response())
}

#[axum::debug_handler]
pub async fn handle_login(
    State((_, users)): State<(TaskRegistry, UserStore)>,
    Json(form): Json<CredentialsForm>,
) -> AppResult<Response> {
    let (username, password) = require_credentials(form)?;
    tracing::info!("Login attempt for user: {}", username);

    users.verify(&username, &password).await?;

    tracing::info!("Password verified for user: {}", username);
    Ok(Json(json!({ "message": "Login successful" })).into_response())
}

// Both credential routes need a present, non-empty username and password; an
// empty string counts as missing.
fn require_credentials(form: CredentialsForm) -> AppResult<(String, String)> {
    match (form.username, form.password) {
        (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
            Ok((username, password))
        }
        _ => Err(AppError::Validation(
            "Username and password are required".into(),
        )),
    }
}
