/// Registration and login handlers
use crate::{
    error::{Result, ServerError},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tunedeck_core::types::User;
use tunedeck_storage::users;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

fn validate_registration(req: &RegisterRequest) -> Result<(String, String)> {
    let username = req.username.trim().to_string();
    if username.len() < 3 || username.len() > 20 {
        return Err(ServerError::Validation(
            "Username must be between 3 and 20 characters".to_string(),
        ));
    }

    // Emails are normalized to lowercase so lookups stay case-insensitive
    let email = req.email.trim().to_lowercase();
    if email.is_empty() || !email.contains('@') {
        return Err(ServerError::Validation(
            "A valid email address is required".to_string(),
        ));
    }

    if req.password.len() < 6 {
        return Err(ServerError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    Ok((username, email))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let (username, email) = validate_registration(&req)?;

    if users::username_or_email_exists(&state.pool, &username, &email).await? {
        return Err(ServerError::Conflict("username or email".to_string()));
    }

    let password_hash = state.auth_service.hash_password(&req.password)?;

    let user = User::new(username, email);
    users::create_with_credentials(&state.pool, &user, &password_hash).await?;

    let token = state.auth_service.issue_token(&user.id)?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok((StatusCode::CREATED, Json(AuthResponse { token, user })))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password produce the same error so accounts
/// cannot be enumerated.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let email = req.email.trim().to_lowercase();

    let user = users::find_by_email(&state.pool, &email)
        .await?
        .ok_or(ServerError::InvalidCredentials)?;

    let hash = users::get_password_hash(&state.pool, &user.id)
        .await?
        .ok_or(ServerError::InvalidCredentials)?;

    if !state.auth_service.verify_password(&req.password, &hash)? {
        return Err(ServerError::InvalidCredentials);
    }

    let token = state.auth_service.issue_token(&user.id)?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Json(AuthResponse { token, user }))
}
