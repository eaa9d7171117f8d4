/// Authentication middleware
use crate::{error::ServerError, state::AppState};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use tunedeck_core::types::User;

/// Extension type holding the authenticated user for a request
/// Can be used as an extractor in handlers
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl CurrentUser {
    pub fn user(&self) -> &User {
        &self.0
    }

    pub fn user_id(&self) -> &tunedeck_core::UserId {
        &self.0.id
    }
}

/// Middleware that extracts and validates the bearer token from the
/// Authorization header, then resolves it to a live user record
///
/// A valid signature is not enough: a token whose user has disappeared is
/// rejected the same way as a forged one.
pub async fn auth_middleware(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ServerError> {
    // Extract Authorization header
    let auth_header = request
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| ServerError::Unauthenticated("No token provided".to_string()))?;

    // Check Bearer prefix
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ServerError::Unauthenticated("No token provided".to_string()))?;

    // Verify token
    let user_id = app_state.auth_service.verify_token(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        ServerError::Unauthenticated("Invalid token".to_string())
    })?;

    // Resolve to a live user record
    let user = tunedeck_storage::users::get_by_id(&app_state.pool, &user_id)
        .await
        .map_err(ServerError::from)?
        .ok_or_else(|| ServerError::Unauthenticated("Invalid token".to_string()))?;

    // Insert user into request extensions for downstream handlers
    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Implement FromRequestParts so CurrentUser can be used as an extractor
#[axum::async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| ServerError::Unauthenticated("Not authenticated".to_string()))
    }
}
