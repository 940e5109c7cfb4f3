use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::observability::RequestSpan;
use super::validation::required_text;
use super::{
    ApiError, AppState, LoginRequest, LoginResponse, MessageResponse, Payload, RegisterRequest,
};
use crate::models::user::NewUser;

// ============================================================================
// Middleware
// ============================================================================

/// Requires `Authorization: Bearer <access token>`.
/// On success the verified [`crate::services::Claims`] are stored in the request extensions.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(request.headers())
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization Header".to_string()))?;

    let claims = state.auth_service().verify_token(&token)?;

    if let Some(RequestSpan(span)) = request.extensions().get::<RequestSpan>() {
        span.record("user_id", claims.sub.as_str());
    }
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}

fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    (!token.is_empty()).then(|| token.to_string())
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Payload(payload): Payload<RegisterRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let user = NewUser {
        email: required_text("email", payload.email)?,
        first_name: required_text("first_name", payload.first_name)?,
        last_name: required_text("last_name", payload.last_name)?,
        password: required_text("password", payload.password)?,
    };

    state.auth_service().register(user).await?;

    Ok(Json(MessageResponse::new("User added to database")))
}

/// POST /login
/// Authenticate with email and password, returns an access token on success
pub async fn login(
    State(state): State<Arc<AppState>>,
    Payload(payload): Payload<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let email = required_text("email", payload.email)?;
    let password = required_text("password", payload.password)?;

    let result = state.auth_service().login(&email, &password).await?;
    tracing::debug!("Issued access token for {}", result.email);

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        access_token: result.access_token,
    }))
}
