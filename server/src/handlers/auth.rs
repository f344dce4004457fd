//! Authentication endpoints: login challenge, confirmation, refresh.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use ticketd_auth::TokenPair;
use ticketd_web::AppError;

use crate::extract::RefreshingUser;
use crate::state::AppState;

/// Request to start a login challenge.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Registered email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Request to complete a login challenge.
#[derive(Debug, Deserialize)]
pub struct ConfirmLoginRequest {
    /// Registered email address.
    pub email: String,
    /// Six-digit code from the login email.
    pub code: String,
}

/// Simple message envelope.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable outcome.
    pub message: String,
}

/// A freshly minted access token.
#[derive(Debug, Serialize)]
pub struct AccessTokenResponse {
    /// Short-lived access token.
    pub access_token: String,
    /// Token scheme marker, always `"bearer"`.
    pub token_type: String,
}

/// `POST /auth/login`: verify the password and email a one-time code.
///
/// # Errors
///
/// 404 for an unknown email, 403 for a bad password, 500 if dispatch
/// fails.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .auth
        .request_login(&request.email, &request.password)
        .await?;
    Ok(Json(MessageResponse {
        message: "Login code sent".to_string(),
    }))
}

/// `POST /auth/confirm-login`: verify the code and issue the token pair.
///
/// # Errors
///
/// 404 for an unknown email, 400 for a missing or mismatching code.
pub async fn confirm_login(
    State(state): State<AppState>,
    Json(request): Json<ConfirmLoginRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let pair = state
        .auth
        .confirm_login(&request.email, &request.code)
        .await?;
    Ok(Json(pair))
}

/// `POST /auth/refresh-token`: mint a new access token.
///
/// Requires a refresh-kind bearer token; the refresh token itself is not
/// rotated.
///
/// # Errors
///
/// 401 for anything but a valid refresh token.
pub async fn refresh_token(
    State(state): State<AppState>,
    RefreshingUser(user): RefreshingUser,
) -> Result<Json<AccessTokenResponse>, AppError> {
    let access_token = state.auth.refresh_access_token(&user)?;
    Ok(Json(AccessTokenResponse {
        access_token,
        token_type: "bearer".to_string(),
    }))
}
