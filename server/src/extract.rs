//! Authentication extractors.
//!
//! Handler parameters that run the authorization guard before the handler
//! body executes. `CurrentUser` requires an access-kind token,
//! `RefreshingUser` a refresh-kind token; the kinds never interchange.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use ticketd_auth::{TokenKind, User};
use ticketd_web::{AppError, BearerToken};

use crate::state::AppState;

/// The authenticated user, resolved from an access-kind bearer token.
///
/// Use as a handler parameter to require authentication:
///
/// ```ignore
/// async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
///     Json(user.into())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let user = state
            .auth
            .current_user(&token, TokenKind::Access)
            .await
            .map_err(AppError::from)?;
        Ok(Self(user))
    }
}

/// The authenticated user, resolved from a refresh-kind bearer token.
///
/// Only the refresh endpoint accepts this kind.
#[derive(Debug, Clone)]
pub struct RefreshingUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for RefreshingUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let user = state
            .auth
            .current_user(&token, TokenKind::Refresh)
            .await
            .map_err(AppError::from)?;
        Ok(Self(user))
    }
}
