//! User endpoints: registration and the current-user lookup.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ticketd_auth::User;
use ticketd_web::AppError;

use crate::extract::CurrentUser;
use crate::state::AppState;

/// Request to register a new account.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email address; becomes the account identifier.
    pub email: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Public view of a user record.
///
/// Never carries the password hash or the confirmation code.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User id.
    pub id: i64,
    /// Email address.
    pub email: String,
    /// Account created timestamp.
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            created_at: user.created_at,
        }
    }
}

/// `POST /users/register`: create an account and email the initial
/// confirmation code.
///
/// # Errors
///
/// 409 if the email is already registered, 500 if code dispatch fails.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.auth.register(&request.email, &request.password).await?;
    Ok(Json(user.into()))
}

/// `GET /users/users/me`: the authenticated user's record.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<UserResponse> {
    Json(user.into())
}
