//! Auth service: login challenge, confirmation, token refresh, and the
//! authorization guard.
//!
//! The login state machine is `unchallenged → code_issued → confirmed`,
//! carried entirely by the user's confirmation-code column rather than an
//! explicit state record. A stored code marks a live challenge; clearing
//! it on confirmation makes each code single-use.

use std::sync::Arc;

use tracing::{info, warn};

use crate::code::generate_confirmation_code;
use crate::error::{AuthError, Result};
use crate::password::{hash_password, verify_password};
use crate::providers::{EmailSender, User, UserStore};
use crate::token::{TokenCodec, TokenKind, TokenPair};

/// Authentication service.
///
/// Orchestrates the email-code challenge/response flow over the credential
/// store, email sender, and token codec.
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    mailer: Arc<dyn EmailSender>,
    codec: TokenCodec,
}

impl AuthService {
    /// Create a new auth service.
    #[must_use]
    pub fn new(users: Arc<dyn UserStore>, mailer: Arc<dyn EmailSender>, codec: TokenCodec) -> Self {
        Self {
            users,
            mailer,
            codec,
        }
    }

    /// Register a new account and email the initial confirmation code.
    ///
    /// # Errors
    ///
    /// - Email already registered → `AuthError::EmailTaken`
    /// - Code dispatch failed → `AuthError::Email`; the account exists
    ///   and the stored code stays live
    pub async fn register(&self, email: &str, password: &str) -> Result<User> {
        let password_hash = hash_password(password)?;
        let user = self.users.insert(email, &password_hash).await?;

        let code = generate_confirmation_code();
        self.users
            .update_confirmation_code(email, Some(&code))
            .await?;
        self.mailer
            .send(
                email,
                "Confirm your registration",
                &format!("Your confirmation code is {code}."),
            )
            .await?;

        info!(email = %email, "user registered");
        Ok(user)
    }

    /// Start a login challenge: verify the password, then store and email
    /// a fresh one-time code.
    ///
    /// A new code overwrites any outstanding one; only one code is live
    /// per user. The email send is awaited, and its failure fails the
    /// operation; the freshly stored code remains until the next attempt
    /// overwrites it.
    ///
    /// # Errors
    ///
    /// - No account under this email → `AuthError::UserNotFound`
    /// - Password hash does not verify → `AuthError::InvalidPassword`
    /// - Dispatch failed → `AuthError::Email`
    pub async fn request_login(&self, email: &str, password: &str) -> Result<()> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !verify_password(password, &user.password_hash)? {
            warn!(email = %email, "login rejected: bad password");
            return Err(AuthError::InvalidPassword);
        }

        let code = generate_confirmation_code();
        self.users
            .update_confirmation_code(email, Some(&code))
            .await?;
        self.mailer
            .send(email, "Login code", &format!("Your login code is {code}."))
            .await?;

        info!(email = %email, "login code issued");
        Ok(())
    }

    /// Complete a login challenge: verify the code, clear it, and issue
    /// an access/refresh token pair.
    ///
    /// Code comparison is exact string equality, case-sensitive, no
    /// normalization. Clearing the code on success makes confirmation
    /// single-use: replaying the same code fails.
    ///
    /// # Errors
    ///
    /// - No account under this email → `AuthError::UserNotFound`
    /// - No live challenge, or code mismatch → `AuthError::InvalidCode`
    pub async fn confirm_login(&self, email: &str, code: &str) -> Result<TokenPair> {
        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if user.confirmation_code.as_deref() != Some(code) {
            warn!(email = %email, "login confirmation rejected");
            return Err(AuthError::InvalidCode);
        }

        self.users.update_confirmation_code(email, None).await?;

        let access = self.codec.issue(TokenKind::Access, &user.email)?;
        let refresh = self.codec.issue(TokenKind::Refresh, &user.email)?;
        info!(email = %email, "login confirmed, tokens issued");
        Ok(TokenPair::new(access, refresh))
    }

    /// Issue a new access token for an already-authorized refresh.
    ///
    /// The caller must have run the guard with [`TokenKind::Refresh`]
    /// first. The refresh token itself is not rotated or invalidated; it
    /// stays valid until its own expiry.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Internal` if signing fails.
    pub fn refresh_access_token(&self, user: &User) -> Result<String> {
        self.codec.issue(TokenKind::Access, &user.email)
    }

    /// Authorization guard: resolve a bearer token of the required kind
    /// to a user.
    ///
    /// Decode failure, kind mismatch, a missing subject, and an unknown
    /// subject all collapse to `AuthError::Unauthorized`; callers never
    /// learn which check failed. The kind cross-check prevents an access
    /// token being replayed against the refresh endpoint and vice versa.
    ///
    /// # Errors
    ///
    /// - Any validation failure → `AuthError::Unauthorized`
    /// - The store itself failed → `AuthError::Database`
    pub async fn current_user(&self, token: &str, required: TokenKind) -> Result<User> {
        let claims = self.codec.decode(token).ok_or(AuthError::Unauthorized)?;
        if claims.kind != required {
            return Err(AuthError::Unauthorized);
        }
        self.users
            .find_by_email(&claims.sub)
            .await?
            .ok_or(AuthError::Unauthorized)
    }
}
