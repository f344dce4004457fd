//! Auth flow integration tests.
//!
//! Exercises the full challenge/response login flow over the in-memory
//! credential store and a recording email sender: registration, password
//! check, code issuance and single use, token pair issuance, refresh,
//! and the guard's kind cross-check.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::sync::Arc;

use ticketd_auth::{
    AuthError, AuthService, TokenCodec, TokenConfig, TokenKind,
    providers::{EmailSender, RecordingEmailSender, UserStore},
    stores::MemoryUserStore,
};

struct Harness {
    service: AuthService,
    users: Arc<MemoryUserStore>,
    mailer: Arc<RecordingEmailSender>,
}

fn harness() -> Harness {
    harness_with_config(TokenConfig::new("test-secret".to_string()))
}

fn harness_with_config(config: TokenConfig) -> Harness {
    let users = Arc::new(MemoryUserStore::new());
    let mailer = Arc::new(RecordingEmailSender::new());
    let service = AuthService::new(
        Arc::clone(&users) as Arc<dyn UserStore>,
        Arc::clone(&mailer) as Arc<dyn EmailSender>,
        TokenCodec::from_config(&config),
    );
    Harness {
        service,
        users,
        mailer,
    }
}

/// Pull the six-digit code out of an emailed body like
/// "Your login code is 123456.".
fn code_in(body: &str) -> String {
    body.chars().filter(char::is_ascii_digit).collect()
}

#[tokio::test]
async fn test_register_stores_code_and_sends_email() {
    let h = harness();

    let user = h.service.register("a@x.com", "pw").await.expect("register");
    assert_eq!(user.email, "a@x.com");
    assert_ne!(user.password_hash, "pw");

    let stored = h.users.find_by_email("a@x.com").await.unwrap().unwrap();
    let code = stored.confirmation_code.expect("code stored at registration");

    let email = h.mailer.last().expect("email sent");
    assert_eq!(email.to, "a@x.com");
    assert_eq!(email.subject, "Confirm your registration");
    assert_eq!(code_in(&email.body), code);
}

#[tokio::test]
async fn test_register_duplicate_email_fails() {
    let h = harness();
    h.service.register("a@x.com", "pw").await.unwrap();

    let err = h.service.register("a@x.com", "pw2").await.unwrap_err();
    assert_eq!(err, AuthError::EmailTaken);
}

#[tokio::test]
async fn test_request_login_unknown_email_is_not_found() {
    let h = harness();
    let err = h.service.request_login("ghost@x.com", "pw").await.unwrap_err();
    assert_eq!(err, AuthError::UserNotFound);
}

#[tokio::test]
async fn test_request_login_wrong_password_is_rejected() {
    let h = harness();
    h.service.register("a@x.com", "pw").await.unwrap();

    let err = h.service.request_login("a@x.com", "wrong").await.unwrap_err();
    assert_eq!(err, AuthError::InvalidPassword);
}

#[tokio::test]
async fn test_request_login_overwrites_previous_code() {
    let h = harness();
    h.service.register("a@x.com", "pw").await.unwrap();

    h.service.request_login("a@x.com", "pw").await.unwrap();
    let first = h
        .users
        .find_by_email("a@x.com")
        .await
        .unwrap()
        .unwrap()
        .confirmation_code
        .unwrap();

    h.service.request_login("a@x.com", "pw").await.unwrap();
    let second = h
        .users
        .find_by_email("a@x.com")
        .await
        .unwrap()
        .unwrap()
        .confirmation_code
        .unwrap();

    // Only the latest code confirms; the overwritten one is dead.
    if first != second {
        let err = h.service.confirm_login("a@x.com", &first).await.unwrap_err();
        assert_eq!(err, AuthError::InvalidCode);
    }
    h.service.confirm_login("a@x.com", &second).await.unwrap();
}

#[tokio::test]
async fn test_email_failure_fails_login_request() {
    let h = harness();
    h.service.register("a@x.com", "pw").await.unwrap();

    h.mailer.set_failing(true);
    let err = h.service.request_login("a@x.com", "pw").await.unwrap_err();
    assert!(matches!(err, AuthError::Email(_)));

    // The stored code survives the failed dispatch.
    let stored = h.users.find_by_email("a@x.com").await.unwrap().unwrap();
    assert!(stored.confirmation_code.is_some());
}

#[tokio::test]
async fn test_confirm_login_issues_both_tokens_and_clears_code() {
    let h = harness();
    h.service.register("a@x.com", "pw").await.unwrap();
    h.service.request_login("a@x.com", "pw").await.unwrap();

    let code = code_in(&h.mailer.last().unwrap().body);
    let pair = h.service.confirm_login("a@x.com", &code).await.expect("confirm");
    assert_eq!(pair.token_type, "bearer");

    // Both tokens resolve back to the user with the matching kind.
    let user = h
        .service
        .current_user(&pair.access_token, TokenKind::Access)
        .await
        .unwrap();
    assert_eq!(user.email, "a@x.com");
    h.service
        .current_user(&pair.refresh_token, TokenKind::Refresh)
        .await
        .unwrap();

    // Code is cleared: the challenge is back to unchallenged.
    let stored = h.users.find_by_email("a@x.com").await.unwrap().unwrap();
    assert_eq!(stored.confirmation_code, None);
}

#[tokio::test]
async fn test_confirm_login_is_single_use() {
    let h = harness();
    h.service.register("a@x.com", "pw").await.unwrap();
    h.service.request_login("a@x.com", "pw").await.unwrap();
    let code = code_in(&h.mailer.last().unwrap().body);

    h.service.confirm_login("a@x.com", &code).await.unwrap();
    let err = h.service.confirm_login("a@x.com", &code).await.unwrap_err();
    assert_eq!(err, AuthError::InvalidCode);
}

#[tokio::test]
async fn test_confirm_login_exact_match_only() {
    let h = harness();
    h.service.register("a@x.com", "pw").await.unwrap();
    h.service.request_login("a@x.com", "pw").await.unwrap();
    let code = code_in(&h.mailer.last().unwrap().body);

    // Whitespace and partial matches do not count.
    let padded = format!(" {code}");
    let err = h.service.confirm_login("a@x.com", &padded).await.unwrap_err();
    assert_eq!(err, AuthError::InvalidCode);
    let err = h
        .service
        .confirm_login("a@x.com", &code[..5])
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::InvalidCode);
}

#[tokio::test]
async fn test_guard_rejects_wrong_kind() {
    let h = harness();
    h.service.register("a@x.com", "pw").await.unwrap();
    h.service.request_login("a@x.com", "pw").await.unwrap();
    let code = code_in(&h.mailer.last().unwrap().body);
    let pair = h.service.confirm_login("a@x.com", &code).await.unwrap();

    // Access token never authorizes the refresh guard, and vice versa.
    let err = h
        .service
        .current_user(&pair.access_token, TokenKind::Refresh)
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::Unauthorized);
    let err = h
        .service
        .current_user(&pair.refresh_token, TokenKind::Access)
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::Unauthorized);
}

#[tokio::test]
async fn test_guard_rejects_garbage_and_unknown_subject() {
    let h = harness();
    let err = h
        .service
        .current_user("garbage", TokenKind::Access)
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::Unauthorized);

    // Token forged for a subject this store has never seen.
    let codec = TokenCodec::from_config(&TokenConfig::new("test-secret".to_string()));
    let token = codec.issue(TokenKind::Access, "ghost@x.com").unwrap();
    let err = h
        .service
        .current_user(&token, TokenKind::Access)
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::Unauthorized);
}

#[tokio::test]
async fn test_expired_access_token_is_rejected() {
    // A codec whose access TTL is already in the past issues tokens that
    // fail decode immediately.
    let h = harness_with_config(
        TokenConfig::new("test-secret".to_string()).with_access_ttl(-1),
    );
    h.service.register("a@x.com", "pw").await.unwrap();
    h.service.request_login("a@x.com", "pw").await.unwrap();
    let code = code_in(&h.mailer.last().unwrap().body);
    let pair = h.service.confirm_login("a@x.com", &code).await.unwrap();

    let err = h
        .service
        .current_user(&pair.access_token, TokenKind::Access)
        .await
        .unwrap_err();
    assert_eq!(err, AuthError::Unauthorized);

    // The refresh token has its own, still-valid TTL.
    h.service
        .current_user(&pair.refresh_token, TokenKind::Refresh)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_refresh_issues_fresh_access_token() {
    let h = harness();
    h.service.register("a@x.com", "pw").await.unwrap();
    h.service.request_login("a@x.com", "pw").await.unwrap();
    let code = code_in(&h.mailer.last().unwrap().body);
    let pair = h.service.confirm_login("a@x.com", &code).await.unwrap();

    let user = h
        .service
        .current_user(&pair.refresh_token, TokenKind::Refresh)
        .await
        .unwrap();
    let access = h.service.refresh_access_token(&user).unwrap();
    let user = h
        .service
        .current_user(&access, TokenKind::Access)
        .await
        .unwrap();
    assert_eq!(user.email, "a@x.com");

    // The refresh token is not rotated; it keeps working.
    h.service
        .current_user(&pair.refresh_token, TokenKind::Refresh)
        .await
        .unwrap();
}
