//! In-memory credential store for tests and development.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{AuthError, Result};
use crate::providers::{User, UserStore};

/// In-memory credential store.
///
/// Mutex-guarded map keyed by email, with a monotonic id sequence.
/// Deterministic and network-free; not for production.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    next_id: i64,
    users: HashMap<String, User>,
}

impl MemoryUserStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(inner.users.get(email).cloned())
    }

    async fn insert(&self, email: &str, password_hash: &str) -> Result<User> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if inner.users.contains_key(email) {
            return Err(AuthError::EmailTaken);
        }
        inner.next_id += 1;
        let user = User {
            id: inner.next_id,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            confirmation_code: None,
            created_at: Utc::now(),
        };
        inner.users.insert(email.to_string(), user.clone());
        Ok(user)
    }

    async fn update_confirmation_code(&self, email: &str, code: Option<&str>) -> Result<()> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let user = inner
            .users
            .get_mut(email)
            .ok_or(AuthError::UserNotFound)?;
        user.confirmation_code = code.map(ToString::to_string);
        Ok(())
    }
}
