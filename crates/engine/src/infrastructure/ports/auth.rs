//! Authentication port.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::AuthError;
use super::repos::Subscription;

/// A signed-in user as reported by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthUser {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            display_name: None,
            email: None,
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// Callback receiving the user on every sign-in and `None` on sign-out.
pub type AuthListener = Arc<dyn Fn(Option<AuthUser>) + Send + Sync>;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthPort: Send + Sync {
    fn on_auth_state_changed(&self, listener: AuthListener) -> Subscription;
    async fn sign_in(&self) -> Result<Option<AuthUser>, AuthError>;
    async fn sign_out(&self) -> Result<(), AuthError>;
    fn current_user(&self) -> Option<AuthUser>;
}
