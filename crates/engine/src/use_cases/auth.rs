//! Authentication use cases.

use std::sync::Arc;

use crate::infrastructure::ports::{AuthError, AuthListener, AuthPort, AuthUser, Subscription};

pub struct AuthApplicationService {
    auth: Arc<dyn AuthPort>,
}

impl AuthApplicationService {
    pub fn new(auth: Arc<dyn AuthPort>) -> Self {
        Self { auth }
    }

    pub fn on_auth_state_changed(&self, listener: AuthListener) -> Subscription {
        self.auth.on_auth_state_changed(listener)
    }

    pub async fn sign_in(&self) -> Result<Option<AuthUser>, AuthError> {
        self.auth.sign_in().await.inspect_err(|e| {
            tracing::warn!(error = %e, "Sign-in failed");
        })
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.auth.sign_out().await
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.auth.current_user()
    }

    /// Uid of the signed-in user, if any.
    pub fn current_user_id(&self) -> Option<String> {
        self.current_user().map(|user| user.uid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::MockAuthPort;

    #[tokio::test]
    async fn sign_in_delegates_to_port() {
        let mut auth = MockAuthPort::new();
        auth.expect_sign_in()
            .times(1)
            .returning(|| Ok(Some(AuthUser::new("alice").with_email("alice@example.com"))));

        let service = AuthApplicationService::new(Arc::new(auth));

        let user = service.sign_in().await.unwrap().unwrap();
        assert_eq!(user.uid, "alice");
        assert_eq!(user.email.as_deref(), Some("alice@example.com"));
    }

    #[tokio::test]
    async fn sign_in_failure_is_returned() {
        let mut auth = MockAuthPort::new();
        auth.expect_sign_in()
            .returning(|| Err(AuthError::SignInFailed("popup closed".to_string())));

        let service = AuthApplicationService::new(Arc::new(auth));

        assert!(matches!(
            service.sign_in().await,
            Err(AuthError::SignInFailed(_))
        ));
    }

    #[test]
    fn current_user_id_reads_uid() {
        let mut auth = MockAuthPort::new();
        auth.expect_current_user()
            .returning(|| Some(AuthUser::new("alice")));

        let service = AuthApplicationService::new(Arc::new(auth));

        assert_eq!(service.current_user_id().as_deref(), Some("alice"));
    }
}
