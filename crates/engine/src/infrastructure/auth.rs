//! Single-user auth adapter for local play.
//!
//! There is no identity provider: signing in always yields the configured
//! user. Listeners are called immediately with the current state on
//! registration and again on every sign-in or sign-out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::infrastructure::ports::{AuthError, AuthListener, AuthPort, AuthUser, Subscription};

pub struct StaticAuthAdapter {
    user: AuthUser,
    signed_in: AtomicBool,
    listeners: Arc<DashMap<Uuid, AuthListener>>,
}

impl StaticAuthAdapter {
    /// Adapter for `user`, starting signed out.
    pub fn new(user: AuthUser) -> Self {
        Self {
            user,
            signed_in: AtomicBool::new(false),
            listeners: Arc::new(DashMap::new()),
        }
    }

    /// Adapter for `user`, already signed in.
    pub fn signed_in(user: AuthUser) -> Self {
        let adapter = Self::new(user);
        adapter.signed_in.store(true, Ordering::SeqCst);
        adapter
    }

    fn notify(&self, user: Option<AuthUser>) {
        // Clone out so a listener can (un)register without deadlocking the map.
        let listeners: Vec<AuthListener> = self
            .listeners
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect();
        for listener in listeners {
            listener(user.clone());
        }
    }
}

#[async_trait]
impl AuthPort for StaticAuthAdapter {
    fn on_auth_state_changed(&self, listener: AuthListener) -> Subscription {
        let id = Uuid::new_v4();
        self.listeners.insert(id, Arc::clone(&listener));
        listener(self.current_user());

        let listeners = Arc::clone(&self.listeners);
        Subscription::new(move || {
            listeners.remove(&id);
        })
    }

    async fn sign_in(&self) -> Result<Option<AuthUser>, AuthError> {
        self.signed_in.store(true, Ordering::SeqCst);
        tracing::info!(uid = %self.user.uid, "Signed in");
        self.notify(Some(self.user.clone()));
        Ok(Some(self.user.clone()))
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        self.signed_in.store(false, Ordering::SeqCst);
        tracing::info!(uid = %self.user.uid, "Signed out");
        self.notify(None);
        Ok(())
    }

    fn current_user(&self) -> Option<AuthUser> {
        self.signed_in
            .load(Ordering::SeqCst)
            .then(|| self.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn recording_listener() -> (AuthListener, Arc<Mutex<Vec<Option<String>>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener: AuthListener = Arc::new(move |user: Option<AuthUser>| {
            sink.lock().unwrap().push(user.map(|u| u.uid));
        });
        (listener, seen)
    }

    #[tokio::test]
    async fn sign_in_and_out_toggle_current_user() {
        let auth = StaticAuthAdapter::new(AuthUser::new("local"));
        assert!(auth.current_user().is_none());

        let user = auth.sign_in().await.unwrap();
        assert_eq!(user.map(|u| u.uid), Some("local".to_string()));
        assert_eq!(auth.current_user().map(|u| u.uid), Some("local".to_string()));

        auth.sign_out().await.unwrap();
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn listener_sees_initial_state_and_changes() {
        let auth = StaticAuthAdapter::new(AuthUser::new("local"));
        let (listener, seen) = recording_listener();
        let _subscription = auth.on_auth_state_changed(listener);

        auth.sign_in().await.unwrap();
        auth.sign_out().await.unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![None, Some("local".to_string()), None]
        );
    }

    #[tokio::test]
    async fn unsubscribed_listener_is_not_called() {
        let auth = StaticAuthAdapter::signed_in(AuthUser::new("local"));
        let (listener, seen) = recording_listener();
        let subscription = auth.on_auth_state_changed(listener);
        subscription.unsubscribe();

        auth.sign_out().await.unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![Some("local".to_string())]);
    }
}
