//! Warband persistence port and subscription handle.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use warband_domain::WarbandData;

use super::error::RepoError;

/// Callback receiving every remote snapshot of a warband document.
pub type WarbandListener = Arc<dyn Fn(WarbandData) + Send + Sync>;

/// Handle to a live listener registration.
///
/// Dropping the handle detaches the listener, same as calling
/// [`Subscription::unsubscribe`].
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Document store holding one warband per user.
///
/// Saves are at-most-once from the caller's point of view: retries and
/// conflict handling belong to the implementation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarbandRepository: Send + Sync {
    async fn save(&self, user_id: &str, data: &WarbandData) -> Result<(), RepoError>;
    async fn load(&self, user_id: &str) -> Result<Option<WarbandData>, RepoError>;
    async fn subscribe(
        &self,
        user_id: &str,
        listener: WarbandListener,
    ) -> Result<Subscription, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn subscription_cancels_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let subscription = Subscription::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        subscription.unsubscribe();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropping_subscription_cancels() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        {
            let _subscription = Subscription::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
