//! In-memory warband repository.
//!
//! Used by tests and by callers that do not want anything written to disk.

use async_trait::async_trait;
use dashmap::DashMap;
use warband_domain::WarbandData;

use super::listeners::ListenerRegistry;
use crate::infrastructure::ports::{RepoError, Subscription, WarbandListener, WarbandRepository};

#[derive(Default)]
pub struct InMemoryWarbandRepository {
    documents: DashMap<String, WarbandData>,
    listeners: ListenerRegistry,
}

impl InMemoryWarbandRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-populated with one document.
    pub fn with_document(user_id: impl Into<String>, data: WarbandData) -> Self {
        let repo = Self::new();
        repo.documents.insert(user_id.into(), data);
        repo
    }
}

#[async_trait]
impl WarbandRepository for InMemoryWarbandRepository {
    async fn save(&self, user_id: &str, data: &WarbandData) -> Result<(), RepoError> {
        self.documents.insert(user_id.to_string(), data.clone());
        tracing::debug!(user_id, characters = data.characters.len(), "Saved warband in memory");
        self.listeners.notify(user_id, data);
        Ok(())
    }

    async fn load(&self, user_id: &str) -> Result<Option<WarbandData>, RepoError> {
        Ok(self.documents.get(user_id).map(|doc| doc.value().clone()))
    }

    async fn subscribe(
        &self,
        user_id: &str,
        listener: WarbandListener,
    ) -> Result<Subscription, RepoError> {
        let subscription = self.listeners.register(user_id, listener.clone());
        // Clone out of the map before calling back into user code.
        let current = self.documents.get(user_id).map(|doc| doc.value().clone());
        if let Some(data) = current {
            listener(data);
        }
        Ok(subscription)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use warband_domain::Character;

    #[tokio::test]
    async fn load_returns_none_for_unknown_user() {
        let repo = InMemoryWarbandRepository::new();
        assert!(repo.load("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_then_load_returns_copy() {
        let repo = InMemoryWarbandRepository::new();
        let data = WarbandData::named("Crows").with_characters(vec![Character::named("Vex")]);

        repo.save("alice", &data).await.unwrap();

        assert_eq!(repo.load("alice").await.unwrap(), Some(data));
    }

    #[tokio::test]
    async fn subscriber_gets_current_and_later_snapshots() {
        let repo = InMemoryWarbandRepository::with_document("alice", WarbandData::named("First"));
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);

        let subscription = repo
            .subscribe(
                "alice",
                Arc::new(move |data: WarbandData| sink.lock().unwrap().push(data.warband_name)),
            )
            .await
            .unwrap();

        repo.save("alice", &WarbandData::named("Second")).await.unwrap();
        subscription.unsubscribe();
        repo.save("alice", &WarbandData::named("Third")).await.unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["First".to_string(), "Second".to_string()]
        );
    }

    #[tokio::test]
    async fn subscribe_without_document_stays_silent() {
        let repo = InMemoryWarbandRepository::new();
        let _subscription = repo
            .subscribe("alice", Arc::new(|_| panic!("no document yet")))
            .await
            .unwrap();
    }
}
