//! Per-user listener registry shared by the warband repositories.

use std::sync::Arc;

use dashmap::DashMap;
use uuid::Uuid;
use warband_domain::WarbandData;

use crate::infrastructure::ports::{Subscription, WarbandListener};

#[derive(Clone, Default)]
pub struct ListenerRegistry {
    listeners: Arc<DashMap<Uuid, (String, WarbandListener)>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener` for `user_id`. The returned handle removes it.
    pub fn register(&self, user_id: &str, listener: WarbandListener) -> Subscription {
        let id = Uuid::new_v4();
        self.listeners.insert(id, (user_id.to_string(), listener));

        let listeners = Arc::clone(&self.listeners);
        Subscription::new(move || {
            listeners.remove(&id);
        })
    }

    /// Call every listener registered for `user_id` with its own copy of `data`.
    pub fn notify(&self, user_id: &str, data: &WarbandData) {
        // Collect first: listeners may subscribe or unsubscribe while running.
        let targets: Vec<WarbandListener> = self
            .listeners
            .iter()
            .filter(|entry| entry.value().0 == user_id)
            .map(|entry| Arc::clone(&entry.value().1))
            .collect();

        for listener in targets {
            listener(data.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn notifies_only_matching_user() {
        let registry = ListenerRegistry::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _alice = registry.register(
            "alice",
            Arc::new(move |data: WarbandData| sink.lock().unwrap().push(data.warband_name)),
        );
        let _bob = registry.register("bob", Arc::new(|_| panic!("wrong user notified")));

        registry.notify("alice", &WarbandData::named("Crows"));

        assert_eq!(*seen.lock().unwrap(), vec!["Crows".to_string()]);
    }

    #[test]
    fn dropped_subscription_is_removed() {
        let registry = ListenerRegistry::new();
        let subscription = registry.register("alice", Arc::new(|_| {}));
        assert_eq!(registry.len(), 1);

        drop(subscription);

        assert!(registry.is_empty());
    }
}
