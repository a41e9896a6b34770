//! Warband persistence use cases.
//!
//! Thin orchestration over `WarbandRepository`: the stores never talk to
//! the repository directly.

use std::sync::Arc;

use warband_domain::WarbandData;

use crate::infrastructure::ports::{RepoError, Subscription, WarbandListener, WarbandRepository};

pub struct WarbandApplicationService {
    repo: Arc<dyn WarbandRepository>,
}

impl WarbandApplicationService {
    pub fn new(repo: Arc<dyn WarbandRepository>) -> Self {
        Self { repo }
    }

    pub async fn save(&self, user_id: &str, data: &WarbandData) -> Result<(), RepoError> {
        self.repo.save(user_id, data).await.inspect_err(|e| {
            tracing::warn!(user_id, error = %e, "Failed to save warband");
        })
    }

    pub async fn load(&self, user_id: &str) -> Result<Option<WarbandData>, RepoError> {
        let data = self.repo.load(user_id).await?;
        tracing::info!(user_id, found = data.is_some(), "Loaded warband");
        Ok(data)
    }

    pub async fn subscribe(
        &self,
        user_id: &str,
        listener: WarbandListener,
    ) -> Result<Subscription, RepoError> {
        let subscription = self.repo.subscribe(user_id, listener).await?;
        tracing::info!(user_id, "Subscribed to warband updates");
        Ok(subscription)
    }
}
