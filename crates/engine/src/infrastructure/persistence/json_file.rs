//! JSON-file warband repository: one `<user_id>.json` document per user.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::SecondsFormat;
use warband_domain::WarbandData;

use super::document::{StoredWarband, WarbandDocument};
use super::listeners::ListenerRegistry;
use crate::infrastructure::ports::{
    ClockPort, RepoError, Subscription, WarbandListener, WarbandRepository,
};

pub struct JsonFileWarbandRepository {
    data_dir: PathBuf,
    clock: Arc<dyn ClockPort>,
    listeners: ListenerRegistry,
}

impl JsonFileWarbandRepository {
    pub fn new(data_dir: impl Into<PathBuf>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            data_dir: data_dir.into(),
            clock,
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn document_path(&self, user_id: &str) -> Result<PathBuf, RepoError> {
        let valid = !user_id.is_empty()
            && user_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(RepoError::constraint(format!(
                "invalid user id for file storage: {user_id:?}"
            )));
        }
        Ok(self.data_dir.join(format!("{user_id}.json")))
    }

    async fn read_stored(&self, path: &Path) -> Result<Option<StoredWarband>, RepoError> {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(RepoError::io("load_warband", e)),
        };
        let stored = serde_json::from_str(&raw).map_err(RepoError::serialization)?;
        Ok(Some(stored))
    }
}

#[async_trait]
impl WarbandRepository for JsonFileWarbandRepository {
    async fn save(&self, user_id: &str, data: &WarbandData) -> Result<(), RepoError> {
        let path = self.document_path(user_id)?;
        let now = self.clock.now().to_rfc3339_opts(SecondsFormat::Millis, true);

        let existing = match self.read_stored(&path).await {
            Ok(existing) => existing,
            Err(RepoError::Serialization(e)) => {
                tracing::warn!(user_id, error = %e, "Overwriting unreadable warband document");
                Some(StoredWarband::default())
            }
            Err(e) => return Err(e),
        };
        let document = match existing {
            Some(previous) => WarbandDocument {
                data,
                created_at: previous.created_at,
                updated_at: Some(now),
            },
            None => WarbandDocument {
                data,
                created_at: Some(now),
                updated_at: None,
            },
        };
        let json = serde_json::to_vec_pretty(&document).map_err(RepoError::serialization)?;

        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| RepoError::io("save_warband", e))?;
        let tmp_path = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, json)
            .await
            .map_err(|e| RepoError::io("save_warband", e))?;
        tokio::fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| RepoError::io("save_warband", e))?;

        tracing::debug!(user_id, path = %path.display(), "Saved warband document");
        self.listeners.notify(user_id, data);
        Ok(())
    }

    async fn load(&self, user_id: &str) -> Result<Option<WarbandData>, RepoError> {
        let path = self.document_path(user_id)?;
        Ok(self.read_stored(&path).await?.map(StoredWarband::normalize))
    }

    async fn subscribe(
        &self,
        user_id: &str,
        listener: WarbandListener,
    ) -> Result<Subscription, RepoError> {
        let current = self.load(user_id).await?;
        let subscription = self.listeners.register(user_id, listener.clone());
        if let Some(data) = current {
            listener(data);
        }
        Ok(subscription)
    }
}
