//! Single-slot undo for the last destructive character change.
//!
//! Only the most recent action can be undone, and only for a short window
//! after it was recorded. Expired actions are dropped lazily on the next
//! read instead of by a timer.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use warband_domain::{Character, WarbandData};

use crate::infrastructure::ports::{ClockPort, RepoError};
use crate::use_cases::WarbandApplicationService;

/// How long an undo action stays available, in milliseconds.
pub const UNDO_TIMEOUT_MS: i64 = 5000;

/// Everything needed to put one character back the way it was.
///
/// `warband_data` is the warband as it was before the change, so undoing a
/// deletion also restores the gold it refunded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UndoAction {
    pub character_index: usize,
    pub previous_state: Character,
    pub warband_data: WarbandData,
    pub description: String,
}

impl UndoAction {
    /// The warband with `previous_state` restored at `character_index`.
    ///
    /// Inserts when the index is past the end (the character was deleted),
    /// replaces otherwise.
    pub fn restored(&self) -> WarbandData {
        let mut data = self.warband_data.clone();
        let index = self.character_index;
        if index < data.characters.len() {
            data.characters[index] = self.previous_state.clone();
        } else {
            let at = index.min(data.characters.len());
            data.characters.insert(at, self.previous_state.clone());
        }
        data
    }
}

#[derive(Debug, Clone)]
struct PendingUndo {
    action: UndoAction,
    recorded_at: DateTime<Utc>,
}

pub struct UndoStore {
    pending: RwLock<Option<PendingUndo>>,
    warbands: Arc<WarbandApplicationService>,
    clock: Arc<dyn ClockPort>,
    timeout: chrono::Duration,
}

impl UndoStore {
    pub fn new(warbands: Arc<WarbandApplicationService>, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            pending: RwLock::new(None),
            warbands,
            clock,
            timeout: chrono::Duration::milliseconds(UNDO_TIMEOUT_MS),
        }
    }

    pub fn with_timeout(mut self, timeout: chrono::Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Record `action`, replacing any pending one and restarting the window.
    pub async fn set_undo_action(&self, action: UndoAction) {
        tracing::debug!(
            character_index = action.character_index,
            description = %action.description,
            "Recorded undo action"
        );
        *self.pending.write().await = Some(PendingUndo {
            action,
            recorded_at: self.clock.now(),
        });
    }

    /// The pending action, if it is still inside the undo window.
    pub async fn current(&self) -> Option<UndoAction> {
        {
            let guard = self.pending.read().await;
            match guard.as_ref() {
                None => return None,
                Some(pending) if self.is_live(pending) => return Some(pending.action.clone()),
                Some(_) => {}
            }
        }
        // Expired: drop it, unless a fresh action raced in meanwhile.
        let mut guard = self.pending.write().await;
        if guard.as_ref().is_some_and(|pending| !self.is_live(pending)) {
            *guard = None;
        }
        None
    }

    pub async fn clear(&self) {
        *self.pending.write().await = None;
    }

    /// Restore and persist the pending action for `user_id`.
    ///
    /// Returns the restored warband, or `None` when nothing was undoable.
    /// The action is only consumed once the save succeeded.
    pub async fn undo(&self, user_id: &str) -> Result<Option<WarbandData>, RepoError> {
        let Some(action) = self.current().await else {
            return Ok(None);
        };

        let restored = action.restored();
        self.warbands.save(user_id, &restored).await?;
        self.clear().await;

        tracing::info!(
            user_id,
            character_index = action.character_index,
            description = %action.description,
            "Undid character change"
        );
        Ok(Some(restored))
    }

    fn is_live(&self, pending: &PendingUndo) -> bool {
        self.clock.now() - pending.recorded_at < self.timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::SteppingClock;
    use crate::infrastructure::ports::MockWarbandRepository;
    use chrono::TimeZone;

    fn clock() -> Arc<SteppingClock> {
        Arc::new(SteppingClock::new(
            Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap(),
        ))
    }

    fn store_with(repo: MockWarbandRepository, clock: Arc<SteppingClock>) -> UndoStore {
        let warbands = Arc::new(WarbandApplicationService::new(Arc::new(repo)));
        UndoStore::new(warbands, clock)
    }

    fn action(index: usize, warband: WarbandData, previous: Character) -> UndoAction {
        UndoAction {
            character_index: index,
            previous_state: previous,
            warband_data: warband,
            description: "Took 3 damage (Vex)".to_string(),
        }
    }

    #[test]
    fn restored_replaces_existing_character() {
        let warband = WarbandData::default()
            .with_characters(vec![Character::named("Vex"), Character::named("Orla")]);
        let mut hurt = Character::named("Orla");
        hurt.hp = 1;

        let restored = action(1, warband, hurt.clone()).restored();

        assert_eq!(restored.characters.len(), 2);
        assert_eq!(restored.characters[1], hurt);
    }

    #[test]
    fn restored_inserts_missing_character() {
        let warband = WarbandData::default().with_characters(vec![Character::named("Vex")]);

        let restored = action(3, warband, Character::named("Orla")).restored();

        assert_eq!(restored.characters.len(), 2);
        assert_eq!(restored.characters[1].name, "Orla");
    }

    #[tokio::test]
    async fn action_expires_after_timeout() {
        let clock = clock();
        let store = store_with(MockWarbandRepository::new(), clock.clone());
        store
            .set_undo_action(action(0, WarbandData::default(), Character::named("Vex")))
            .await;

        clock.advance(chrono::Duration::milliseconds(4999));
        assert!(store.current().await.is_some());

        clock.advance(chrono::Duration::milliseconds(1));
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn new_action_restarts_window() {
        let clock = clock();
        let store = store_with(MockWarbandRepository::new(), clock.clone());
        store
            .set_undo_action(action(0, WarbandData::default(), Character::named("Vex")))
            .await;
        clock.advance(chrono::Duration::milliseconds(4000));

        let mut second = action(0, WarbandData::default(), Character::named("Orla"));
        second.description = "Revived Orla".to_string();
        store.set_undo_action(second).await;
        clock.advance(chrono::Duration::milliseconds(4000));

        let current = store.current().await.unwrap();
        assert_eq!(current.description, "Revived Orla");
    }

    #[tokio::test]
    async fn undo_persists_restored_warband_and_clears() {
        let mut repo = MockWarbandRepository::new();
        repo.expect_save()
            .withf(|user_id, data| {
                user_id == "alice" && data.characters.len() == 1 && data.characters[0].hp == 8
            })
            .times(1)
            .returning(|_, _| Ok(()));
        let store = store_with(repo, clock());

        let mut hurt = Character::named("Vex");
        hurt.hp = 2;
        let warband = WarbandData::default().with_characters(vec![hurt]);
        let mut before = Character::named("Vex");
        before.hp = 8;
        store.set_undo_action(action(0, warband, before)).await;

        let restored = store.undo("alice").await.unwrap().unwrap();

        assert_eq!(restored.characters[0].hp, 8);
        assert!(store.current().await.is_none());
    }

    #[tokio::test]
    async fn undo_without_action_is_noop() {
        let store = store_with(MockWarbandRepository::new(), clock());
        assert!(store.undo("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn failed_undo_keeps_action() {
        let mut repo = MockWarbandRepository::new();
        repo.expect_save()
            .returning(|_, _| Err(RepoError::database("save", "offline")));
        let store = store_with(repo, clock());
        store
            .set_undo_action(action(0, WarbandData::default(), Character::named("Vex")))
            .await;

        assert!(store.undo("alice").await.is_err());
        assert!(store.current().await.is_some());
    }
}
