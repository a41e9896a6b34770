//! Warband store: the live warband plus the character editor session.
//!
//! Gameplay mutations (damage, pick-ups, ammo, injuries) go straight to the
//! saved warband and record an undo action. Editor operations only touch
//! `current_character` until `save_character` commits it.
//!
//! The store persists for whichever user was last passed to `load` or
//! `listen_to_remote`. Before that it keeps changes in memory only.

use std::sync::{Arc, Weak};

use serde::Serialize;
use tokio::sync::{mpsc, RwLock};
use warband_domain::rules::{
    calculate_character_cost, calculate_gold_difference, default_character, SpellcasterChange,
};
use warband_domain::services::{self, ItemRemoval, StatChange};
use warband_domain::{
    Catalog, Character, DomainError, InventorySlot, ModifierRef, ScrollKind, Stat, WarbandData,
};

use super::error::StoreError;
use super::patch::{CharacterPatch, WarbandPatch};
use super::undo::{UndoAction, UndoStore};
use crate::infrastructure::ports::{Subscription, WarbandListener};
use crate::use_cases::WarbandApplicationService;

/// Everything the warband screen renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarbandState {
    pub data: WarbandData,
    pub is_saving: bool,
    /// Character open in the editor.
    pub current_character: Character,
    /// Index of the character being edited; `None` while creating a new one.
    pub selected_index: Option<usize>,
    pub show_modal: bool,
    /// Cost of the edited character when the editor opened.
    pub original_character_gold: u32,
}

impl Default for WarbandState {
    fn default() -> Self {
        Self::with_data(WarbandData::default())
    }
}

impl WarbandState {
    pub fn with_data(data: WarbandData) -> Self {
        Self {
            data,
            is_saving: false,
            current_character: default_character(),
            selected_index: None,
            show_modal: false,
            original_character_gold: 0,
        }
    }

    fn close_editor(&mut self) {
        self.current_character = default_character();
        self.selected_index = None;
        self.show_modal = false;
        self.original_character_gold = 0;
    }
}

pub struct WarbandStore {
    state: RwLock<WarbandState>,
    user_id: RwLock<Option<String>>,
    warbands: Arc<WarbandApplicationService>,
    undo: Arc<UndoStore>,
    catalog: Arc<Catalog>,
}

impl WarbandStore {
    pub fn new(warbands: Arc<WarbandApplicationService>, undo: Arc<UndoStore>) -> Self {
        Self {
            state: RwLock::new(WarbandState::default()),
            user_id: RwLock::new(None),
            warbands,
            undo,
            catalog: Arc::new(Catalog::standard().clone()),
        }
    }

    /// Use house-rule tables instead of the standard catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn snapshot(&self) -> WarbandState {
        self.state.read().await.clone()
    }

    pub async fn user_id(&self) -> Option<String> {
        self.user_id.read().await.clone()
    }

    // =========================================================================
    // Loading and sync
    // =========================================================================

    /// Load `user_id`'s warband and make them the active user.
    ///
    /// Leaves the current state alone when the user has no saved warband.
    pub async fn load(&self, user_id: &str) -> Result<(), StoreError> {
        *self.user_id.write().await = Some(user_id.to_string());
        if let Some(data) = self.warbands.load(user_id).await? {
            self.initialize(data).await;
        }
        Ok(())
    }

    /// Replace local state with every remote snapshot of `user_id`'s warband.
    ///
    /// Snapshots are applied on a background task, in the order they arrive.
    /// Dropping the returned subscription stops the sync.
    pub async fn listen_to_remote(
        self: &Arc<Self>,
        user_id: &str,
    ) -> Result<Subscription, StoreError> {
        *self.user_id.write().await = Some(user_id.to_string());

        let (tx, mut rx) = mpsc::unbounded_channel::<WarbandData>();
        let listener: WarbandListener = Arc::new(move |data: WarbandData| {
            let _ = tx.send(data);
        });

        let store: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            while let Some(data) = rx.recv().await {
                let Some(store) = store.upgrade() else {
                    break;
                };
                store.initialize(data).await;
            }
        });

        let subscription = self.warbands.subscribe(user_id, listener).await?;
        Ok(subscription)
    }

    /// Replace the warband and close the editor.
    pub async fn initialize(&self, data: WarbandData) {
        tracing::debug!(
            warband = %data.warband_name,
            characters = data.characters.len(),
            "Initialized warband state"
        );
        *self.state.write().await = WarbandState::with_data(data);
    }

    pub async fn reset(&self) {
        *self.state.write().await = WarbandState::default();
    }

    // =========================================================================
    // Persisted operations
    // =========================================================================

    pub async fn update_warband(&self, patch: WarbandPatch) -> Result<(), StoreError> {
        let data = patch.apply_to(&self.state.read().await.data);
        self.persist(data).await
    }

    pub async fn clamp_character_hp(&self, index: usize, max_hp: i32) -> Result<(), StoreError> {
        self.apply_character_mutation(
            index,
            |_| None,
            |character, _| Ok(services::clamp_hp(character, max_hp)),
        )
        .await
    }

    pub async fn take_damage(&self, index: usize, amount: i32) -> Result<(), StoreError> {
        self.apply_character_mutation(
            index,
            |character| Some(format!("Took {amount} damage ({})", character.name)),
            |character, _| Ok(services::take_damage(character, amount)),
        )
        .await
    }

    pub async fn revive_character(&self, index: usize) -> Result<(), StoreError> {
        self.apply_character_mutation(
            index,
            |character| Some(format!("Revived {}", character.name)),
            |character, _| Ok(services::revive_character(character)),
        )
        .await
    }

    /// Put `item_name` into `slot_index`.
    ///
    /// A rule rejection (for example a non-scroll in a scroll slot) persists
    /// nothing and is returned as `StoreError::Domain`.
    pub async fn pick_up_item(
        &self,
        index: usize,
        slot_index: usize,
        item_name: &str,
    ) -> Result<(), StoreError> {
        self.apply_character_mutation(
            index,
            |_| Some(format!("Picked up {item_name}")),
            |character, catalog| services::pick_up_item(character, slot_index, item_name, catalog),
        )
        .await
    }

    pub async fn drop_item(
        &self,
        index: usize,
        item_name: &str,
        slot_index: Option<usize>,
    ) -> Result<(), StoreError> {
        self.apply_character_mutation(
            index,
            |_| Some(format!("Dropped {item_name}")),
            |character, catalog| Ok(services::drop_item(character, item_name, slot_index, catalog)),
        )
        .await
    }

    pub async fn use_ammo(
        &self,
        index: usize,
        weapon_name: &str,
        slot_index: usize,
    ) -> Result<(), StoreError> {
        self.apply_character_mutation(
            index,
            |_| Some(format!("Used ammo for {weapon_name}")),
            |character, catalog| {
                Ok(services::use_ammo(character, weapon_name, slot_index, catalog))
            },
        )
        .await
    }

    pub async fn refill_ammo(
        &self,
        index: usize,
        weapon_name: &str,
        slot_index: usize,
    ) -> Result<(), StoreError> {
        self.apply_character_mutation(
            index,
            |_| Some(format!("Refilled ammo for {weapon_name}")),
            |character, catalog| {
                Ok(services::refill_ammo(character, weapon_name, slot_index, catalog))
            },
        )
        .await
    }

    pub async fn add_injury(&self, index: usize, injury_name: &str) -> Result<(), StoreError> {
        self.apply_character_mutation(
            index,
            |_| Some(format!("Added injury: {injury_name}")),
            |character, catalog| Ok(services::add_injury(character, injury_name, catalog)),
        )
        .await
    }

    pub async fn remove_injury(&self, index: usize, injury_name: &str) -> Result<(), StoreError> {
        self.apply_character_mutation(
            index,
            |_| Some(format!("Removed injury: {injury_name}")),
            |character, catalog| Ok(services::remove_injury(character, injury_name, catalog)),
        )
        .await
    }

    /// Commit an edited character, charging or refunding the cost change.
    ///
    /// `index` is `None` for a new character. Gold never goes below zero.
    pub async fn save_character(
        &self,
        character: Character,
        index: Option<usize>,
    ) -> Result<(), StoreError> {
        let data = {
            let state = self.state.read().await;
            let difference =
                calculate_gold_difference(&character, index, &state.data, &self.catalog);

            let mut data = state.data.clone();
            match index {
                Some(i) if i < data.characters.len() => data.characters[i] = character,
                _ => data.characters.push(character),
            }
            data.gold = clamp_gold(i64::from(data.gold) - difference);
            tracing::debug!(
                character_index = ?index,
                gold_difference = difference,
                gold = data.gold,
                "Saving character"
            );
            data
        };

        self.persist(data).await?;
        self.state.write().await.close_editor();
        Ok(())
    }

    /// Remove a character and refund its full cost.
    pub async fn delete_character(&self, index: usize) -> Result<(), StoreError> {
        let previous_data = self.state.read().await.data.clone();
        let Some(deleted) = previous_data.character(index).cloned() else {
            tracing::debug!(character_index = index, "No character to delete");
            return Ok(());
        };

        let refund = calculate_character_cost(&deleted, &self.catalog);
        let mut data = previous_data.clone();
        data.characters.remove(index);
        data.gold = data.gold.saturating_add(refund);
        self.persist(data).await?;

        let description = format!("Deleted {}", deleted.name);
        tracing::debug!(
            character_index = index,
            refund,
            description = %description,
            "Deleted character"
        );
        self.undo
            .set_undo_action(UndoAction {
                character_index: index,
                previous_state: deleted,
                warband_data: previous_data,
                description,
            })
            .await;
        Ok(())
    }

    /// Undo the last recorded change for the active user.
    ///
    /// Returns whether anything was undone.
    pub async fn undo(&self) -> Result<bool, StoreError> {
        let Some(user_id) = self.user_id().await else {
            tracing::debug!("No active user, nothing to undo");
            return Ok(false);
        };
        match self.undo.undo(&user_id).await? {
            Some(restored) => {
                self.initialize(restored).await;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn current_undo(&self) -> Option<UndoAction> {
        self.undo.current().await
    }

    // =========================================================================
    // Editor session
    // =========================================================================

    /// Open the editor on a copy of the character at `index`.
    pub async fn edit_character(&self, index: usize) {
        let mut state = self.state.write().await;
        let Some(character) = state.data.character(index).cloned() else {
            return;
        };
        state.original_character_gold = calculate_character_cost(&character, &self.catalog);
        state.current_character = character;
        state.selected_index = Some(index);
        state.show_modal = true;
    }

    /// Open the editor on a fresh default character.
    pub async fn add_character(&self) {
        let mut state = self.state.write().await;
        state.close_editor();
        state.show_modal = true;
    }

    pub async fn close_modal(&self) {
        self.state.write().await.close_editor();
    }

    pub async fn update_current_character(&self, patch: CharacterPatch) {
        let mut state = self.state.write().await;
        state.current_character = patch.apply_to(&state.current_character);
    }

    /// Set gold without saving.
    pub async fn update_gold(&self, gold: u32) {
        self.state.write().await.data.gold = gold;
    }

    /// Turn spellcasting on or off for the edited character.
    ///
    /// Items already paid for that had to make way for scroll slots are
    /// refunded straight into the warband's gold.
    pub async fn handle_spellcaster_toggle(&self, checked: bool) -> SpellcasterChange {
        let mut state = self.state.write().await;
        let original = state.selected_index.and_then(|i| state.data.character(i));
        let change = services::apply_spellcaster_change(
            &state.current_character,
            original,
            checked,
            &self.catalog,
        );

        state.current_character = change.character.clone();
        state.data.gold = state.data.gold.saturating_add(change.refund_amount);
        change
    }

    pub async fn set_item_for_current_character(&self, slot_index: usize, item_name: &str) {
        let mut state = self.state.write().await;
        state.current_character = services::update_item_selection(
            &state.current_character,
            slot_index,
            item_name,
            &self.catalog,
        );
    }

    /// Clear `slot_index` of the edited character. Empty slots are left alone.
    pub async fn remove_item_from_current(&self, slot_index: usize) {
        let mut state = self.state.write().await;
        let Some(item_name) = state
            .current_character
            .slot(slot_index)
            .and_then(InventorySlot::item_name)
            .map(str::to_string)
        else {
            return;
        };
        state.current_character = services::remove_item(
            &state.current_character,
            &item_name,
            Some(slot_index),
            &self.catalog,
        );
    }

    pub async fn remove_item_with_refund(
        &self,
        item_name: &str,
        original_items: &[InventorySlot],
        slot_index: Option<usize>,
    ) -> u32 {
        let mut state = self.state.write().await;
        let ItemRemoval {
            updated_character,
            gold_refund,
        } = services::remove_item_with_optional_refund(
            &state.current_character,
            item_name,
            original_items,
            slot_index,
            &self.catalog,
        );
        state.current_character = updated_character;
        state.data.gold = state.data.gold.saturating_add(gold_refund);
        gold_refund
    }

    /// Change a stat; the inventory may not grow past its current size.
    pub async fn update_stat_and_inventory(&self, stat: Stat, value: i32) {
        let mut state = self.state.write().await;
        let change = StatChange {
            stat,
            value,
            max_inventory: state.current_character.inventory,
        };
        state.current_character =
            services::update_stat_and_inventory(&state.current_character, &change);
    }

    pub async fn apply_modifier(&self, modifier: &ModifierRef) {
        let mut state = self.state.write().await;
        state.current_character =
            services::apply_modifier(&state.current_character, modifier, &self.catalog);
    }

    pub async fn remove_modifier(&self, modifier: &ModifierRef) {
        let mut state = self.state.write().await;
        state.current_character =
            services::remove_modifier(&state.current_character, modifier, &self.catalog);
    }

    /// Pick a scroll for the given slot; `None` clears the choice.
    pub async fn select_scroll(&self, kind: ScrollKind, scroll_name: Option<&str>) {
        let mut state = self.state.write().await;
        state.current_character =
            services::select_scroll(&state.current_character, kind, scroll_name);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Save `data` for the active user, then make it the local state.
    ///
    /// `is_saving` is set while the save runs and cleared however it ends.
    /// On failure the local data is left as it was.
    async fn persist(&self, data: WarbandData) -> Result<(), StoreError> {
        let Some(user_id) = self.user_id().await else {
            tracing::debug!("No active user, keeping warband in memory");
            self.state.write().await.data = data;
            return Ok(());
        };

        self.state.write().await.is_saving = true;
        let result = self.warbands.save(&user_id, &data).await;

        let mut state = self.state.write().await;
        if result.is_ok() {
            state.data = data;
        }
        state.is_saving = false;
        result.map_err(StoreError::from)
    }

    /// Replace the character at `index` with `mutate`'s result and save.
    ///
    /// When `describe` yields a label, the pre-change warband is recorded
    /// for undo. A missing index is a no-op.
    async fn apply_character_mutation<D, M>(
        &self,
        index: usize,
        describe: D,
        mutate: M,
    ) -> Result<(), StoreError>
    where
        D: FnOnce(&Character) -> Option<String>,
        M: FnOnce(&Character, &Catalog) -> Result<Character, DomainError>,
    {
        let previous_data = self.state.read().await.data.clone();
        let Some(previous) = previous_data.character(index).cloned() else {
            tracing::debug!(character_index = index, "No character at index, skipping mutation");
            return Ok(());
        };

        let updated = mutate(&previous, self.catalog()).inspect_err(|e| {
            tracing::warn!(character_index = index, error = %e, "Character change rejected");
        })?;
        let description = describe(&previous);

        let mut data = previous_data.clone();
        data.characters[index] = updated;
        self.persist(data).await?;

        tracing::debug!(
            character_index = index,
            description = description.as_deref().unwrap_or_default(),
            "Applied character change"
        );
        if let Some(description) = description {
            self.undo
                .set_undo_action(UndoAction {
                    character_index: index,
                    previous_state: previous,
                    warband_data: previous_data,
                    description,
                })
                .await;
        }
        Ok(())
    }
}

fn clamp_gold(gold: i64) -> u32 {
    u32::try_from(gold.max(0)).unwrap_or(u32::MAX)
}
