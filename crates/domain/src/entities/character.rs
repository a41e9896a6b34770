//! Character entity - one member of a warband and their sheet.
//!
//! Characters are values: every rule and service function takes a borrowed
//! character and hands back a new one. `Clone` produces a fully independent
//! copy (no shared collections), which is what undo snapshots rely on.
//!
//! # Invariants
//!
//! - `items.len() == inventory` after every service call
//! - while `is_spellcaster`, slots 0 and 1 are reserved for scrolls
//! - every ammo tracker points at a slot below `inventory`

use serde::{Deserialize, Serialize};

use crate::entities::ModifierKind;
use crate::rules::character_stats::default_character;
use crate::value_objects::{InventorySlot, Stat};

/// Remaining shots for one equipped ammo-consuming item.
///
/// Keyed by `(weapon_name, slot_index)`: two bows in two slots track ammo
/// separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmmoTracker {
    pub weapon_name: String,
    pub slot_index: usize,
    pub current_ammo: u32,
}

impl AmmoTracker {
    pub fn new(weapon_name: impl Into<String>, slot_index: usize, current_ammo: u32) -> Self {
        Self {
            weapon_name: weapon_name.into(),
            slot_index,
            current_ammo,
        }
    }

    pub fn matches(&self, weapon_name: &str, slot_index: usize) -> bool {
        self.weapon_name == weapon_name && self.slot_index == slot_index
    }
}

/// A warband character sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub name: String,
    /// Current hit points
    pub hp: i32,
    pub armour: i32,
    pub agility: i32,
    pub presence: i32,
    pub strength: i32,
    pub toughness: i32,
    /// Number of inventory slots
    pub inventory: usize,
    pub items: Vec<InventorySlot>,
    /// Items found during play rather than bought; never cost or refund gold
    pub picked_up_items: Vec<String>,
    pub feats: Vec<String>,
    pub flaws: Vec<String>,
    pub injuries: Vec<String>,
    pub is_spellcaster: bool,
    /// `None` when not a spellcaster, `Some("")` when no scroll is chosen
    pub clean_scroll: Option<String>,
    pub unclean_scroll: Option<String>,
    pub ammo_trackers: Vec<AmmoTracker>,
}

impl Default for Character {
    fn default() -> Self {
        default_character()
    }
}

impl Character {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Builder used mostly by tests and importers: fills slots from names.
    pub fn with_items<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = names
            .into_iter()
            .map(|name| InventorySlot::item(name))
            .collect();
        self.inventory = self.items.len();
        self
    }

    pub fn slot(&self, index: usize) -> Option<&InventorySlot> {
        self.items.get(index)
    }

    /// Index of the first slot holding `name`.
    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|slot| slot.holds(name))
    }

    /// Names of all occupied slots, in slot order.
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(InventorySlot::item_name)
    }

    pub fn has_picked_up(&self, name: &str) -> bool {
        self.picked_up_items.iter().any(|item| item == name)
    }

    pub fn tracker(&self, weapon_name: &str, slot_index: usize) -> Option<&AmmoTracker> {
        self.ammo_trackers
            .iter()
            .find(|tracker| tracker.matches(weapon_name, slot_index))
    }

    pub fn tracker_mut(
        &mut self,
        weapon_name: &str,
        slot_index: usize,
    ) -> Option<&mut AmmoTracker> {
        self.ammo_trackers
            .iter_mut()
            .find(|tracker| tracker.matches(weapon_name, slot_index))
    }

    /// The name list holding modifiers of `kind`.
    pub fn modifiers(&self, kind: ModifierKind) -> &[String] {
        match kind {
            ModifierKind::Feat => &self.feats,
            ModifierKind::Flaw => &self.flaws,
            ModifierKind::Injury => &self.injuries,
        }
    }

    pub fn modifiers_mut(&mut self, kind: ModifierKind) -> &mut Vec<String> {
        match kind {
            ModifierKind::Feat => &mut self.feats,
            ModifierKind::Flaw => &mut self.flaws,
            ModifierKind::Injury => &mut self.injuries,
        }
    }

    pub fn has_modifier(&self, kind: ModifierKind, name: &str) -> bool {
        self.modifiers(kind).iter().any(|entry| entry == name)
    }

    pub fn stat(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Agility => self.agility,
            Stat::Presence => self.presence,
            Stat::Strength => self.strength,
            Stat::Toughness => self.toughness,
        }
    }

    pub fn set_stat(&mut self, stat: Stat, value: i32) {
        match stat {
            Stat::Agility => self.agility = value,
            Stat::Presence => self.presence = value,
            Stat::Strength => self.strength = value,
            Stat::Toughness => self.toughness = value,
        }
    }

    /// Pad with empty slots or truncate so that `items.len() == inventory`.
    pub(crate) fn fit_items_to_inventory(&mut self) {
        self.items.resize(self.inventory, InventorySlot::Empty);
    }

    /// Drop a picked-up marker for `name`, if present.
    pub(crate) fn forget_picked_up(&mut self, name: &str) {
        self.picked_up_items.retain(|item| item != name);
    }
}
