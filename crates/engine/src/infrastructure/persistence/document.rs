//! Stored warband document shape and normalization.
//!
//! Documents written by older clients may lack any field. Loading goes
//! through `StoredWarband`, where everything is optional, and fills the
//! gaps from a fresh default character or the warband defaults.

use serde::{Deserialize, Serialize};
use warband_domain::rules::character_stats::{default_character, MIN_INVENTORY};
use warband_domain::{AmmoTracker, Character, InventorySlot, WarbandData, STARTING_GOLD};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredCharacter {
    pub name: Option<String>,
    pub hp: Option<i32>,
    pub armour: Option<i32>,
    pub agility: Option<i32>,
    pub presence: Option<i32>,
    pub strength: Option<i32>,
    pub toughness: Option<i32>,
    pub inventory: Option<usize>,
    pub items: Option<Vec<InventorySlot>>,
    pub picked_up_items: Option<Vec<String>>,
    pub feats: Option<Vec<String>>,
    pub flaws: Option<Vec<String>>,
    pub injuries: Option<Vec<String>>,
    pub is_spellcaster: Option<bool>,
    pub clean_scroll: Option<String>,
    pub unclean_scroll: Option<String>,
    pub ammo_trackers: Option<Vec<AmmoTracker>>,
}

impl StoredCharacter {
    pub fn normalize(self) -> Character {
        let base = default_character();

        // Without a stored size, trust the stored slots over the default.
        let inventory = self
            .inventory
            .or_else(|| self.items.as_ref().map(Vec::len))
            .unwrap_or(base.inventory)
            .max(MIN_INVENTORY);
        let mut items = self.items.unwrap_or_default();
        items.resize(inventory, InventorySlot::Empty);

        Character {
            name: self.name.unwrap_or(base.name),
            hp: self.hp.unwrap_or(base.hp),
            armour: self.armour.unwrap_or(base.armour),
            agility: self.agility.unwrap_or(base.agility),
            presence: self.presence.unwrap_or(base.presence),
            strength: self.strength.unwrap_or(base.strength),
            toughness: self.toughness.unwrap_or(base.toughness),
            inventory,
            items,
            picked_up_items: self.picked_up_items.unwrap_or_default(),
            feats: self.feats.unwrap_or_default(),
            flaws: self.flaws.unwrap_or_default(),
            injuries: self.injuries.unwrap_or_default(),
            is_spellcaster: self.is_spellcaster.unwrap_or(base.is_spellcaster),
            clean_scroll: self.clean_scroll.or(base.clean_scroll),
            unclean_scroll: self.unclean_scroll.or(base.unclean_scroll),
            ammo_trackers: self.ammo_trackers.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredWarband {
    pub warband_name: Option<String>,
    pub characters: Option<Vec<StoredCharacter>>,
    pub gold: Option<u32>,
    pub xp: Option<u32>,
    pub notes: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl StoredWarband {
    pub fn normalize(self) -> WarbandData {
        WarbandData {
            warband_name: self.warband_name.unwrap_or_default(),
            characters: self
                .characters
                .unwrap_or_default()
                .into_iter()
                .map(StoredCharacter::normalize)
                .collect(),
            gold: self.gold.unwrap_or(STARTING_GOLD),
            xp: self.xp.unwrap_or(0),
            notes: self.notes.unwrap_or_default(),
        }
    }
}

/// Document as written: the warband plus bookkeeping timestamps (RFC 3339).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WarbandDocument<'a> {
    #[serde(flatten)]
    pub data: &'a WarbandData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}
