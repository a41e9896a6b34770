//! Partial updates for the warband and the character being edited.

use serde::Deserialize;
use warband_domain::{Character, InventorySlot, WarbandData};

/// Fields of a warband to overwrite. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WarbandPatch {
    pub warband_name: Option<String>,
    pub characters: Option<Vec<Character>>,
    pub gold: Option<u32>,
    pub xp: Option<u32>,
    pub notes: Option<String>,
}

impl WarbandPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.warband_name = Some(name.into());
        self
    }

    pub fn with_characters(mut self, characters: Vec<Character>) -> Self {
        self.characters = Some(characters);
        self
    }

    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold = Some(gold);
        self
    }

    pub fn with_xp(mut self, xp: u32) -> Self {
        self.xp = Some(xp);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(self, data: &WarbandData) -> WarbandData {
        let mut next = data.clone();
        if let Some(name) = self.warband_name {
            next.warband_name = name;
        }
        if let Some(characters) = self.characters {
            next.characters = characters;
        }
        if let Some(gold) = self.gold {
            next.gold = gold;
        }
        if let Some(xp) = self.xp {
            next.xp = xp;
        }
        if let Some(notes) = self.notes {
            next.notes = notes;
        }
        next
    }
}

/// Plain field edits on the character in the editor.
///
/// Replacing `items` also sets `inventory` to the new slot count. Edits that
/// need rule checks (modifiers, spellcasting, scrolls) have their own store
/// operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CharacterPatch {
    pub name: Option<String>,
    pub hp: Option<i32>,
    pub armour: Option<i32>,
    pub agility: Option<i32>,
    pub presence: Option<i32>,
    pub strength: Option<i32>,
    pub toughness: Option<i32>,
    pub items: Option<Vec<InventorySlot>>,
}

impl CharacterPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_hp(mut self, hp: i32) -> Self {
        self.hp = Some(hp);
        self
    }

    pub fn with_items(mut self, items: Vec<InventorySlot>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn apply_to(self, character: &Character) -> Character {
        let mut next = character.clone();
        if let Some(name) = self.name {
            next.name = name;
        }
        if let Some(hp) = self.hp {
            next.hp = hp;
        }
        if let Some(armour) = self.armour {
            next.armour = armour;
        }
        if let Some(agility) = self.agility {
            next.agility = agility;
        }
        if let Some(presence) = self.presence {
            next.presence = presence;
        }
        if let Some(strength) = self.strength {
            next.strength = strength;
        }
        if let Some(toughness) = self.toughness {
            next.toughness = toughness;
        }
        if let Some(items) = self.items {
            next.inventory = items.len();
            next.items = items;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warband_patch_only_touches_given_fields() {
        let data = WarbandData::named("Crows").with_gold(30);

        let next = WarbandPatch::new().with_notes("camp at the ford").apply_to(&data);

        assert_eq!(next.warband_name, "Crows");
        assert_eq!(next.gold, 30);
        assert_eq!(next.notes, "camp at the ford");
    }

    #[test]
    fn empty_patch_is_identity() {
        let data = WarbandData::named("Crows");
        assert!(WarbandPatch::new().is_empty());
        assert_eq!(WarbandPatch::new().apply_to(&data), data);
    }

    #[test]
    fn character_patch_items_set_inventory() {
        let character = Character::named("Vex");

        let next = CharacterPatch::new()
            .with_name("Vexa")
            .with_items(vec![InventorySlot::item("Sword"), InventorySlot::Empty])
            .apply_to(&character);

        assert_eq!(next.name, "Vexa");
        assert_eq!(next.inventory, 2);
        assert_eq!(next.hp, character.hp);
    }

    #[test]
    fn character_patch_deserializes_camel_case() {
        let patch: CharacterPatch =
            serde_json::from_value(serde_json::json!({ "name": "Vex", "hp": 3 })).unwrap();
        assert_eq!(patch, CharacterPatch::new().with_name("Vex").with_hp(3));
    }
}
