//! Character stat rules: cost, derived stats, base values and HP clamping.

use crate::catalog::Catalog;
use crate::entities::{Character, ModifierKind};
use crate::value_objects::{InventorySlot, ModifiedStats};

pub const BASE_HP: i32 = 8;
pub const BASE_INVENTORY: i32 = 5;
/// Floor applied by every service-level inventory resize.
pub const MIN_INVENTORY: usize = 2;
/// Flat surcharge for making a character a spellcaster.
pub const SPELLCASTER_COST: u32 = 5;

/// Gold value of a character: bought items plus the spellcaster surcharge.
///
/// Picked-up items, placeholders and names unknown to the catalog cost
/// nothing.
pub fn calculate_character_cost(character: &Character, catalog: &Catalog) -> u32 {
    let items_cost: u32 = character
        .item_names()
        .filter(|name| !character.has_picked_up(name))
        .map(|name| catalog.item_cost(name))
        .sum();

    let spellcaster_cost = if character.is_spellcaster {
        SPELLCASTER_COST
    } else {
        0
    };

    items_cost + spellcaster_cost
}

/// A fresh, unnamed character with base stats and empty slots.
pub fn default_character() -> Character {
    let strength = 0;
    let toughness = 0;
    let inventory = base_inventory_size(strength);

    Character {
        name: String::new(),
        hp: get_base_hp(toughness),
        armour: 0,
        agility: 0,
        presence: 0,
        strength,
        toughness,
        inventory,
        items: vec![InventorySlot::Empty; inventory],
        picked_up_items: Vec::new(),
        feats: Vec::new(),
        flaws: Vec::new(),
        injuries: Vec::new(),
        is_spellcaster: false,
        clean_scroll: Some(String::new()),
        unclean_scroll: Some(String::new()),
        ammo_trackers: Vec::new(),
    }
}

/// Sum of catalog armour over `item_names`.
pub fn calculate_total_armour<'a, I>(item_names: I, catalog: &Catalog) -> i32
where
    I: IntoIterator<Item = &'a str>,
{
    item_names
        .into_iter()
        .filter_map(|name| catalog.item(name))
        .map(|item| item.armour.unwrap_or(0))
        .sum()
}

/// Aggregate a character's stats over equipment, feats, flaws and injuries.
///
/// Equipment only contributes extra inventory slots. Modifiers are folded in
/// feat, flaw, injury order, so the last entry carrying a weapon restriction
/// decides the result.
pub fn calculate_modified_stats(character: &Character, catalog: &Catalog) -> ModifiedStats {
    let mut stats = ModifiedStats {
        agility: character.agility,
        presence: character.presence,
        strength: character.strength,
        toughness: character.toughness,
        ..ModifiedStats::default()
    };

    stats.equipment_slots += character
        .item_names()
        .filter_map(|name| catalog.item(name))
        .map(|item| item.inventory_delta())
        .sum::<i32>();

    for kind in ModifierKind::ALL {
        for name in character.modifiers(kind) {
            if let Some(modifier) = catalog.modifier(kind, name) {
                stats.apply(&modifier.stat_modifiers);
            }
        }
    }

    stats
}

pub fn get_base_hp(toughness: i32) -> i32 {
    BASE_HP + toughness
}

pub fn get_base_inventory(strength: i32) -> i32 {
    BASE_INVENTORY + strength
}

/// Base inventory as a slot count, never below [`MIN_INVENTORY`].
pub fn base_inventory_size(strength: i32) -> usize {
    usize::try_from(get_base_inventory(strength))
        .unwrap_or(0)
        .max(MIN_INVENTORY)
}

/// Result of [`clamp_hp_to_max`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HpClamp {
    pub character: Character,
    pub max_hp: i32,
}

/// Cap current HP at `base_hp + modified.hp`.
pub fn clamp_hp_to_max(character: &Character, base_hp: i32, modified: &ModifiedStats) -> HpClamp {
    let max_hp = base_hp + modified.hp;
    let mut next = character.clone();
    next.hp = next.hp.min(max_hp);
    HpClamp {
        character: next,
        max_hp,
    }
}

/// Maximum HP of a character, from its toughness and modifiers.
pub fn max_hp(character: &Character, catalog: &Catalog) -> i32 {
    let modified = calculate_modified_stats(character, catalog);
    get_base_hp(modified.toughness) + modified.hp
}
