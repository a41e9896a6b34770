//! Edit-session character operations.
//!
//! These back the character editor: swapping items, applying feats, flaws
//! and injuries, resizing with strength and picking scrolls. Like the
//! gameplay mutations they never touch their input.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entities::{AmmoTracker, Character, ModifierRef};
use crate::rules::character_stats::{base_inventory_size, get_base_hp};
use crate::rules::items::{
    ensure_inventory_size, get_initial_ammo, item_uses_ammo, offset_inventory, resize_inventory,
};
use crate::rules::spellcaster::{handle_scroll_select, handle_spellcaster_change, SpellcasterChange};
use crate::value_objects::{InventorySlot, ScrollKind, Stat, WeaponRestriction};

/// Outcome of removing an item during an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRemoval {
    pub updated_character: Character,
    pub gold_refund: u32,
}

/// A stat edit together with the inventory ceiling the editor allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatChange {
    pub stat: Stat,
    pub value: i32,
    pub max_inventory: usize,
}

pub fn apply_spellcaster_change(
    character: &Character,
    original: Option<&Character>,
    checked: bool,
    catalog: &Catalog,
) -> SpellcasterChange {
    handle_spellcaster_change(character, original, checked, catalog)
}

/// Replace whatever sits in `slot_index` with `new_item`.
///
/// Outgoing and incoming items adjust the inventory by their extra slots.
/// The slot list is cut to the new size before it is padded, so a shrink can
/// drop an item sitting in a high slot.
pub fn update_item_selection(
    character: &Character,
    slot_index: usize,
    new_item: &str,
    catalog: &Catalog,
) -> Character {
    let mut next = character.clone();
    let outgoing = next
        .slot(slot_index)
        .and_then(InventorySlot::item_name)
        .map(str::to_string);

    if let Some(outgoing) = outgoing.as_deref() {
        if item_uses_ammo(outgoing, catalog) {
            next.ammo_trackers.retain(|tracker| !tracker.matches(outgoing, slot_index));
        }
        if let Some(item) = catalog.item(outgoing) {
            next.inventory = offset_inventory(next.inventory, -item.inventory_delta());
        }
    }

    if let Some(item) = catalog.item(new_item) {
        next.inventory = offset_inventory(next.inventory, item.inventory_delta());
    }

    if let Some(slot) = next.items.get_mut(slot_index) {
        *slot = InventorySlot::item(new_item);
    }
    next.items.truncate(next.inventory);

    let placed = next.slot(slot_index).is_some_and(|slot| slot.holds(new_item));
    if placed && item_uses_ammo(new_item, catalog) {
        next.ammo_trackers.push(AmmoTracker::new(
            new_item,
            slot_index,
            get_initial_ammo(new_item, catalog),
        ));
    }

    ensure_inventory_size(&mut next);
    next
}

/// Remove an item, reporting the gold owed back for it.
///
/// A refund is due only for an item with a cost that was on the character
/// when editing began (`original_items`) and was not picked up in play.
pub fn remove_item_with_optional_refund(
    character: &Character,
    item_name: &str,
    original_items: &[InventorySlot],
    slot_index: Option<usize>,
    catalog: &Catalog,
) -> ItemRemoval {
    let mut next = character.clone();

    let index = slot_index.or_else(|| next.find_item(item_name));
    let Some(index) = index.filter(|i| next.slot(*i).is_some_and(|slot| slot.holds(item_name)))
    else {
        return ItemRemoval {
            updated_character: next,
            gold_refund: 0,
        };
    };

    let item = catalog.item(item_name);
    if let Some(item) = item {
        next.inventory = offset_inventory(next.inventory, -item.inventory_delta());
    }

    next.items[index] = InventorySlot::Empty;

    let was_picked_up = next.has_picked_up(item_name);
    next.forget_picked_up(item_name);

    if item_uses_ammo(item_name, catalog) {
        next.ammo_trackers.retain(|tracker| !tracker.matches(item_name, index));
    }

    ensure_inventory_size(&mut next);

    let owned_at_start = original_items.iter().any(|slot| slot.holds(item_name));
    let gold_refund = match item {
        Some(item) if item.cost > 0 && owned_at_start && !was_picked_up => item.cost,
        _ => 0,
    };

    ItemRemoval {
        updated_character: next,
        gold_refund,
    }
}

pub fn remove_item(
    character: &Character,
    item_name: &str,
    slot_index: Option<usize>,
    catalog: &Catalog,
) -> Character {
    remove_item_with_optional_refund(character, item_name, &[], slot_index, catalog)
        .updated_character
}

/// Set a base stat and keep HP and inventory in line with it.
///
/// Toughness caps HP at the new base. Strength moves the inventory into
/// `[base, max_inventory]`, the ceiling winning when the two disagree.
pub fn update_stat_and_inventory(character: &Character, change: &StatChange) -> Character {
    let mut next = character.clone();
    next.set_stat(change.stat, change.value);

    match change.stat {
        Stat::Toughness => {
            next.hp = next.hp.min(get_base_hp(change.value));
        }
        Stat::Strength => {
            let base = base_inventory_size(change.value);
            if next.inventory > change.max_inventory {
                next.inventory = change.max_inventory;
            } else if next.inventory < base {
                next.inventory = base;
            }
            ensure_inventory_size(&mut next);
        }
        Stat::Agility | Stat::Presence => {}
    }

    next
}

/// Give the character a feat, flaw or injury from the catalog.
///
/// Unknown or already applied modifiers leave the character as is. A
/// one-handed restriction strips every two-handed item currently carried.
pub fn apply_modifier(
    character: &Character,
    modifier: &ModifierRef,
    catalog: &Catalog,
) -> Character {
    let mut next = character.clone();
    let Some(entry) = catalog.modifier(modifier.kind, &modifier.name) else {
        return next;
    };
    if next.has_modifier(modifier.kind, &modifier.name) {
        return next;
    }

    next.modifiers_mut(modifier.kind).push(modifier.name.clone());

    let delta = entry.inventory_delta();
    if delta != 0 {
        resize_inventory(&mut next, delta);
    }

    if entry.stat_modifiers.weapon_restrictions == Some(WeaponRestriction::OneHanded) {
        for slot in next.items.iter_mut() {
            let two_handed = slot
                .item_name()
                .and_then(|name| catalog.item(name))
                .is_some_and(|item| item.two_handed);
            if two_handed {
                *slot = InventorySlot::Empty;
            }
        }
    }

    ensure_inventory_size(&mut next);
    next
}

/// Take a feat, flaw or injury away, reversing its slot delta.
pub fn remove_modifier(
    character: &Character,
    modifier: &ModifierRef,
    catalog: &Catalog,
) -> Character {
    let mut next = character.clone();
    if !next.has_modifier(modifier.kind, &modifier.name) {
        return next;
    }

    let delta = catalog
        .modifier(modifier.kind, &modifier.name)
        .map_or(0, |entry| entry.inventory_delta());
    if delta != 0 {
        resize_inventory(&mut next, -delta);
        ensure_inventory_size(&mut next);
    }

    next.modifiers_mut(modifier.kind).retain(|entry| *entry != modifier.name);
    next
}

pub fn select_scroll(
    character: &Character,
    kind: ScrollKind,
    scroll_name: Option<&str>,
) -> Character {
    handle_scroll_select(character, kind, scroll_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::character_stats::{default_character, MIN_INVENTORY};

    fn catalog() -> &'static Catalog {
        Catalog::standard()
    }

    #[test]
    fn equipping_backpack_adds_two_slots() {
        let character = default_character();

        let next = update_item_selection(&character, 0, "Backpack", catalog());

        assert_eq!(next.inventory, 7);
        assert_eq!(next.items.len(), 7);
        assert!(next.items[0].holds("Backpack"));
    }

    #[test]
    fn swapping_out_backpack_shrinks_inventory() {
        let with_pack = update_item_selection(&default_character(), 0, "Backpack", catalog());
        let mut with_pack = update_item_selection(&with_pack, 6, "Dagger", catalog());
        with_pack = update_item_selection(&with_pack, 0, "Sword", catalog());

        assert_eq!(with_pack.inventory, 5);
        assert_eq!(with_pack.items.len(), 5);
        assert!(with_pack.items[0].holds("Sword"));
        assert!(with_pack.find_item("Dagger").is_none());
    }

    #[test]
    fn swapping_ranged_weapons_replaces_tracker() {
        let bow = update_item_selection(&default_character(), 2, "Bow", catalog());
        assert_eq!(bow.ammo_trackers, vec![AmmoTracker::new("Bow", 2, 3)]);

        let crossbow = update_item_selection(&bow, 2, "Crossbow", catalog());
        assert_eq!(crossbow.ammo_trackers, vec![AmmoTracker::new("Crossbow", 2, 5)]);

        let cleared = update_item_selection(&crossbow, 2, "", catalog());
        assert!(cleared.ammo_trackers.is_empty());
        assert!(cleared.items[2].is_empty());
    }

    #[test]
    fn removing_purchased_item_refunds_cost() {
        let original = Character::named("Hero").with_items(["Sword", "Bow", ""]);

        let removal =
            remove_item_with_optional_refund(&original, "Sword", &original.items, None, catalog());

        assert_eq!(removal.gold_refund, 4);
        assert!(removal.updated_character.items[0].is_empty());
    }

    #[test]
    fn removing_picked_up_item_refunds_nothing() {
        let mut character = Character::named("Hero").with_items(["Sword", "Bow", ""]);
        character.picked_up_items.push("Bow".into());
        character.ammo_trackers.push(AmmoTracker::new("Bow", 1, 3));
        let original_items = character.items.clone();

        let removal = remove_item_with_optional_refund(
            &character,
            "Bow",
            &original_items,
            Some(1),
            catalog(),
        );

        assert_eq!(removal.gold_refund, 0);
        assert!(removal.updated_character.picked_up_items.is_empty());
        assert!(removal.updated_character.ammo_trackers.is_empty());
    }

    #[test]
    fn removing_item_added_this_session_refunds_nothing() {
        let original = Character::named("Hero").with_items(["", ""]);
        let edited = update_item_selection(&original, 0, "Helm", catalog());

        let removal =
            remove_item_with_optional_refund(&edited, "Helm", &original.items, None, catalog());

        assert_eq!(removal.gold_refund, 0);
    }

    #[test]
    fn removing_absent_item_is_noop() {
        let character = Character::named("Hero").with_items(["Sword", ""]);

        let removal =
            remove_item_with_optional_refund(&character, "Bow", &character.items, None, catalog());

        assert_eq!(removal.updated_character, character);
        assert_eq!(removal.gold_refund, 0);
        assert_eq!(remove_item(&character, "Sword", None, catalog()).find_item("Sword"), None);
    }

    #[test]
    fn toughness_caps_hp() {
        let character = default_character();
        let change = StatChange {
            stat: Stat::Toughness,
            value: -2,
            max_inventory: 5,
        };

        let next = update_stat_and_inventory(&character, &change);

        assert_eq!(next.toughness, -2);
        assert_eq!(next.hp, 6);
    }

    #[test]
    fn strength_moves_inventory_within_bounds() {
        let character = default_character();

        let stronger = update_stat_and_inventory(
            &character,
            &StatChange {
                stat: Stat::Strength,
                value: 2,
                max_inventory: 10,
            },
        );
        assert_eq!(stronger.inventory, 7);
        assert_eq!(stronger.items.len(), 7);

        let capped = update_stat_and_inventory(
            &stronger,
            &StatChange {
                stat: Stat::Strength,
                value: 2,
                max_inventory: 6,
            },
        );
        assert_eq!(capped.inventory, 6);
        assert_eq!(capped.items.len(), 6);

        let weaker = update_stat_and_inventory(
            &capped,
            &StatChange {
                stat: Stat::Strength,
                value: -4,
                max_inventory: 6,
            },
        );
        assert_eq!(weaker.inventory, 6);
        assert!(weaker.inventory >= MIN_INVENTORY);
    }

    #[test]
    fn apply_modifier_is_idempotent() {
        let character = default_character();
        let feat = ModifierRef::feat("Lucky goblin foot");

        let once = apply_modifier(&character, &feat, catalog());
        let twice = apply_modifier(&once, &feat, catalog());

        assert_eq!(once.feats, vec!["Lucky goblin foot".to_string()]);
        assert_eq!(once.inventory, 4);
        assert_eq!(twice, once);
    }

    #[test]
    fn apply_unknown_modifier_is_noop() {
        let character = default_character();
        assert_eq!(
            apply_modifier(&character, &ModifierRef::flaw("Nonexistent"), catalog()),
            character
        );
    }

    #[test]
    fn one_handed_restriction_strips_two_handed_gear() {
        let mut character =
            Character::named("Veteran").with_items(["Great Axe", "Sword", "Bow", "", ""]);
        character.ammo_trackers.push(AmmoTracker::new("Bow", 2, 3));

        let next = apply_modifier(&character, &ModifierRef::injury("Lost Limb"), catalog());

        assert_eq!(next.inventory, 4);
        assert!(next.items[0].is_empty());
        assert!(next.items[1].holds("Sword"));
        assert!(next.items[2].is_empty());
        assert!(next.ammo_trackers.is_empty());
        assert_eq!(next.injuries, vec!["Lost Limb".to_string()]);
    }

    #[test]
    fn remove_modifier_reverses_slot_delta() {
        let applied = apply_modifier(
            &default_character(),
            &ModifierRef::feat("Lucky goblin foot"),
            catalog(),
        );

        let removed = remove_modifier(&applied, &ModifierRef::feat("Lucky goblin foot"), catalog());

        assert!(removed.feats.is_empty());
        assert_eq!(removed.inventory, 5);
        assert_eq!(removed.items.len(), 5);
        assert_eq!(
            remove_modifier(&removed, &ModifierRef::feat("Lucky goblin foot"), catalog()),
            removed
        );
    }

    #[test]
    fn select_scroll_leaves_input_untouched() {
        let mut character = default_character();
        character.is_spellcaster = true;

        let next = select_scroll(&character, ScrollKind::Clean, Some("Mind Blast"));

        assert!(next.items[0].holds("Mind Blast"));
        assert!(character.items[0].is_empty());
    }

    #[test]
    fn spellcaster_wrapper_reports_refund() {
        let original = Character::named("Mage").with_items(["Shield", "", ""]);

        let change = apply_spellcaster_change(&original, Some(&original), true, catalog());

        assert_eq!(change.refund_amount, 2);
        assert!(change.character.is_spellcaster);
    }
}
