//! Item rules: ammo, inventory sizing and spellcaster restrictions.

use crate::catalog::Catalog;
use crate::entities::Character;
use crate::rules::character_stats::MIN_INVENTORY;

/// Items a spellcaster may never carry regardless of handedness.
const SPELLCASTER_FORBIDDEN: [&str; 2] = ["Heavy Armour", "Shield"];

pub fn item_uses_ammo(name: &str, catalog: &Catalog) -> bool {
    catalog.item(name).is_some_and(|item| item.uses_ammo())
}

/// Shots a freshly equipped or refilled item starts with.
pub fn get_initial_ammo(name: &str, catalog: &Catalog) -> u32 {
    catalog.item(name).and_then(|item| item.ammo).unwrap_or(0)
}

/// Copy of `character` with exactly `new_size` slots.
///
/// Truncates or pads with empty slots. No floor is applied here; service
/// level resizes go through [`offset_inventory`].
pub fn update_inventory(character: &Character, new_size: usize) -> Character {
    let mut next = character.clone();
    next.inventory = new_size;
    next.fit_items_to_inventory();
    next
}

/// Apply a slot delta to an inventory size, flooring at [`MIN_INVENTORY`].
pub fn offset_inventory(inventory: usize, delta: i32) -> usize {
    let shifted = i64::try_from(inventory).unwrap_or(i64::MAX) + i64::from(delta);
    usize::try_from(shifted).unwrap_or(0).max(MIN_INVENTORY)
}

pub fn is_item_restricted_for_spellcaster(name: &str, catalog: &Catalog) -> bool {
    SPELLCASTER_FORBIDDEN.contains(&name) || catalog.item(name).is_some_and(|item| item.two_handed)
}

/// Resize a working copy by `delta` slots, flooring at [`MIN_INVENTORY`].
pub(crate) fn resize_inventory(character: &mut Character, delta: i32) {
    character.inventory = offset_inventory(character.inventory, delta);
    character.fit_items_to_inventory();
}

/// Guarantee the two reserved scroll slots exist before writing to them.
pub(crate) fn reserve_scroll_slots(character: &mut Character) {
    character.inventory = character.inventory.max(MIN_INVENTORY);
    character.fit_items_to_inventory();
}

/// Match slots to `inventory` and drop trackers that no longer point at
/// their weapon.
pub(crate) fn ensure_inventory_size(character: &mut Character) {
    character.fit_items_to_inventory();
    let items = &character.items;
    character.ammo_trackers.retain(|tracker| {
        items
            .get(tracker.slot_index)
            .is_some_and(|slot| slot.holds(&tracker.weapon_name))
    });
}
