//! Gameplay-time character mutations.
//!
//! Each function clones its input, applies one focused change and returns
//! the clone. Absent targets (no tracker, unknown slot, missing injury) are
//! not errors: the returned character simply equals the input.

use crate::catalog::Catalog;
use crate::entities::{AmmoTracker, Character, ModifierKind, WarbandData};
use crate::error::DomainError;
use crate::rules::items::{
    ensure_inventory_size, get_initial_ammo, item_uses_ammo, offset_inventory, reserve_scroll_slots,
    resize_inventory,
};
use crate::value_objects::{InventorySlot, ScrollKind};

/// The consumable that disappears once its last shot is used.
pub const AMMO_ITEM: &str = "Ammo";

/// Independent copy of a character; no collection is shared with the source.
pub fn clone_character(character: &Character) -> Character {
    character.clone()
}

/// Independent copy of a warband and all of its characters.
pub fn clone_warband_data(data: &WarbandData) -> WarbandData {
    data.clone()
}

pub fn clamp_hp(character: &Character, max_hp: i32) -> Character {
    let mut next = character.clone();
    next.hp = next.hp.min(max_hp);
    next
}

pub fn take_damage(character: &Character, amount: i32) -> Character {
    let mut next = character.clone();
    next.hp = next.hp.saturating_sub(amount).max(0);
    next
}

/// Bring a downed character back on 1 HP. Callers check that it is down.
pub fn revive_character(character: &Character) -> Character {
    let mut next = character.clone();
    next.hp = 1;
    next
}

/// Put an item found during play into `slot_index`.
///
/// For a spellcaster, slots 0 and 1 only take scrolls; a scroll lands in the
/// slot of its own kind. Anything else there is rejected and the input is
/// left untouched.
pub fn pick_up_item(
    character: &Character,
    slot_index: usize,
    item_name: &str,
    catalog: &Catalog,
) -> Result<Character, DomainError> {
    let mut next = character.clone();
    next.fit_items_to_inventory();

    if next.is_spellcaster && slot_index < ScrollKind::ALL.len() {
        let kind = catalog
            .scroll_kind(item_name)
            .ok_or_else(DomainError::scroll_slot_mismatch)?;
        let scroll = Some(item_name.to_string());
        match kind {
            ScrollKind::Clean => next.clean_scroll = scroll,
            ScrollKind::Unclean => next.unclean_scroll = scroll,
        }
        reserve_scroll_slots(&mut next);
        next.items[kind.slot_index()] = InventorySlot::item(item_name);
    } else {
        let len = next.items.len();
        let slot = next
            .items
            .get_mut(slot_index)
            .ok_or_else(|| DomainError::slot_out_of_range(slot_index, len))?;
        *slot = InventorySlot::item(item_name);
    }

    if !next.has_picked_up(item_name) {
        next.picked_up_items.push(item_name.to_string());
    }

    if item_uses_ammo(item_name, catalog) {
        next.ammo_trackers.push(AmmoTracker::new(
            item_name,
            slot_index,
            get_initial_ammo(item_name, catalog),
        ));
    }

    if let Some(delta) = catalog
        .item(item_name)
        .map(|item| item.inventory_delta())
        .filter(|delta| *delta != 0)
    {
        resize_inventory(&mut next, delta);
    }

    ensure_inventory_size(&mut next);
    Ok(next)
}

/// Take an item off a character.
///
/// Without `slot_index` the first slot holding `item_name` is used. A
/// spellcaster's scroll goes back to its placeholder rather than an empty
/// slot. Ammo trackers are removed by weapon name across all slots.
pub fn drop_item(
    character: &Character,
    item_name: &str,
    slot_index: Option<usize>,
    catalog: &Catalog,
) -> Character {
    let mut next = character.clone();

    let index = match slot_index {
        Some(index) => index,
        None => match next.find_item(item_name) {
            Some(index) => index,
            None => return next,
        },
    };
    if !next.slot(index).is_some_and(|slot| slot.holds(item_name)) {
        return next;
    }

    let scroll_kind = catalog.scroll_kind(item_name);
    match scroll_kind {
        Some(kind) if next.is_spellcaster && index < ScrollKind::ALL.len() => {
            match kind {
                ScrollKind::Clean => next.clean_scroll = Some(String::new()),
                ScrollKind::Unclean => next.unclean_scroll = Some(String::new()),
            }
            reserve_scroll_slots(&mut next);
            next.items[kind.slot_index()] = InventorySlot::ScrollPlaceholder(kind);
        }
        _ => {
            if let Some(delta) = catalog
                .item(item_name)
                .map(|item| item.inventory_delta())
                .filter(|delta| *delta != 0)
            {
                next.inventory = offset_inventory(next.inventory, -delta);
            }
            next.items[index] = InventorySlot::Empty;
        }
    }

    next.forget_picked_up(item_name);

    if item_uses_ammo(item_name, catalog) {
        next.ammo_trackers.retain(|tracker| tracker.weapon_name != item_name);
    }

    ensure_inventory_size(&mut next);
    next
}

/// Spend one shot from the tracker at `(weapon_name, slot_index)`.
///
/// The last shot of a pure [`AMMO_ITEM`] consumes the item itself.
pub fn use_ammo(
    character: &Character,
    weapon_name: &str,
    slot_index: usize,
    catalog: &Catalog,
) -> Character {
    let mut next = character.clone();
    let Some(tracker) = next.tracker_mut(weapon_name, slot_index) else {
        return next;
    };
    if tracker.current_ammo == 0 {
        return next;
    }

    let is_last_shot = tracker.current_ammo == 1;
    let is_pure_ammo = catalog
        .item(weapon_name)
        .is_some_and(|item| item.name == AMMO_ITEM);

    if is_last_shot && is_pure_ammo {
        if let Some(slot) = next.items.get_mut(slot_index) {
            *slot = InventorySlot::Empty;
        }
        next.forget_picked_up(weapon_name);
        next.ammo_trackers.retain(|tracker| !tracker.matches(weapon_name, slot_index));
    } else {
        tracker.current_ammo -= 1;
    }

    next
}

/// Reload an empty tracker to the item's catalog capacity.
pub fn refill_ammo(
    character: &Character,
    weapon_name: &str,
    slot_index: usize,
    catalog: &Catalog,
) -> Character {
    let mut next = character.clone();
    if let Some(tracker) = next
        .tracker_mut(weapon_name, slot_index)
        .filter(|tracker| tracker.current_ammo == 0)
    {
        tracker.current_ammo = get_initial_ammo(weapon_name, catalog);
    }
    next
}

pub fn add_injury(character: &Character, injury_name: &str, catalog: &Catalog) -> Character {
    let mut next = character.clone();
    if next.has_modifier(ModifierKind::Injury, injury_name) {
        return next;
    }

    let delta = injury_inventory_delta(injury_name, catalog);
    if delta != 0 {
        resize_inventory(&mut next, delta);
        ensure_inventory_size(&mut next);
    }
    next.injuries.push(injury_name.to_string());
    next
}

/// Heal an injury, giving back any slots it took.
pub fn remove_injury(character: &Character, injury_name: &str, catalog: &Catalog) -> Character {
    let mut next = character.clone();
    if !next.has_modifier(ModifierKind::Injury, injury_name) {
        return next;
    }

    let delta = injury_inventory_delta(injury_name, catalog);
    if delta != 0 {
        resize_inventory(&mut next, -delta);
        ensure_inventory_size(&mut next);
    }
    next.injuries.retain(|injury| injury != injury_name);
    next
}

fn injury_inventory_delta(injury_name: &str, catalog: &Catalog) -> i32 {
    catalog
        .modifier(ModifierKind::Injury, injury_name)
        .map_or(0, |injury| injury.inventory_delta())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SCROLL_SLOT_MISMATCH;
    use crate::rules::character_stats::{default_character, MIN_INVENTORY};

    fn catalog() -> &'static Catalog {
        Catalog::standard()
    }

    fn spellcaster() -> Character {
        let mut character = Character::named("Mage");
        character.is_spellcaster = true;
        character
    }

    #[test]
    fn take_damage_never_goes_below_zero() {
        let mut character = default_character();
        character.hp = 3;

        assert_eq!(take_damage(&character, 2).hp, 1);
        assert_eq!(take_damage(&character, 10).hp, 0);
        assert_eq!(take_damage(&character, i32::MAX).hp, 0);
        assert_eq!(character.hp, 3);
    }

    #[test]
    fn clamp_and_revive() {
        let mut character = default_character();
        character.hp = 9;
        assert_eq!(clamp_hp(&character, 7).hp, 7);
        assert_eq!(clamp_hp(&character, 12).hp, 9);

        character.hp = 0;
        assert_eq!(revive_character(&character).hp, 1);
    }

    #[test]
    fn clone_warband_data_is_independent() {
        let data = WarbandData::named("Band").with_characters(vec![Character::named("A")]);
        let mut copy = clone_warband_data(&data);
        copy.characters[0].items[0] = InventorySlot::item("Sword");

        assert!(data.characters[0].items[0].is_empty());
        assert_eq!(clone_character(&data.characters[0]), data.characters[0]);
    }

    #[test]
    fn pick_up_bow_adds_tracker() {
        let character = default_character();

        let next = pick_up_item(&character, 0, "Bow", catalog()).unwrap();

        assert!(next.items[0].holds("Bow"));
        assert_eq!(next.picked_up_items, vec!["Bow".to_string()]);
        assert_eq!(next.ammo_trackers, vec![AmmoTracker::new("Bow", 0, 3)]);
        assert_eq!(next.items.len(), next.inventory);
    }

    #[test]
    fn pick_up_does_not_duplicate_picked_up_entry() {
        let mut character = default_character();
        character.picked_up_items.push("Dagger".into());

        let next = pick_up_item(&character, 2, "Dagger", catalog()).unwrap();
        assert_eq!(next.picked_up_items, vec!["Dagger".to_string()]);
    }

    #[test]
    fn pick_up_backpack_grows_inventory() {
        let next = pick_up_item(&default_character(), 4, "Backpack", catalog()).unwrap();
        assert_eq!(next.inventory, 7);
        assert_eq!(next.items.len(), 7);
    }

    #[test]
    fn spellcaster_rejects_non_scroll_in_scroll_slot() {
        let character = spellcaster();

        let err = pick_up_item(&character, 0, "Sword", catalog()).unwrap_err();

        assert_eq!(err.to_string(), SCROLL_SLOT_MISMATCH);
    }

    #[test]
    fn spellcaster_scroll_goes_to_its_own_slot() {
        let character = spellcaster();

        let next = pick_up_item(&character, 0, "Doom", catalog()).unwrap();

        assert_eq!(next.unclean_scroll.as_deref(), Some("Doom"));
        assert!(next.items[1].holds("Doom"));
        assert!(next.items[0].is_empty());
    }

    #[test]
    fn pick_up_pads_items_short_of_inventory() {
        let mut character = Character::named("Scout").with_items(["Sword", "Dagger"]);
        character.inventory = 5;

        let next = pick_up_item(&character, 4, "Helm", catalog()).unwrap();

        assert_eq!(next.items.len(), 5);
        assert!(next.items[4].holds("Helm"));
        assert!(next.items[2].is_empty());
        assert!(next.items[3].is_empty());
    }

    #[test]
    fn scroll_pick_up_on_single_slot_reserves_scroll_slots() {
        let mut character = Character::named("Hedge Mage").with_items(["Doom"]);
        character.is_spellcaster = true;

        let next = pick_up_item(&character, 0, "Doom", catalog()).unwrap();

        assert_eq!(next.inventory, MIN_INVENTORY);
        assert!(next.items[1].holds("Doom"));
        assert_eq!(next.unclean_scroll.as_deref(), Some("Doom"));
    }

    #[test]
    fn scroll_drop_on_single_slot_reserves_scroll_slots() {
        let mut character = Character::named("Hedge Mage").with_items(["Doom"]);
        character.is_spellcaster = true;
        character.unclean_scroll = Some("Doom".into());

        let next = drop_item(&character, "Doom", None, catalog());

        assert_eq!(next.inventory, MIN_INVENTORY);
        assert_eq!(next.items.len(), MIN_INVENTORY);
        assert_eq!(next.items[1], InventorySlot::ScrollPlaceholder(ScrollKind::Unclean));
        assert_eq!(next.unclean_scroll.as_deref(), Some(""));
    }

    #[test]
    fn pick_up_out_of_range_is_rejected() {
        let result = pick_up_item(&default_character(), 9, "Sword", catalog());
        assert!(matches!(
            result,
            Err(DomainError::SlotOutOfRange { index: 9, len: 5 })
        ));
    }

    #[test]
    fn drop_item_blanks_slot_and_forgets_pick_up() {
        let picked = pick_up_item(&default_character(), 3, "Crossbow", catalog()).unwrap();

        let next = drop_item(&picked, "Crossbow", None, catalog());

        assert!(next.items[3].is_empty());
        assert!(next.picked_up_items.is_empty());
        assert!(next.ammo_trackers.is_empty());
    }

    #[test]
    fn drop_item_removes_trackers_by_name_across_slots() {
        let mut character = Character::named("Archer").with_items(["Bow", "Bow", ""]);
        character.ammo_trackers = vec![
            AmmoTracker::new("Bow", 0, 3),
            AmmoTracker::new("Bow", 1, 1),
        ];

        let next = drop_item(&character, "Bow", Some(0), catalog());

        assert!(next.items[0].is_empty());
        assert!(next.items[1].holds("Bow"));
        // The second bow keeps its slot but loses its tracker as well.
        assert!(next.ammo_trackers.is_empty());
    }

    #[test]
    fn dropping_spellcaster_scroll_restores_placeholder() {
        let mut character = spellcaster();
        character.items[0] = InventorySlot::item("Obey");
        character.clean_scroll = Some("Obey".into());

        let next = drop_item(&character, "Obey", None, catalog());

        assert_eq!(next.clean_scroll.as_deref(), Some(""));
        assert_eq!(next.items[0], InventorySlot::ScrollPlaceholder(ScrollKind::Clean));
    }

    #[test]
    fn dropping_backpack_shrinks_inventory() {
        let character =
            Character::named("Mule").with_items(["Sword", "Backpack", "", "", "", "", ""]);

        let next = drop_item(&character, "Backpack", None, catalog());

        assert_eq!(next.inventory, 5);
        assert_eq!(next.items.len(), 5);
        assert!(next.items[0].holds("Sword"));
        assert!(next.items[1].is_empty());
    }

    #[test]
    fn drop_missing_item_is_noop() {
        let character = Character::named("Hero").with_items(["Sword", ""]);
        assert_eq!(drop_item(&character, "Bow", None, catalog()), character);
        assert_eq!(drop_item(&character, "Sword", Some(1), catalog()), character);
    }

    #[test]
    fn use_ammo_decrements_weapon_tracker() {
        let mut character = Character::named("Archer").with_items(["Bow", ""]);
        character.ammo_trackers.push(AmmoTracker::new("Bow", 0, 1));

        let next = use_ammo(&character, "Bow", 0, catalog());

        assert_eq!(next.tracker("Bow", 0).map(|t| t.current_ammo), Some(0));
        assert!(next.items[0].holds("Bow"));
        assert_eq!(use_ammo(&next, "Bow", 0, catalog()), next);
    }

    #[test]
    fn last_shot_of_pure_ammo_consumes_item() {
        let mut character = Character::named("Archer").with_items(["Bow", "Ammo", ""]);
        character.picked_up_items.push("Ammo".into());
        character.ammo_trackers.push(AmmoTracker::new("Ammo", 1, 1));

        let next = use_ammo(&character, "Ammo", 1, catalog());

        assert!(next.items[1].is_empty());
        assert!(next.picked_up_items.is_empty());
        assert!(next.ammo_trackers.is_empty());
    }

    #[test]
    fn use_ammo_without_tracker_is_noop() {
        let character = Character::named("Archer").with_items(["Bow"]);
        assert_eq!(use_ammo(&character, "Bow", 0, catalog()), character);
    }

    #[test]
    fn refill_only_applies_to_empty_tracker() {
        let mut character = Character::named("Archer").with_items(["Crossbow"]);
        character.ammo_trackers.push(AmmoTracker::new("Crossbow", 0, 2));

        assert_eq!(refill_ammo(&character, "Crossbow", 0, catalog()), character);

        character.ammo_trackers[0].current_ammo = 0;
        let next = refill_ammo(&character, "Crossbow", 0, catalog());
        assert_eq!(next.tracker("Crossbow", 0).map(|t| t.current_ammo), Some(5));
    }

    #[test]
    fn injuries_resize_inventory_both_ways() {
        let character = default_character();

        let injured = add_injury(&character, "Lost Limb", catalog());
        assert_eq!(injured.inventory, 4);
        assert_eq!(injured.items.len(), 4);
        assert_eq!(injured.injuries, vec!["Lost Limb".to_string()]);

        let again = add_injury(&injured, "Lost Limb", catalog());
        assert_eq!(again, injured);

        let healed = remove_injury(&injured, "Lost Limb", catalog());
        assert_eq!(healed.inventory, 5);
        assert_eq!(healed.items.len(), 5);
        assert!(healed.injuries.is_empty());
    }

    #[test]
    fn removing_absent_injury_is_noop() {
        let character = default_character();
        assert_eq!(remove_injury(&character, "Lost Limb", catalog()), character);
    }

    #[test]
    fn inventory_invariant_holds_across_mutations() {
        let catalog = catalog();
        let mut character = default_character();
        character = pick_up_item(&character, 0, "Backpack", catalog).unwrap();
        character = pick_up_item(&character, 5, "Bow", catalog).unwrap();
        character = add_injury(&character, "Lost Limb", catalog);
        character = use_ammo(&character, "Bow", 5, catalog);
        character = drop_item(&character, "Backpack", None, catalog);
        character = remove_injury(&character, "Lost Limb", catalog);

        assert_eq!(character.items.len(), character.inventory);
        assert!(character
            .ammo_trackers
            .iter()
            .all(|tracker| tracker.slot_index < character.inventory));
    }
}
